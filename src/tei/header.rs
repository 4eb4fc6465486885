//! Bibliographic header reading.
//!
//! Two shapes of `sourceDesc` are found across the IGC:
//!
//! ```text
//! sourceDesc                      sourceDesc
//! └── bibl                        └── biblStruct
//!     ├── title                       ├── analytic      (optional)
//!     ├── author                      │   ├── title, author, idno, date
//!     ├── idno                        └── monogr
//!     └── date                            ├── title, author, idno, date
//!                                         └── imprint
//!                                             └── date
//! ```
//!
//! Title, author and source are read from the bibliographic level only (`analytic` if present,
//! `monogr` otherwise). The publication date falls back level by level.
use std::borrow::Cow;

use itertools::Itertools;

use crate::error::StructureError;
use crate::tei::node::TreeNode;

/// Language of the corpus. Localized titles in any other language are ignored.
pub const PRIMARY_LANG: &str = "is";

/// How the title is picked among the `title` nodes of the bibliographic level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleVariant {
    /// First `title` node, verbatim.
    First,
    /// `main` and `sub` titles in the primary language, joined by a space.
    MainSub,
    /// First title in the primary language, verbatim.
    Primary,
}

impl TitleVariant {
    /// Pick the title text among `titles`.
    /// Returns [None] when no node qualifies or when the resulting title is empty.
    pub fn select<N: TreeNode>(&self, titles: &[N]) -> Option<String> {
        let title = match self {
            TitleVariant::First => titles.first().and_then(|t| t.text()).map(Cow::into_owned),
            TitleVariant::MainSub => Some(
                titles
                    .iter()
                    .filter(|t| is_primary_lang(*t))
                    .filter(|t| matches!(t.attribute("type"), Some("main") | Some("sub")))
                    .filter_map(|t| t.non_empty_text())
                    .join(" "),
            ),
            TitleVariant::Primary => titles
                .iter()
                .find(|t| is_primary_lang(*t))
                .and_then(|t| t.text())
                .map(Cow::into_owned),
        };

        title.filter(|t| !t.is_empty())
    }
}

fn is_primary_lang<N: TreeNode>(node: &N) -> bool {
    node.xml_attribute("lang") == Some(PRIMARY_LANG)
}

/// Bibliographic fields of a document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Header {
    pub title: Option<String>,
    pub author: Option<String>,
    pub source: Option<String>,
    pub publish_timestamp: Option<String>,
}

impl Header {
    /// Read the fields of a single bibliographic level (`bibl`, `analytic` or `monogr`).
    fn from_level<N: TreeNode>(level: &N, title_variant: TitleVariant) -> Self {
        Self {
            title: title_variant.select(&level.children_by_tag("title")),
            author: first_text(level, "author"),
            source: first_text(level, "idno"),
            publish_timestamp: first_text(level, "date"),
        }
    }

    /// Locate `teiHeader/fileDesc/sourceDesc` under `root` and read it.
    pub fn read<N: TreeNode>(root: &N, title_variant: TitleVariant) -> Result<Self, StructureError> {
        let source_desc = root
            .child("teiHeader")
            .and_then(|header| header.child("fileDesc"))
            .and_then(|file_desc| file_desc.child("sourceDesc"))
            .ok_or(StructureError::MissingNode("teiHeader/fileDesc/sourceDesc"))?;

        let header = match source_desc.child("biblStruct") {
            Some(bibl_struct) => {
                let monogr = bibl_struct.children_by_tag("monogr").pop();

                match bibl_struct.children_by_tag("analytic").pop() {
                    Some(analytic) => {
                        let mut header = Self::from_level(&analytic, title_variant);
                        if header.publish_timestamp.is_none() {
                            header.publish_timestamp = monogr
                                .as_ref()
                                .and_then(|m| first_text(m, "date").or_else(|| imprint_date(m)));
                        }
                        header
                    }
                    None => {
                        let monogr = monogr.ok_or(StructureError::UnrecognizedHeader)?;
                        let mut header = Self::from_level(&monogr, title_variant);
                        if header.publish_timestamp.is_none() {
                            header.publish_timestamp = imprint_date(&monogr);
                        }
                        header
                    }
                }
            }
            None => {
                // later siblings take precedence
                let bibl = source_desc
                    .children_by_tag("bibl")
                    .pop()
                    .ok_or(StructureError::UnrecognizedHeader)?;
                Self::from_level(&bibl, title_variant)
            }
        };

        Ok(header)
    }
}

/// Non-empty text of the first `tag` child.
fn first_text<N: TreeNode>(node: &N, tag: &str) -> Option<String> {
    node.child(tag)
        .and_then(|child| child.non_empty_text().map(Cow::into_owned))
}

/// `imprint/date`, last imprint first.
fn imprint_date<N: TreeNode>(monogr: &N) -> Option<String> {
    monogr
        .children_by_tag("imprint")
        .iter()
        .rev()
        .find_map(|imprint| first_text(imprint, "date"))
}

#[cfg(test)]
mod tests {
    use super::{Header, TitleVariant};
    use crate::error::StructureError;

    fn header(source_desc: &str, variant: TitleVariant) -> Result<Header, StructureError> {
        let xml = format!(
            r#"<TEI xmlns="http://www.tei-c.org/ns/1.0"><teiHeader><fileDesc>
<titleStmt><title>ignored</title></titleStmt>
<sourceDesc>{}</sourceDesc>
</fileDesc></teiHeader></TEI>"#,
            source_desc
        );
        let doc = roxmltree::Document::parse(&xml).unwrap();
        Header::read(&doc.root_element(), variant)
    }

    #[test]
    fn flat_bibl() {
        let h = header(
            r#"<bibl><title>Dómur</title><author>Jón</author><idno>A-1</idno><date>2020-01-02</date></bibl>"#,
            TitleVariant::First,
        )
        .unwrap();

        assert_eq!(
            h,
            Header {
                title: Some("Dómur".to_string()),
                author: Some("Jón".to_string()),
                source: Some("A-1".to_string()),
                publish_timestamp: Some("2020-01-02".to_string()),
            }
        );
    }

    #[test]
    fn analytic_with_monogr_date() {
        let h = header(
            r#"<biblStruct>
<analytic><title>Grein</title><author>Anna</author></analytic>
<monogr><title>Blaðið</title><date>2019</date><imprint><date>2018</date></imprint></monogr>
</biblStruct>"#,
            TitleVariant::First,
        )
        .unwrap();

        assert_eq!(h.title.as_deref(), Some("Grein"));
        assert_eq!(h.author.as_deref(), Some("Anna"));
        assert_eq!(h.source, None);
        assert_eq!(h.publish_timestamp.as_deref(), Some("2019"));
    }

    #[test]
    fn analytic_with_imprint_date() {
        let h = header(
            r#"<biblStruct>
<analytic><title>Grein</title><date></date></analytic>
<monogr><title>Blaðið</title><imprint><date>2018</date></imprint></monogr>
</biblStruct>"#,
            TitleVariant::First,
        )
        .unwrap();

        assert_eq!(h.publish_timestamp.as_deref(), Some("2018"));
    }

    #[test]
    fn analytic_date_wins() {
        let h = header(
            r#"<biblStruct>
<analytic><title>Grein</title><date>2021</date></analytic>
<monogr><date>2019</date></monogr>
</biblStruct>"#,
            TitleVariant::First,
        )
        .unwrap();

        assert_eq!(h.publish_timestamp.as_deref(), Some("2021"));
    }

    #[test]
    fn monogr_only() {
        let h = header(
            r#"<biblStruct><monogr><title>Bók</title><idno>isbn</idno><imprint><date>1999</date></imprint></monogr></biblStruct>"#,
            TitleVariant::First,
        )
        .unwrap();

        assert_eq!(h.title.as_deref(), Some("Bók"));
        assert_eq!(h.source.as_deref(), Some("isbn"));
        assert_eq!(h.publish_timestamp.as_deref(), Some("1999"));
    }

    #[test]
    fn missing_everything() {
        let h = header(r#"<biblStruct><monogr/></biblStruct>"#, TitleVariant::First).unwrap();
        assert_eq!(h, Header::default());
    }

    #[test]
    fn unrecognized() {
        assert_eq!(
            header(r#"<biblStruct></biblStruct>"#, TitleVariant::First),
            Err(StructureError::UnrecognizedHeader)
        );
        assert_eq!(
            header(r#"<p>nothing</p>"#, TitleVariant::First),
            Err(StructureError::UnrecognizedHeader)
        );
    }

    #[test]
    fn missing_source_desc() {
        let doc = roxmltree::Document::parse("<TEI><teiHeader><fileDesc/></teiHeader></TEI>").unwrap();
        assert!(matches!(
            Header::read(&doc.root_element(), TitleVariant::First),
            Err(StructureError::MissingNode(_))
        ));
    }

    #[test]
    fn main_sub_titles() {
        let h = header(
            r#"<bibl>
<title type="main" xml:lang="en">Act</title>
<title type="main" xml:lang="is">Lög</title>
<title type="alt" xml:lang="is">Annað</title>
<title type="sub" xml:lang="is">um eitthvað</title>
</bibl>"#,
            TitleVariant::MainSub,
        )
        .unwrap();

        assert_eq!(h.title.as_deref(), Some("Lög um eitthvað"));
    }

    #[test]
    fn main_sub_none_qualify() {
        let h = header(
            r#"<bibl><title type="main" xml:lang="en">Act</title><title>untyped</title></bibl>"#,
            TitleVariant::MainSub,
        )
        .unwrap();

        assert_eq!(h.title, None);
    }

    #[test]
    fn primary_title() {
        let h = header(
            r#"<bibl>
<title xml:lang="en">Session</title>
<title xml:lang="is">Þingfundur</title>
<title xml:lang="is">Annar</title>
</bibl>"#,
            TitleVariant::Primary,
        )
        .unwrap();

        assert_eq!(h.title.as_deref(), Some("Þingfundur"));

        let h = header(
            r#"<bibl><title xml:lang="en">Session</title></bibl>"#,
            TitleVariant::Primary,
        )
        .unwrap();
        assert_eq!(h.title, None);
    }

    #[test]
    fn empty_title_is_absent() {
        let h = header(r#"<bibl><title/></bibl>"#, TitleVariant::First).unwrap();
        assert_eq!(h.title, None);
    }
}
