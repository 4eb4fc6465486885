/*! TEI document extraction.

Reads the bibliographic fields and the paragraphs of an IGC TEI document.
The shape of the title and of the body differs between corpora, and is declared once per corpus
through a [Profile].
!*/
mod body;
mod header;
pub mod node;

pub use body::BodyVariant;
pub use header::{Header, TitleVariant, PRIMARY_LANG};
pub use node::TreeNode;

use crate::error::StructureError;

/// Extraction behaviour of a corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub title: TitleVariant,
    pub body: BodyVariant,
}

impl Profile {
    pub fn new(title: TitleVariant, body: BodyVariant) -> Self {
        Self { title, body }
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            title: TitleVariant::First,
            body: BodyVariant::Flat,
        }
    }
}

/// Fields extracted from a single document.
///
/// `paragraphs` never contains empty strings, and does not include the title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extracted {
    pub title: Option<String>,
    pub paragraphs: Vec<String>,
    pub author: Option<String>,
    pub source: Option<String>,
    pub publish_timestamp: Option<String>,
    pub xml_id: Option<String>,
}

/// Extract fields from the root (`TEI`) node of a document.
pub fn extract<N: TreeNode>(root: &N, profile: Profile) -> Result<Extracted, StructureError> {
    let header = Header::read(root, profile.title)?;

    let body = root
        .child("text")
        .and_then(|text| text.child("body"))
        .ok_or(StructureError::MissingNode("text/body"))?;
    let paragraphs = profile.body.paragraphs(&body);

    if header.title.is_none() && paragraphs.is_empty() {
        return Err(StructureError::EmptyDocument);
    }

    Ok(Extracted {
        title: header.title,
        paragraphs,
        author: header.author,
        source: header.source,
        publish_timestamp: header.publish_timestamp,
        xml_id: root.xml_attribute("id").map(String::from),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(source_desc: &str, body: &str) -> String {
        format!(
            r#"<?xml version="1.0" encoding="utf-8"?>
<TEI xmlns="http://www.tei-c.org/ns/1.0" xml:id="IGC-Adjud1-1">
<teiHeader><fileDesc><sourceDesc>{}</sourceDesc></fileDesc></teiHeader>
<text><body>{}</body></text>
</TEI>"#,
            source_desc, body
        )
    }

    #[test]
    fn extract_flat() {
        let xml = doc(
            "<bibl><title>Dómur</title><author>Héraðsdómur</author></bibl>",
            "<div><p>Mál þetta.</p><p>Dómsorð.</p></div>",
        );
        let tree = roxmltree::Document::parse(&xml).unwrap();
        let extracted = extract(&tree.root_element(), Profile::default()).unwrap();

        assert_eq!(extracted.title.as_deref(), Some("Dómur"));
        assert_eq!(extracted.paragraphs, vec!["Mál þetta.", "Dómsorð."]);
        assert_eq!(extracted.author.as_deref(), Some("Héraðsdómur"));
        assert_eq!(extracted.source, None);
        assert_eq!(extracted.publish_timestamp, None);
        assert_eq!(extracted.xml_id.as_deref(), Some("IGC-Adjud1-1"));
    }

    #[test]
    fn title_only_is_valid() {
        let xml = doc("<bibl><title>Bara titill</title></bibl>", "<div/>");
        let tree = roxmltree::Document::parse(&xml).unwrap();
        let extracted = extract(&tree.root_element(), Profile::default()).unwrap();

        assert_eq!(extracted.title.as_deref(), Some("Bara titill"));
        assert!(extracted.paragraphs.is_empty());
    }

    #[test]
    fn empty_document() {
        let xml = doc("<bibl/>", "<div><p/></div>");
        let tree = roxmltree::Document::parse(&xml).unwrap();

        assert_eq!(
            extract(&tree.root_element(), Profile::default()),
            Err(StructureError::EmptyDocument)
        );
    }

    #[test]
    fn missing_body() {
        let xml = r#"<TEI><teiHeader><fileDesc><sourceDesc><bibl><title>t</title></bibl></sourceDesc></fileDesc></teiHeader></TEI>"#;
        let tree = roxmltree::Document::parse(xml).unwrap();

        assert_eq!(
            extract(&tree.root_element(), Profile::default()),
            Err(StructureError::MissingNode("text/body"))
        );
    }
}
