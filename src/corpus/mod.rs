/*! IGC corpora.

The Icelandic Gigaword Corpus is released as one TEI directory per corpus
(`IGC-<Corpus>-<version>.TEI/`). Corpora differ in their directory [Layout],
and in the way titles and paragraphs are encoded (see [Profile]).
!*/
mod info;
mod walk;

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::Error;
use crate::tei::{BodyVariant, Profile, TitleVariant};

pub use info::{Category, CorpusInfo, InfoMap};
pub use walk::{walk, Subcorpus};

/// Prefix of every corpus and subcorpus name.
pub const PREFIX: &str = "IGC";

/// Directory layout of a corpus, relative to its root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// `<subcorpus>/<year>/<file>`
    SubcorpusYear,
    /// `<year>/<file>`, the corpus is its only subcorpus.
    Year,
    /// `<subcorpus>/<year>/<issue>/<file>`
    SubcorpusYearIssue,
    /// `<type>/<subcorpus>/<year>/<file>`
    TypeSubcorpusYear,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corpus {
    Adjud,
    Journals,
    Law,
    Books,
    Parla,
    Wiki,
    News1,
    News2,
    Social,
}

impl Corpus {
    /// Every known corpus, in conversion order.
    pub const ALL: [Corpus; 9] = [
        Corpus::Adjud,
        Corpus::Journals,
        Corpus::Law,
        Corpus::Books,
        Corpus::Parla,
        Corpus::Wiki,
        Corpus::News1,
        Corpus::News2,
        Corpus::Social,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Corpus::Adjud => "Adjud",
            Corpus::Journals => "Journals",
            Corpus::Law => "Law",
            Corpus::Books => "Books",
            Corpus::Parla => "Parla",
            Corpus::Wiki => "Wiki",
            Corpus::News1 => "News1",
            Corpus::News2 => "News2",
            Corpus::Social => "Social",
        }
    }

    /// Prefixed name (`IGC-Law`).
    pub fn full_name(&self) -> String {
        format!("{}-{}", PREFIX, self.name())
    }

    pub fn layout(&self) -> Layout {
        match self {
            Corpus::Adjud | Corpus::Journals | Corpus::Law => Layout::SubcorpusYear,
            Corpus::Books | Corpus::Parla | Corpus::Wiki => Layout::Year,
            Corpus::News1 | Corpus::News2 => Layout::SubcorpusYearIssue,
            Corpus::Social => Layout::TypeSubcorpusYear,
        }
    }

    /// How titles and paragraphs are extracted from this corpus' documents.
    pub fn profile(&self) -> Profile {
        let title = match self {
            Corpus::Law => TitleVariant::MainSub,
            Corpus::Parla => TitleVariant::Primary,
            _ => TitleVariant::First,
        };
        let body = match self {
            Corpus::Parla => BodyVariant::Segmented,
            _ => BodyVariant::Flat,
        };

        Profile::new(title, body)
    }

    /// Location of the corpus' TEI directory inside `input`.
    pub fn input_dir(&self, input: &Path, version: &str) -> PathBuf {
        input.join(format!("{}-{}.TEI", self.full_name(), version))
    }
}

impl fmt::Display for Corpus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Corpus {
    type Err = Error;

    /// Parse a corpus name, with or without the `IGC-` prefix.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s
            .strip_prefix(PREFIX)
            .and_then(|rest| rest.strip_prefix('-'))
            .unwrap_or(s);

        Corpus::ALL
            .iter()
            .find(|corpus| corpus.name() == name)
            .copied()
            .ok_or_else(|| Error::UnknownCorpus(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    #[test]
    fn parse() {
        assert_eq!("Law".parse::<Corpus>().unwrap(), Corpus::Law);
        assert_eq!("IGC-News2".parse::<Corpus>().unwrap(), Corpus::News2);
        assert!(matches!(
            "IGC-Twitter".parse::<Corpus>(),
            Err(Error::UnknownCorpus(_))
        ));
        assert!("law".parse::<Corpus>().is_err());
    }

    #[test]
    fn names_round_trip() {
        for corpus in Corpus::ALL {
            assert_eq!(corpus.full_name().parse::<Corpus>().unwrap(), corpus);
        }
    }

    #[test]
    fn profiles() {
        assert_eq!(
            Corpus::Parla.profile(),
            Profile::new(TitleVariant::Primary, BodyVariant::Segmented)
        );
        assert_eq!(
            Corpus::Law.profile(),
            Profile::new(TitleVariant::MainSub, BodyVariant::Flat)
        );
        assert_eq!(Corpus::News1.profile(), Profile::default());
    }

    #[test]
    fn layouts() {
        assert_eq!(Corpus::Journals.layout(), Layout::SubcorpusYear);
        assert_eq!(Corpus::Wiki.layout(), Layout::Year);
        assert_eq!(Corpus::News1.layout(), Layout::SubcorpusYearIssue);
        assert_eq!(Corpus::Social.layout(), Layout::TypeSubcorpusYear);
    }

    #[test]
    fn input_dir() {
        assert_eq!(
            Corpus::Adjud.input_dir(Path::new("/data"), "22.10"),
            Path::new("/data/IGC-Adjud-22.10.TEI")
        );
    }
}
