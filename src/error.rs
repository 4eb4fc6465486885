//! Error enum
use std::fmt;

/// The document tree (or the lookup table) does not have a shape we know how to read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StructureError {
    /// A node that every layout has was not found. Holds the path that was looked up.
    MissingNode(&'static str),
    /// `sourceDesc` holds neither a `bibl` nor a usable `biblStruct`.
    UnrecognizedHeader,
    /// No title and no paragraph could be extracted.
    EmptyDocument,
    /// A lookup table line (1-indexed) lacks the name, domain or quality column.
    MalformedInfoRow(usize),
}

impl fmt::Display for StructureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StructureError::MissingNode(path) => write!(f, "missing node: {}", path),
            StructureError::UnrecognizedHeader => write!(f, "unrecognized sourceDesc shape"),
            StructureError::EmptyDocument => write!(f, "document has no title and no paragraph"),
            StructureError::MalformedInfoRow(line) => {
                write!(f, "malformed lookup table row at line {}", line)
            }
        }
    }
}

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Xml(roxmltree::Error),
    Serde(serde_json::Error),
    Csv(csv::Error),
    LangTag(oxilangtag::LanguageTagParseError),
    Structure(StructureError),
    /// Subcorpus name absent from the lookup table, even after alias substitution.
    Lookup(String),
    UnknownCorpus(String),
    Custom(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "io error: {}", e),
            Error::Xml(e) => write!(f, "xml error: {}", e),
            Error::Serde(e) => write!(f, "serialization error: {}", e),
            Error::Csv(e) => write!(f, "lookup table error: {}", e),
            Error::LangTag(e) => write!(f, "invalid language tag: {}", e),
            Error::Structure(e) => write!(f, "structure error: {}", e),
            Error::Lookup(name) => write!(f, "no lookup table entry for {}", name),
            Error::UnknownCorpus(name) => write!(f, "unknown corpus {}", name),
            Error::Custom(s) => write!(f, "{}", s),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}

impl From<roxmltree::Error> for Error {
    fn from(e: roxmltree::Error) -> Error {
        Error::Xml(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::Serde(e)
    }
}

impl From<csv::Error> for Error {
    fn from(e: csv::Error) -> Error {
        Error::Csv(e)
    }
}

impl From<oxilangtag::LanguageTagParseError> for Error {
    fn from(e: oxilangtag::LanguageTagParseError) -> Error {
        Error::LangTag(e)
    }
}

impl From<StructureError> for Error {
    fn from(e: StructureError) -> Error {
        Error::Structure(e)
    }
}

impl From<String> for Error {
    fn from(s: String) -> Error {
        Error::Custom(s)
    }
}
