//! Dataset manifest entries.
//!
//! A manifest holds one line per subcorpus, keyed by the subcorpus' canonical name:
//!
//! ```text
//! {"IGC-Adjud-Appeal":{"path":"/abs/IGC-Adjud-Appeal.jsonl","quality":"A","domain":["law"],"lang":"is","version":"22.10"}}
//! ```
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::corpus::CorpusInfo;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    name: String,
    info: CorpusInfo,
}

impl ManifestEntry {
    pub fn new(name: String, info: CorpusInfo) -> Self {
        Self { name, info }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn info(&self) -> &CorpusInfo {
        &self.info
    }
}

impl Serialize for ManifestEntry {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.name, &self.info)?;
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::ManifestEntry;
    use crate::corpus::{Category, InfoMap};

    #[test]
    fn serialize() {
        let map: InfoMap = vec![(
            "IGC-Adjud2".to_string(),
            Category::new(vec!["law".to_string()], "A".to_string()).unwrap(),
        )]
        .into_iter()
        .collect();
        let info = map
            .corpus_info(
                "IGC-Adjud-Appeal",
                PathBuf::from("/abs/IGC-Adjud-Appeal.jsonl"),
                "22.10",
            )
            .unwrap();

        let entry = ManifestEntry::new("IGC-Adjud-Appeal".to_string(), info);
        assert_eq!(entry.name(), "IGC-Adjud-Appeal");
        assert_eq!(
            entry.info().path(),
            PathBuf::from("/abs/IGC-Adjud-Appeal.jsonl").as_path()
        );
        assert_eq!(entry.info().domain(), &["law".to_string()]);

        assert_eq!(
            serde_json::to_string(&entry).unwrap(),
            r#"{"IGC-Adjud-Appeal":{"path":"/abs/IGC-Adjud-Appeal.jsonl","quality":"A","domain":["law"],"lang":"is","version":"22.10"}}"#
        );
    }
}
