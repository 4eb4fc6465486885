//! Subcorpus categorization table.
//!
//! The table is a tab-separated file with a header line.
//! The first column is the subcorpus file name (`IGC-Adjud1.tsv`), the second one its domain,
//! the last one its quality label:
//!
//! ```text
//! Subcorpus       Domain                  ...     Quality
//! IGC-Adjud1.tsv  Law                     ...     A
//! IGC-News1-mbl   News – Media            ...     B
//! ```
//!
//! Some subcorpus names (as found on disk) differ from the names used in the table.
//! Those are resolved through a fixed alias table.
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use lazy_static::lazy_static;
use log::{debug, error, info};
use oxilangtag::LanguageTag;
use serde::{Deserialize, Serialize};

use crate::error::{Error, StructureError};
use crate::tei::PRIMARY_LANG;

/// Separates two domains in the domain column.
const DOMAIN_SEPARATOR: char = '–';

lazy_static! {
    /// Subcorpus name (on disk) -> name in the categorization table.
    static ref ALIASES: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        m.insert("IGC-Adjud-Appeal", "IGC-Adjud2");
        m.insert("IGC-Adjud-District", "IGC-Adjud1");
        m.insert("IGC-Adjud-Supreme", "IGC-Adjud3");
        m.insert("IGC-Law-Bills", "IGC-Law2");
        m.insert("IGC-Law-Law", "IGC-Law3");
        m.insert("IGC-Law-Proposals", "IGC-Law1");
        m.insert("IGC-News1-frettabladid_is", "IGC-News1-frettabladidis");
        m.insert("IGC-News1-ras1_og_2", "IGC-News1-ras1og2");
        m.insert("IGC-News2-dv_is", "IGC-News2-dvis");
        m.insert("IGC-News2-frettatiminn_bl", "IGC-News2-frettatiminnbl");
        m.insert("IGC-News2-kjarninn_blad", "IGC-News2-kjarninnblad");
        m.insert("IGC-News2-stundin_blad", "IGC-News2-stundinblad");
        m.insert("IGC-News2-stundin_serblad", "IGC-News2-stundinserblad");
        m.insert("IGC-Social-Blog-heimur", "IGC-Social2-heimur");
        m.insert("IGC-Social-Blog-jonas", "IGC-Social2-jonas");
        m.insert("IGC-Social-Blog-silfuregils", "IGC-Social2-silfuregils");
        m.insert("IGC-Social-Forums-bland", "IGC-Social1-bland");
        m.insert("IGC-Social-Forums-hugi", "IGC-Social1-hugi");
        m.insert("IGC-Social-Forums-malefnin", "IGC-Social1-malefnin");
        m
    };
}

/// Categorization of a subcorpus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    domain: Vec<String>,
    quality: String,
    lang: LanguageTag<String>,
}

impl Category {
    pub fn new(domain: Vec<String>, quality: String) -> Result<Self, Error> {
        Ok(Self {
            domain,
            quality,
            lang: LanguageTag::parse(PRIMARY_LANG.to_string())?,
        })
    }

    /// Parse a domain column: lowercased, split on en dashes.
    fn parse_domain(domain: &str) -> Vec<String> {
        let domain = domain.to_lowercase();
        if domain.contains(DOMAIN_SEPARATOR) {
            domain
                .split(DOMAIN_SEPARATOR)
                .map(|d| d.trim().to_string())
                .collect()
        } else {
            vec![domain]
        }
    }

    pub fn domain(&self) -> &[String] {
        &self.domain
    }

    pub fn quality(&self) -> &str {
        &self.quality
    }
}

/// Manifest entry of a subcorpus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusInfo {
    path: PathBuf,
    quality: String,
    domain: Vec<String>,
    lang: LanguageTag<String>,
    version: String,
}

impl CorpusInfo {
    /// Location of the subcorpus output file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn domain(&self) -> &[String] {
        &self.domain
    }

    pub fn quality(&self) -> &str {
        &self.quality
    }
}

/// Immutable subcorpus name -> [Category] mapping.
#[derive(Debug, Clone, Default)]
pub struct InfoMap {
    entries: HashMap<String, Category>,
}

impl InfoMap {
    /// Load the categorization table located at `path`.
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        info!("loading categorization table {:?}", path);
        let f = File::open(path)?;
        Self::from_reader(f)
    }

    /// Load a categorization table. The first line is a header and is skipped.
    ///
    /// Rows lacking the name, domain or quality column are logged and skipped:
    /// the subcorpora they describe then fail to resolve on their own.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, Error> {
        let mut rdr = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(true)
            .flexible(true)
            .quoting(false)
            .from_reader(reader);

        let mut entries = HashMap::new();
        for record in rdr.records() {
            let record = record?;
            let line = record.position().map(|p| p.line() as usize).unwrap_or_default();

            if record.len() < 3 {
                error!("{}: {:?}", StructureError::MalformedInfoRow(line), record);
                continue;
            }

            let (name, domain, quality) = (&record[0], &record[1], &record[record.len() - 1]);

            let name = name.split(".tsv").next().unwrap_or(name).trim();
            let category = Category::new(Category::parse_domain(domain), quality.trim().to_string())?;

            debug!("{}: {:?}", name, category);
            entries.insert(name.to_string(), category);
        }

        Ok(Self { entries })
    }

    /// Get the category of a subcorpus, going through the alias table if needed.
    pub fn resolve(&self, name: &str) -> Result<&Category, Error> {
        self.entries
            .get(name)
            .or_else(|| {
                ALIASES
                    .get(name)
                    .and_then(|alias| self.entries.get(*alias))
            })
            .ok_or_else(|| Error::Lookup(name.to_string()))
    }

    /// Build the manifest entry of the subcorpus `name`, written at `path`.
    pub fn corpus_info(&self, name: &str, path: PathBuf, version: &str) -> Result<CorpusInfo, Error> {
        let category = self.resolve(name)?;

        Ok(CorpusInfo {
            path,
            quality: category.quality.clone(),
            domain: category.domain.clone(),
            lang: category.lang.clone(),
            version: version.to_string(),
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, Category)> for InfoMap {
    fn from_iter<T: IntoIterator<Item = (String, Category)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
