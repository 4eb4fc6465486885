//! IGC conversion pipeline
//!
//! Converts a whole IGC corpus (one `IGC-<Corpus>-<version>.TEI` directory) into JSON Lines.
//!
//! # Processing
//! 1. The corpus directory is walked following the corpus' layout, yielding subcorpora.
//! 1. Each subcorpus gets its manifest entry from the categorization table. Subcorpora with no entry are skipped.
//! 1. Each document is parsed, its fields extracted, and its text annotated with spans.
//! 1. Documents are written in listing order to `<dst>/converted-corpora/IGC-<Corpus>/<subcorpus>.jsonl`.
//! 1. The manifest is written to `<dst>/datasets-info/IGC-<Corpus>.jsonl`.
//!
//! A document that fails to convert is logged and skipped. Files already written are kept
//! when a later subcorpus fails.
use std::path::{Path, PathBuf};

use log::{debug, error, info, warn};
use rayon::prelude::*;

use crate::annotate::{annotate, SentenceSplitter, UnicodeSplitter};
use crate::corpus::{walk, Corpus, CorpusInfo, InfoMap, Subcorpus};
use crate::error::Error;
use crate::io::writer::{ManifestEntry, ManifestWriter, WriterDoc, WriterTrait};
use crate::pipelines::igc::types::{Document, RecordAssembler};
use crate::pipelines::pipeline::Pipeline;
use crate::tei::{self, Profile};

const CONVERTED_DIR: &str = "converted-corpora";
const MANIFEST_DIR: &str = "datasets-info";

/// Outcome of a conversion run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Report {
    /// Number of documents written.
    pub documents: usize,
    /// Number of documents that could not be converted.
    pub failed_documents: usize,
    /// Subcorpora that could not be resolved or written.
    pub failed_subcorpora: Vec<String>,
}

impl Report {
    pub fn merge(&mut self, other: Report) {
        self.documents += other.documents;
        self.failed_documents += other.failed_documents;
        self.failed_subcorpora.extend(other.failed_subcorpora);
    }

    /// `true` if every subcorpus got written.
    pub fn is_complete(&self) -> bool {
        self.failed_subcorpora.is_empty()
    }
}

/// Convert the content of a TEI file into a [Document].
pub fn convert_document<S>(
    content: &str,
    profile: Profile,
    splitter: &S,
    assembler: &RecordAssembler,
) -> Result<Document, Error>
where
    S: SentenceSplitter + ?Sized,
{
    let options = roxmltree::ParsingOptions {
        allow_dtd: true,
        ..roxmltree::ParsingOptions::default()
    };
    let tree = roxmltree::Document::parse_with_options(content, options)?;

    let extracted = tei::extract(&tree.root_element(), profile)?;
    let annotation = annotate(extracted.title.as_deref(), &extracted.paragraphs, splitter);

    Ok(assembler.assemble(extracted, annotation))
}

pub struct IgcPipeline<'a> {
    corpus: Corpus,
    src: PathBuf,
    dst: PathBuf,
    version: String,
    info: &'a InfoMap,
    splitter: UnicodeSplitter,
    assembler: RecordAssembler,
}

impl<'a> IgcPipeline<'a> {
    /// Create a pipeline converting `corpus`, located in the `src` TEI directory, into `dst`.
    pub fn new(corpus: Corpus, src: PathBuf, dst: PathBuf, version: String, info: &'a InfoMap) -> Self {
        debug!("{} pipeline: {:?} -> {:?}", corpus, src, dst);
        Self {
            corpus,
            src,
            dst,
            version,
            info,
            splitter: UnicodeSplitter,
            assembler: RecordAssembler::today(),
        }
    }

    /// Use a custom assembler (fixed fetch date).
    pub fn with_assembler(mut self, assembler: RecordAssembler) -> Self {
        self.assembler = assembler;
        self
    }

    /// Folder containing the subcorpus files.
    pub fn output_dir(&self) -> PathBuf {
        self.dst.join(CONVERTED_DIR).join(self.corpus.full_name())
    }

    /// Location of the manifest.
    pub fn manifest_path(&self) -> PathBuf {
        self.dst
            .join(MANIFEST_DIR)
            .join(format!("{}.jsonl", self.corpus.full_name()))
    }

    /// Read and convert a file.
    fn convert_file(&self, path: &Path, profile: Profile) -> Result<Document, Error> {
        let content = std::fs::read_to_string(path)?;
        convert_document(&content, profile, &self.splitter, &self.assembler)
    }

    /// Convert and write a subcorpus, returning its manifest entry.
    fn process_subcorpus(&self, subcorpus: &Subcorpus) -> Result<(CorpusInfo, Report), Error> {
        let path = absolute(&self.output_dir().join(format!("{}.jsonl", subcorpus.name())))?;

        // resolve before converting anything: no entry, no output
        let corpus_info = self
            .info
            .corpus_info(subcorpus.name(), path.clone(), &self.version)?;

        info!(
            "[{}]: converting {} files",
            subcorpus.name(),
            subcorpus.files().len()
        );

        // collect keeps the listing order
        let profile = self.corpus.profile();
        let documents: Vec<Result<Document, Error>> = subcorpus
            .files()
            .par_iter()
            .map(|file| self.convert_file(file, profile))
            .collect();

        let mut report = Report::default();
        let mut writer = WriterDoc::new(&path)?;
        for (file, document) in subcorpus.files().iter().zip(documents) {
            match document {
                Ok(document) => {
                    writer.write_single(&document)?;
                    report.documents += 1;
                }
                Err(e) => {
                    error!("{:?}: {}", file, e);
                    report.failed_documents += 1;
                }
            }
        }
        writer.close()?;

        info!(
            "[{}]: wrote {} documents to {:?} ({} failed)",
            subcorpus.name(),
            report.documents,
            path,
            report.failed_documents
        );

        Ok((corpus_info, report))
    }
}

impl Pipeline<Report> for IgcPipeline<'_> {
    fn run(&self) -> Result<Report, Error> {
        if !self.src.is_dir() {
            return Err(Error::Custom(format!(
                "corpus directory not found: {:?}",
                self.src
            )));
        }

        let subcorpora = walk(self.corpus, &self.src)?;
        if subcorpora.is_empty() {
            warn!("{}: no subcorpus found in {:?}", self.corpus, self.src);
        }

        let mut report = Report::default();
        let mut entries = Vec::with_capacity(subcorpora.len());

        for subcorpus in &subcorpora {
            match self.process_subcorpus(subcorpus) {
                Ok((corpus_info, subcorpus_report)) => {
                    entries.push(ManifestEntry::new(subcorpus.name().to_string(), corpus_info));
                    report.merge(subcorpus_report);
                }
                Err(e) => {
                    error!("[{}]: {}", subcorpus.name(), e);
                    report.failed_subcorpora.push(subcorpus.name().to_string());
                }
            }
        }

        let manifest_path = self.manifest_path();
        info!("writing dataset information to {:?}", manifest_path);
        let mut manifest = ManifestWriter::new(&manifest_path)?;
        manifest.write(entries)?;
        manifest.close()?;

        Ok(report)
    }
}

/// Make `path` absolute, without requiring it to exist.
fn absolute(path: &Path) -> Result<PathBuf, Error> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(std::env::current_dir()?.join(path))
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::annotate::Span;

    const ARTICLE: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<TEI xmlns="http://www.tei-c.org/ns/1.0" xml:id="IGC-News1-mbl_1">
  <teiHeader>
    <fileDesc>
      <titleStmt><title>ignored</title></titleStmt>
      <sourceDesc>
        <biblStruct>
          <analytic>
            <title>Frétt dagsins</title>
            <author>Blaðamaður</author>
            <idno type="url">https://mbl.is/1</idno>
          </analytic>
          <monogr>
            <title>Morgunblaðið</title>
            <imprint><date>2004-01-02</date></imprint>
          </monogr>
        </biblStruct>
      </sourceDesc>
    </fileDesc>
  </teiHeader>
  <text>
    <body>
      <div1>
        <p>Fyrsta málsgrein. Hún er stutt.</p>
        <p>Önnur málsgrein.</p>
      </div1>
    </body>
  </text>
</TEI>"#;

    fn assembler() -> RecordAssembler {
        RecordAssembler::new(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
    }

    #[test]
    fn convert_article() {
        let doc = convert_document(ARTICLE, Profile::default(), &UnicodeSplitter, &assembler()).unwrap();

        assert_eq!(
            doc.content(),
            "Frétt dagsins\n\nFyrsta málsgrein. Hún er stutt.\n\nÖnnur málsgrein."
        );

        let metadata = doc.metadata();
        assert_eq!(metadata.title(), Some(&Span::new(0, 13)));
        assert_eq!(
            metadata.paragraphs(),
            &[Span::new(0, 13), Span::new(15, 31), Span::new(48, 16)]
        );
        assert_eq!(
            metadata.sentences(),
            &[
                Span::new(0, 13),
                Span::new(15, 17),
                Span::new(33, 12),
                Span::new(48, 16)
            ]
        );
        assert_eq!(metadata.author(), Some("Blaðamaður"));
        assert_eq!(metadata.source(), Some("https://mbl.is/1"));
        assert_eq!(metadata.publish_timestamp(), Some("2004-01-02"));
        assert_eq!(metadata.xml_id(), Some("IGC-News1-mbl_1"));
    }

    #[test]
    fn invalid_xml() {
        assert!(matches!(
            convert_document("<TEI>", Profile::default(), &UnicodeSplitter, &assembler()),
            Err(Error::Xml(_))
        ));
    }

    #[test]
    fn report_merge() {
        let mut report = Report::default();
        report.merge(Report {
            documents: 2,
            failed_documents: 1,
            failed_subcorpora: vec!["IGC-X".to_string()],
        });
        report.merge(Report {
            documents: 3,
            ..Default::default()
        });

        assert_eq!(report.documents, 5);
        assert_eq!(report.failed_documents, 1);
        assert!(!report.is_complete());
    }

    #[test]
    fn pipeline_no_folders() {
        let info = InfoMap::default();
        let p = IgcPipeline::new(
            Corpus::Wiki,
            PathBuf::from("svdkjljlkmjlmdsfljkf"),
            PathBuf::from("fzjoijzoecijzoiej"),
            "22.10".to_string(),
            &info,
        );
        assert!(p.run().is_err());
    }
}
