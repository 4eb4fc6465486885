use chrono::NaiveDate;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

use crate::annotate::{Annotation, Span};
use crate::tei::Extracted;

/// Document-level metadata: bibliographic fields and structural spans.
///
/// Field order is the serialization order.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Metadata {
    author: Option<String>,
    fetch_timestamp: NaiveDate,
    xml_id: Option<String>,
    publish_timestamp: Option<String>,
    title: Option<Span>,
    paragraphs: Vec<Span>,
    sentences: Vec<Span>,
    source: Option<String>,
}

impl Metadata {
    /// Get a reference to the metadata's title span.
    pub fn title(&self) -> Option<&Span> {
        self.title.as_ref()
    }

    /// Get a reference to the metadata's paragraph spans.
    pub fn paragraphs(&self) -> &[Span] {
        self.paragraphs.as_ref()
    }

    /// Get a reference to the metadata's sentence spans.
    pub fn sentences(&self) -> &[Span] {
        self.sentences.as_ref()
    }

    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn xml_id(&self) -> Option<&str> {
        self.xml_id.as_deref()
    }

    pub fn publish_timestamp(&self) -> Option<&str> {
        self.publish_timestamp.as_deref()
    }

    pub fn fetch_timestamp(&self) -> &NaiveDate {
        &self.fetch_timestamp
    }
}

/// A converted document, written as one JSON line.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Document {
    document: String,
    uuid: Uuid,
    metadata: Metadata,
}

impl Document {
    /// Get a reference to the document text.
    pub fn content(&self) -> &str {
        &self.document
    }

    pub fn uuid(&self) -> &Uuid {
        &self.uuid
    }

    /// Get a reference to the document's metadata.
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }
}

/// Packages extracted fields and their annotation into [Document]s.
///
/// Every document built by a given assembler shares the same fetch date.
#[derive(Debug, Clone, Copy)]
pub struct RecordAssembler {
    fetch_date: NaiveDate,
}

impl RecordAssembler {
    pub fn new(fetch_date: NaiveDate) -> Self {
        Self { fetch_date }
    }

    /// Assembler dated with today's local date.
    pub fn today() -> Self {
        Self::new(chrono::Local::now().date_naive())
    }

    /// Build a document, with a fresh uuid.
    pub fn assemble(&self, extracted: Extracted, annotation: Annotation) -> Document {
        let metadata = Metadata {
            author: extracted.author,
            fetch_timestamp: self.fetch_date,
            xml_id: extracted.xml_id,
            publish_timestamp: extracted.publish_timestamp,
            title: annotation.title,
            paragraphs: annotation.paragraphs,
            sentences: annotation.sentences,
            source: extracted.source,
        };

        Document {
            document: annotation.document,
            uuid: Uuid::new_v4(),
            metadata,
        }
    }
}
