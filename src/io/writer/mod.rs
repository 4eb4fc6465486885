/*!
# JSON Lines writing

Converted documents are written one per line in a file per subcorpus ([WriterDoc]),
and each converted corpus gets a manifest listing its subcorpora ([ManifestWriter]).
!*/
mod jsonlines;
mod manifest;
mod writertrait;

use crate::pipelines::igc::types::Document;

pub use jsonlines::JsonLines;
pub use manifest::ManifestEntry;
pub use writertrait::WriterTrait;

/// Writes converted documents.
pub type WriterDoc = JsonLines<Document>;

/// Writes manifest entries.
pub type ManifestWriter = JsonLines<ManifestEntry>;
