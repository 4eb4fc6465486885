//! # igc-convert
//!
//! Conversion of the Icelandic Gigaword Corpus (IGC) from TEI XML into JSON Lines,
//! with title, paragraph and sentence spans computed over each document's text.
//!
//! This project can be used both as a tool to convert corpora,
//! or as a lib to integrate extraction and annotation into other projects.
//!
//! ## Getting started
//!
//! ```sh
//! igc-convert 0.1.0
//! Convert IGC TEI files into JSON Lines.
//!
//! USAGE:
//!     igc-convert [FLAGS] [OPTIONS] --input-path <input-path>
//!
//! FLAGS:
//!     -a, --all-corpora    Convert every corpus
//!     -h, --help           Prints help information
//!
//! OPTIONS:
//!     -c, --corpus <corpus>            Corpus to convert (e.g. News1, IGC-Law)
//!         --info-map <info-map>        Subcorpus categorization table
//!     -i, --input-path <input-path>    Folder containing the IGC-<Corpus>-<version>.TEI folders
//!     -o, --output-path <output-path>  Output folder
//!     -v, --version <version>          IGC release
//! ```
//!
//! ## Library usage
//!
//! ```
//! use igc_convert::annotate::{annotate, UnicodeSplitter};
//!
//! let paragraphs = vec!["Halló heimur. Bless.".to_string()];
//! let annotation = annotate(Some("Kveðja"), &paragraphs, &UnicodeSplitter);
//! assert_eq!(annotation.document, "Kveðja\n\nHalló heimur. Bless.");
//! ```
pub mod annotate;
pub mod corpus;
pub mod error;
pub mod io;
pub mod pipelines;
pub mod tei;
