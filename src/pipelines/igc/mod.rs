//! IGC to JSON Lines conversion.
//!
//! See [pipeline] for the processing steps and [types] for the output records.
#[allow(clippy::module_inception)]
mod pipeline;
pub mod types;

pub use pipeline::{convert_document, IgcPipeline, Report};
