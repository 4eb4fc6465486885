//! Pipelines.
//!
//! The module provides a light [pipeline::Pipeline] trait that enables easy and flexible pipeline creation.
pub mod igc;
#[allow(clippy::module_inception)]
pub mod pipeline;

pub use igc::IgcPipeline;
pub use pipeline::Pipeline;
