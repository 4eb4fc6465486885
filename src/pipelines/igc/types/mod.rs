/*! IGC output record types.
!*/
mod document;

pub use document::Document;
pub use document::Metadata;
pub use document::RecordAssembler;
