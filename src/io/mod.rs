/*!
# IO utilities

Saving of converted documents and corpus manifests.
!*/
pub mod writer;
