//! Document category entity and write payloads.

pub mod model;
pub mod payload;

pub use model::DocumentCategory;
pub use payload::{CreateDocumentCategory, UpdateDocumentCategory};
