//! Document entity and write payloads.

pub mod model;
pub mod payload;

pub use model::Document;
pub use payload::{CreateDocument, DocumentFilter, UpdateDocument};
