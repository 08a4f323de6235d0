//! # docsvc-entity
//!
//! Domain entity models for the document service. Every struct in this
//! crate represents a database table row or a write payload. All entities
//! derive `Debug`, `Clone`, `Serialize`, `Deserialize`, and database
//! entities additionally derive `sqlx::FromRow`.

pub mod document;
pub mod document_category;
pub mod table;

pub use document::Document;
pub use document_category::DocumentCategory;
pub use table::Table;
