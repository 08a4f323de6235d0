//! Repository implementations for the document service entities.

pub mod document;
pub mod document_category;

pub use document::DocumentRepository;
pub use document_category::DocumentCategoryRepository;
