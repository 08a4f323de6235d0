//! Request handlers.

pub mod document_category;
pub mod ping;
