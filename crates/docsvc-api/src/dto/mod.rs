//! Wire shapes of the REST transport.

pub mod document_category;
pub mod ping;

pub use document_category::DocumentCategoryView;
pub use ping::PingStatus;
