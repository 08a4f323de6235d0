//! Document category presenter.

use serde::{Deserialize, Serialize};

use docsvc_entity::DocumentCategory;

/// A document category as returned by the REST API.
///
/// Timestamps are not exposed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentCategoryView {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub size: f64,
    pub mime_types: String,
    pub desc: String,
}

impl From<DocumentCategory> for DocumentCategoryView {
    fn from(category: DocumentCategory) -> Self {
        Self {
            id: category.id,
            name: category.name,
            slug: category.slug,
            size: category.size,
            mime_types: category.mime_types,
            desc: category.description,
        }
    }
}
