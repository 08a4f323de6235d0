//! Document entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::table::Table;

/// A stored file, filed under a [`DocumentCategory`](crate::DocumentCategory).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Document {
    /// Unique identifier (UUID string).
    pub id: String,
    /// Owning category.
    pub category_id: String,
    /// File name as uploaded.
    pub original_name: String,
    /// Generated file name.
    pub name: String,
    /// Object key in the filestore.
    pub path: String,
    /// MIME type.
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub mime_type: String,
    /// File size in bytes.
    pub size: i64,
    /// Opaque access token.
    pub token: String,
    /// When the document was created.
    pub created_at: DateTime<Utc>,
    /// When the document was last updated.
    pub updated_at: DateTime<Utc>,
    /// When the document was soft deleted.
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Table for Document {
    const TABLE_NAME: &'static str = "documents";
    const FILTERABLE_FIELDS: &'static [&'static str] = &["name", "original_name", "type"];
}

impl Document {
    /// The file extension (lowercase), if any.
    pub fn extension(&self) -> Option<String> {
        self.original_name
            .rsplit('.')
            .next()
            .filter(|ext| *ext != self.original_name)
            .map(|ext| ext.to_lowercase())
    }
}
