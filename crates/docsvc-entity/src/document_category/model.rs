//! Document category entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::table::Table;

/// A category documents are filed under. It bounds the accepted MIME
/// types and the maximum file size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct DocumentCategory {
    /// Unique identifier (UUID string).
    pub id: String,
    /// URL-safe unique key.
    pub slug: String,
    /// Display name.
    pub name: String,
    /// Free-form description.
    pub description: String,
    /// Accepted MIME types.
    pub mime_types: String,
    /// Maximum accepted file size in bytes.
    pub size: f64,
    /// When the category was created.
    pub created_at: DateTime<Utc>,
    /// When the category was last updated.
    pub updated_at: DateTime<Utc>,
    /// When the category was soft deleted.
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Table for DocumentCategory {
    const TABLE_NAME: &'static str = "document_categories";
    const FILTERABLE_FIELDS: &'static [&'static str] = &["name", "slug"];
}

impl DocumentCategory {
    /// Whether the category has been soft deleted.
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}
