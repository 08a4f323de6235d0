//! Write payloads and lookup filters for documents.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::model::Document;

/// Data required to create a new document record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateDocument {
    /// Identifier to use; a UUID v4 is generated when empty.
    #[serde(default)]
    pub id: String,
    pub category_id: String,
    pub original_name: String,
    pub name: String,
    pub path: String,
    #[serde(rename = "type")]
    pub mime_type: String,
    pub size: i64,
    #[serde(default)]
    pub token: String,
}

impl CreateDocument {
    /// Build the row to insert, stamping both timestamps with `now`.
    pub fn into_document(self, now: DateTime<Utc>) -> Document {
        let id = if self.id.is_empty() {
            Uuid::new_v4().to_string()
        } else {
            self.id
        };

        Document {
            id,
            category_id: self.category_id,
            original_name: self.original_name,
            name: self.name,
            path: self.path,
            mime_type: self.mime_type,
            size: self.size,
            token: self.token,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }
}

/// Partial update of a document. Empty strings and a zero size leave the
/// stored value untouched; the identifier never changes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateDocument {
    pub category_id: String,
    pub original_name: String,
    pub name: String,
    pub path: String,
    #[serde(rename = "type")]
    pub mime_type: String,
    pub size: i64,
    pub token: String,
}

impl UpdateDocument {
    /// Overwrite the non-empty fields of `document`.
    pub fn apply_to(&self, document: &mut Document, now: DateTime<Utc>) {
        for (target, value) in [
            (&mut document.category_id, &self.category_id),
            (&mut document.original_name, &self.original_name),
            (&mut document.name, &self.name),
            (&mut document.path, &self.path),
            (&mut document.mime_type, &self.mime_type),
            (&mut document.token, &self.token),
        ] {
            if !value.is_empty() {
                target.clone_from(value);
            }
        }
        if self.size != 0 {
            document.size = self.size;
        }
        document.updated_at = now;
    }
}

/// Filter matching every non-empty field against a document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentFilter {
    pub id: String,
    pub category_id: String,
    pub original_name: String,
    pub name: String,
    pub path: String,
    #[serde(rename = "type")]
    pub mime_type: String,
    pub token: String,
}

impl DocumentFilter {
    /// `(column, value)` pairs of the non-empty fields.
    pub fn columns(&self) -> Vec<(&'static str, &str)> {
        [
            ("id", self.id.as_str()),
            ("category_id", self.category_id.as_str()),
            ("original_name", self.original_name.as_str()),
            ("name", self.name.as_str()),
            ("path", self.path.as_str()),
            ("type", self.mime_type.as_str()),
            ("token", self.token.as_str()),
        ]
        .into_iter()
        .filter(|(_, value)| !value.is_empty())
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn document() -> Document {
        CreateDocument {
            category_id: "c1".to_string(),
            original_name: "Contract.PDF".to_string(),
            name: "4f1c".to_string(),
            path: "sign/4f1c.pdf".to_string(),
            mime_type: "application/pdf".to_string(),
            size: 2048,
            ..Default::default()
        }
        .into_document(Utc::now())
    }

    #[test]
    fn test_into_document() {
        let doc = document();
        assert_eq!(doc.id.len(), 36);
        assert_eq!(doc.extension().as_deref(), Some("pdf"));
        assert!(doc.deleted_at.is_none());
    }

    #[test]
    fn test_partial_update_keeps_empty_fields() {
        let mut doc = document();
        let id = doc.id.clone();
        UpdateDocument {
            path: "sign/4f1c-copy.pdf".to_string(),
            ..Default::default()
        }
        .apply_to(&mut doc, Utc::now());

        assert_eq!(doc.id, id);
        assert_eq!(doc.path, "sign/4f1c-copy.pdf");
        assert_eq!(doc.name, "4f1c");
        assert_eq!(doc.size, 2048);
    }

    #[test]
    fn test_filter_columns() {
        let filter = DocumentFilter {
            category_id: "c1".to_string(),
            mime_type: "application/pdf".to_string(),
            ..Default::default()
        };
        assert_eq!(
            filter.columns(),
            vec![("category_id", "c1"), ("type", "application/pdf")]
        );
        assert!(DocumentFilter::default().columns().is_empty());
    }
}
