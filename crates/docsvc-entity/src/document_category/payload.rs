//! Write payloads for document categories.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::model::DocumentCategory;

/// Data required to create a new category.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct CreateDocumentCategory {
    /// Identifier to use; a UUID v4 is generated when empty.
    #[serde(default)]
    pub id: String,
    #[validate(length(min = 1, max = 100, message = "validation.error.must_be_length_between"))]
    pub slug: String,
    #[validate(length(min = 1, max = 100, message = "validation.error.must_be_length_between"))]
    pub name: String,
    #[validate(length(max = 255, message = "validation.error.must_be_length_between"))]
    pub description: String,
    #[validate(length(max = 255, message = "validation.error.must_be_length_between"))]
    pub mime_types: String,
    #[validate(range(min = 0.0, message = "validation.error.must_be_no_less_than_value"))]
    pub size: f64,
}

impl CreateDocumentCategory {
    /// Build the row to insert, stamping both timestamps with `now`.
    pub fn into_category(self, now: DateTime<Utc>) -> DocumentCategory {
        let id = if self.id.is_empty() {
            Uuid::new_v4().to_string()
        } else {
            self.id
        };

        DocumentCategory {
            id,
            slug: self.slug,
            name: self.name,
            description: self.description,
            mime_types: self.mime_types,
            size: self.size,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }
}

/// Partial update of a category. Empty strings and a zero size leave the
/// stored value untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateDocumentCategory {
    #[validate(length(max = 100, message = "validation.error.must_be_length_between"))]
    pub slug: String,
    #[validate(length(max = 100, message = "validation.error.must_be_length_between"))]
    pub name: String,
    #[validate(length(max = 255, message = "validation.error.must_be_length_between"))]
    pub description: String,
    #[validate(length(max = 255, message = "validation.error.must_be_length_between"))]
    pub mime_types: String,
    #[validate(range(min = 0.0, message = "validation.error.must_be_no_less_than_value"))]
    pub size: f64,
}

impl UpdateDocumentCategory {
    /// Overwrite the non-empty fields of `category`.
    pub fn apply_to(&self, category: &mut DocumentCategory, now: DateTime<Utc>) {
        overwrite(&mut category.slug, &self.slug);
        overwrite(&mut category.name, &self.name);
        overwrite(&mut category.description, &self.description);
        overwrite(&mut category.mime_types, &self.mime_types);
        if self.size != 0.0 {
            category.size = self.size;
        }
        category.updated_at = now;
    }
}

fn overwrite(target: &mut String, value: &str) {
    if !value.is_empty() {
        *target = value.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create() -> CreateDocumentCategory {
        CreateDocumentCategory {
            slug: "sign".to_string(),
            name: "Sign".to_string(),
            mime_types: "application/pdf".to_string(),
            size: 10.0 * 10.0 * 10.0 * 1024.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_generates_id_when_empty() {
        let now = Utc::now();
        let category = create().into_category(now);
        assert!(Uuid::parse_str(&category.id).is_ok());
        assert_eq!(category.created_at, now);
        assert!(!category.is_deleted());

        let category = CreateDocumentCategory {
            id: "fixed".to_string(),
            ..create()
        }
        .into_category(now);
        assert_eq!(category.id, "fixed");
    }

    #[test]
    fn test_create_validation() {
        assert!(create().validate().is_ok());

        let invalid = CreateDocumentCategory {
            slug: String::new(),
            size: -1.0,
            ..create()
        };
        let errors = invalid.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("slug"));
        assert!(fields.contains_key("size"));
    }

    #[test]
    fn test_partial_update() {
        let mut category = create().into_category(Utc::now());
        let later = category.created_at + chrono::Duration::seconds(5);

        UpdateDocumentCategory {
            name: "Signed".to_string(),
            ..Default::default()
        }
        .apply_to(&mut category, later);

        assert_eq!(category.name, "Signed");
        assert_eq!(category.slug, "sign");
        assert_eq!(category.size, 10.0 * 10.0 * 10.0 * 1024.0);
        assert_eq!(category.updated_at, later);
    }
}
