//! Document category repository implementation.

use chrono::Utc;
use sqlx::PgPool;

use docsvc_core::error::{AppError, ErrorKind};
use docsvc_core::parameter::{ResponseMetadata, SqlQueryParameters};
use docsvc_core::result::AppResult;
use docsvc_entity::document_category::{
    CreateDocumentCategory, DocumentCategory, UpdateDocumentCategory,
};

use crate::listing;

/// Repository for document category CRUD and list operations.
///
/// Soft-deleted rows are invisible to every read.
#[derive(Debug, Clone)]
pub struct DocumentCategoryRepository {
    pool: PgPool,
}

impl DocumentCategoryRepository {
    /// Create a new document category repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a category by ID.
    pub async fn find(&self, id: &str) -> AppResult<DocumentCategory> {
        sqlx::query_as::<_, DocumentCategory>(
            "SELECT * FROM document_categories WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find document category", e))?
        .ok_or_else(|| AppError::not_found(format!("Document category {id} not found")))
    }

    /// Find a category by slug.
    pub async fn find_by_slug(&self, slug: &str) -> AppResult<DocumentCategory> {
        sqlx::query_as::<_, DocumentCategory>(
            "SELECT * FROM document_categories WHERE slug = $1 AND deleted_at IS NULL",
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to find document category by slug", e)
        })?
        .ok_or_else(|| AppError::not_found(format!("Document category '{slug}' not found")))
    }

    /// List categories matching the parameters, with pagination metadata.
    pub async fn get_list(
        &self,
        params: &SqlQueryParameters,
    ) -> AppResult<(Vec<DocumentCategory>, ResponseMetadata)> {
        listing::fetch_page::<DocumentCategory>(&self.pool, params).await
    }

    /// Insert a category, generating its ID when empty.
    pub async fn save(&self, data: CreateDocumentCategory) -> AppResult<DocumentCategory> {
        let category = data.into_category(Utc::now());

        sqlx::query_as::<_, DocumentCategory>(
            "INSERT INTO document_categories \
             (id, slug, name, description, mime_types, size, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) RETURNING *",
        )
        .bind(&category.id)
        .bind(&category.slug)
        .bind(&category.name)
        .bind(&category.description)
        .bind(&category.mime_types)
        .bind(category.size)
        .bind(category.created_at)
        .bind(category.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to save document category", e))
    }

    /// Overwrite the non-empty fields of an existing category.
    pub async fn update(
        &self,
        id: &str,
        changes: &UpdateDocumentCategory,
    ) -> AppResult<DocumentCategory> {
        let mut category = self.find(id).await?;
        changes.apply_to(&mut category, Utc::now());

        sqlx::query_as::<_, DocumentCategory>(
            "UPDATE document_categories SET slug = $2, name = $3, description = $4, \
             mime_types = $5, size = $6, updated_at = $7 \
             WHERE id = $1 AND deleted_at IS NULL RETURNING *",
        )
        .bind(&category.id)
        .bind(&category.slug)
        .bind(&category.name)
        .bind(&category.description)
        .bind(&category.mime_types)
        .bind(category.size)
        .bind(category.updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update document category", e))?
        .ok_or_else(|| AppError::not_found(format!("Document category {id} not found")))
    }

    /// Soft delete a category, returning it with `deleted_at` set.
    pub async fn delete(&self, id: &str) -> AppResult<DocumentCategory> {
        self.find(id).await?;

        sqlx::query_as::<_, DocumentCategory>(
            "UPDATE document_categories SET deleted_at = $2 \
             WHERE id = $1 AND deleted_at IS NULL RETURNING *",
        )
        .bind(id)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete document category", e))?
        .ok_or_else(|| AppError::not_found(format!("Document category {id} not found")))
    }
}
