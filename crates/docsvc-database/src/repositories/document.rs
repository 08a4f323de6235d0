//! Document repository implementation.

use chrono::Utc;
use sqlx::{PgPool, Postgres, QueryBuilder};

use docsvc_core::error::{AppError, ErrorKind};
use docsvc_core::parameter::{ResponseMetadata, SqlQueryParameters};
use docsvc_core::result::AppResult;
use docsvc_entity::document::{CreateDocument, Document, DocumentFilter, UpdateDocument};

use crate::listing;

/// Repository for document CRUD and query operations.
#[derive(Debug, Clone)]
pub struct DocumentRepository {
    pool: PgPool,
}

impl DocumentRepository {
    /// Create a new document repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a document by ID.
    pub async fn find(&self, id: &str) -> AppResult<Document> {
        sqlx::query_as::<_, Document>(
            "SELECT * FROM documents WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find document", e))?
        .ok_or_else(|| AppError::not_found(format!("Document {id} not found")))
    }

    /// Find a document by ID within a category.
    pub async fn find_by_id_and_category_id(
        &self,
        id: &str,
        category_id: &str,
    ) -> AppResult<Document> {
        sqlx::query_as::<_, Document>(
            "SELECT * FROM documents WHERE id = $1 AND category_id = $2 AND deleted_at IS NULL",
        )
        .bind(id)
        .bind(category_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to find document in category", e)
        })?
        .ok_or_else(|| {
            AppError::not_found(format!("Document {id} not found in category {category_id}"))
        })
    }

    /// Find a document by its object path.
    pub async fn find_by_path(&self, path: &str) -> AppResult<Document> {
        sqlx::query_as::<_, Document>(
            "SELECT * FROM documents WHERE path = $1 AND deleted_at IS NULL",
        )
        .bind(path)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find document by path", e))?
        .ok_or_else(|| AppError::not_found(format!("Document at '{path}' not found")))
    }

    /// Find the first document matching every non-empty field of `filter`.
    pub async fn find_by_entity(&self, filter: &DocumentFilter) -> AppResult<Document> {
        let mut query =
            QueryBuilder::<Postgres>::new("SELECT * FROM documents WHERE deleted_at IS NULL");
        for (column, value) in filter.columns() {
            query
                .push(" AND ")
                .push(column)
                .push(" = ")
                .push_bind(value.to_string());
        }
        query.push(" LIMIT 1");

        query
            .build_query_as::<Document>()
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find document by entity", e)
            })?
            .ok_or_else(|| AppError::not_found("Document not found"))
    }

    /// List documents matching the parameters, with pagination metadata.
    pub async fn get_list(
        &self,
        params: &SqlQueryParameters,
    ) -> AppResult<(Vec<Document>, ResponseMetadata)> {
        listing::fetch_page::<Document>(&self.pool, params).await
    }

    /// Insert a document, generating its ID when empty.
    pub async fn save(&self, data: CreateDocument) -> AppResult<Document> {
        let document = data.into_document(Utc::now());

        sqlx::query_as::<_, Document>(
            "INSERT INTO documents \
             (id, category_id, original_name, name, path, type, size, token, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) RETURNING *",
        )
        .bind(&document.id)
        .bind(&document.category_id)
        .bind(&document.original_name)
        .bind(&document.name)
        .bind(&document.path)
        .bind(&document.mime_type)
        .bind(document.size)
        .bind(&document.token)
        .bind(document.created_at)
        .bind(document.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to save document", e))
    }

    /// Overwrite the non-empty fields of the document `target_id`.
    pub async fn update(&self, target_id: &str, value: &UpdateDocument) -> AppResult<Document> {
        let mut document = self.find(target_id).await?;
        value.apply_to(&mut document, Utc::now());

        sqlx::query_as::<_, Document>(
            "UPDATE documents SET category_id = $2, original_name = $3, name = $4, path = $5, \
             type = $6, size = $7, token = $8, updated_at = $9 \
             WHERE id = $1 AND deleted_at IS NULL RETURNING *",
        )
        .bind(&document.id)
        .bind(&document.category_id)
        .bind(&document.original_name)
        .bind(&document.name)
        .bind(&document.path)
        .bind(&document.mime_type)
        .bind(document.size)
        .bind(&document.token)
        .bind(document.updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update document", e))?
        .ok_or_else(|| AppError::not_found(format!("Document {target_id} not found")))
    }

    /// Soft delete a document, returning it with `deleted_at` set.
    pub async fn delete(&self, id: &str) -> AppResult<Document> {
        sqlx::query_as::<_, Document>(
            "UPDATE documents SET deleted_at = $2 \
             WHERE id = $1 AND deleted_at IS NULL RETURNING *",
        )
        .bind(id)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete document", e))?
        .ok_or_else(|| AppError::not_found(format!("Document {id} not found")))
    }
}
