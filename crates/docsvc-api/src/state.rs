//! Shared state handed to every handler.

use std::sync::Arc;

use sqlx::PgPool;

use docsvc_core::config::AppConfig;
use docsvc_database::repositories::{DocumentCategoryRepository, DocumentRepository};
use docsvc_storage::Filestore;

/// Application state, cloned into each request.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Loaded configuration.
    pub config: Arc<AppConfig>,
    /// Object storage used for document content.
    pub filestore: Arc<dyn Filestore>,
    /// Document category repository.
    pub categories: DocumentCategoryRepository,
    /// Document repository.
    pub documents: DocumentRepository,
}

impl AppState {
    /// Wire repositories over `pool`.
    pub fn new(config: AppConfig, pool: PgPool, filestore: Arc<dyn Filestore>) -> Self {
        Self {
            config: Arc::new(config),
            filestore,
            categories: DocumentCategoryRepository::new(pool.clone()),
            documents: DocumentRepository::new(pool),
        }
    }
}
