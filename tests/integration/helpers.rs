//! Shared test helpers for integration tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use bytes::Bytes;
use http::{Request, StatusCode};
use serde_json::Value;
use sqlx::PgPool;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use tower::ServiceExt;

use docsvc_api::AppState;
use docsvc_core::config::AppConfig;
use docsvc_core::config::storage::StorageDriver;
use docsvc_core::error::AppError;
use docsvc_core::result::AppResult;
use docsvc_database::repositories::DocumentCategoryRepository;
use docsvc_entity::document_category::{CreateDocumentCategory, DocumentCategory};
use docsvc_storage::{Filestore, ObjectMetadata};

/// Filestore keeping objects in memory.
#[derive(Debug, Default)]
pub struct MemoryFilestore {
    objects: Mutex<HashMap<String, Bytes>>,
}

impl MemoryFilestore {
    fn objects(&self) -> std::sync::MutexGuard<'_, HashMap<String, Bytes>> {
        self.objects.lock().expect("filestore lock")
    }
}

#[async_trait]
impl Filestore for MemoryFilestore {
    fn driver(&self) -> StorageDriver {
        StorageDriver::Local
    }

    async fn generate_get_object_signed_url(&self, path: &str) -> AppResult<String> {
        Ok(format!("memory://{path}?signed=get"))
    }

    async fn generate_put_object_signed_url(&self, object: &ObjectMetadata) -> AppResult<String> {
        Ok(format!("memory://{}?signed=put", object.filepath()))
    }

    async fn get_object(&self, path: &str) -> AppResult<Bytes> {
        self.objects()
            .get(path)
            .cloned()
            .ok_or_else(|| AppError::not_found(format!("Object not found: {path}")))
    }

    async fn get_object_url(&self, path: &str) -> AppResult<String> {
        Ok(format!("memory://{path}"))
    }

    async fn put_object(&self, mut object: ObjectMetadata) -> AppResult<ObjectMetadata> {
        object.size = object.content.len() as i64;
        self.objects().insert(object.filepath(), object.content.clone());
        Ok(object)
    }

    async fn duplicate_object(&self, source_path: &str, target_path: &str) -> AppResult<()> {
        let data = self.get_object(source_path).await?;
        self.objects().insert(target_path.to_string(), data);
        Ok(())
    }

    async fn delete_object(&self, path: &str) -> AppResult<()> {
        self.objects().remove(path);
        Ok(())
    }
}

/// Pool that never reaches a database; any query fails quickly.
pub fn unreachable_pool() -> PgPool {
    PgPoolOptions::new()
        .acquire_timeout(Duration::from_millis(500))
        .connect_lazy_with(PgConnectOptions::new().host("127.0.0.1").port(1))
}

/// Migrated pool over the database named by `TEST_DATABASE_URL`.
///
/// Returns `None` when the variable is unset so database tests are
/// skipped on machines without Postgres.
pub async fn test_pool() -> Option<PgPool> {
    let url = std::env::var("TEST_DATABASE_URL").ok()?;
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&url)
        .await
        .expect("Failed to connect to test database");

    docsvc_database::migration::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    Some(pool)
}

/// Lowercase hex marker that keeps rows of one test apart from the rest.
pub fn unique_tag() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

/// Save a category with the given slug and name.
pub async fn create_category(
    repository: &DocumentCategoryRepository,
    slug: &str,
    name: &str,
) -> DocumentCategory {
    repository
        .save(CreateDocumentCategory {
            slug: slug.to_string(),
            name: name.to_string(),
            description: format!("{name} category"),
            mime_types: "application/pdf".to_string(),
            size: 4096.0,
            ..Default::default()
        })
        .await
        .expect("save category")
}

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Database pool for direct queries
    pub db_pool: PgPool,
}

impl TestApp {
    /// Application over a pool that never reaches a database.
    ///
    /// Routes that stay away from the database behave normally; any query
    /// fails quickly.
    pub fn without_database(environment: &str) -> Self {
        Self::build(environment, unreachable_pool())
    }

    /// Application over the database named by `TEST_DATABASE_URL`.
    ///
    /// Returns `None` when the variable is unset.
    pub async fn with_database() -> Option<Self> {
        let pool = test_pool().await?;
        Some(Self::build("test", pool))
    }

    fn build(environment: &str, pool: PgPool) -> Self {
        let vars = HashMap::from([
            ("APP_ENV".to_string(), environment.to_string()),
            ("STORAGE_DRIVER".to_string(), "local".to_string()),
        ]);
        let config = AppConfig::from_map(vars).expect("Failed to load test config");

        let filestore: Arc<dyn Filestore> = Arc::new(MemoryFilestore::default());
        let state = AppState::new(config, pool.clone(), filestore);

        Self {
            router: docsvc_api::build_router(state),
            db_pool: pool,
        }
    }

    /// Send a GET request with optional extra headers.
    pub async fn get(&self, path: &str, headers: &[(&str, &str)]) -> TestResponse {
        let mut req = Request::builder().method("GET").uri(path);
        for (name, value) in headers {
            req = req.header(*name, *value);
        }
        let req = req.body(Body::empty()).expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Parsed test response
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}

#[tokio::test]
async fn test_memory_filestore_duplicates_to_target() {
    let store = MemoryFilestore::default();
    let object = ObjectMetadata::from_bytes(&b"content"[..], "sign")
        .with_name("doc")
        .include_slug();
    store.put_object(object).await.expect("put");

    store.duplicate_object("sign/doc", "sign/doc_copy").await.expect("copy");
    assert_eq!(&store.get_object("sign/doc_copy").await.expect("get")[..], b"content");
}
