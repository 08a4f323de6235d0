//! The filestore contract shared by every storage driver.

use std::fmt::Debug;
use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;

use docsvc_core::config::storage::StorageDriver;
use docsvc_core::error::AppError;
use docsvc_core::result::AppResult;

use crate::object::ObjectMetadata;

/// Lifetime of generated pre-signed URLs.
pub const EXPIRED_SIGNED_URL_TIME: Duration = Duration::from_secs(15 * 60);

/// Upper bound on a single storage operation.
pub const TIMEOUT: Duration = Duration::from_secs(10);

/// Object storage addressed by slash-separated paths.
///
/// Paths are given without the driver's configured prefix; implementations
/// apply it with [`make_path_with_prefix`](crate::path::make_path_with_prefix).
#[async_trait]
pub trait Filestore: Send + Sync + Debug + 'static {
    /// Which backend this is.
    fn driver(&self) -> StorageDriver;

    /// Pre-signed URL for reading `path`.
    async fn generate_get_object_signed_url(&self, path: &str) -> AppResult<String>;

    /// Pre-signed URL for uploading `object`, bound to its content type.
    async fn generate_put_object_signed_url(&self, object: &ObjectMetadata) -> AppResult<String>;

    /// Read the whole object.
    async fn get_object(&self, path: &str) -> AppResult<Bytes>;

    /// URL the object can be fetched from.
    async fn get_object_url(&self, path: &str) -> AppResult<String>;

    /// Store `object` at its [`filepath`](ObjectMetadata::filepath).
    async fn put_object(&self, object: ObjectMetadata) -> AppResult<ObjectMetadata>;

    /// Server-side copy of `source_path` to `target_path`.
    async fn duplicate_object(&self, source_path: &str, target_path: &str) -> AppResult<()>;

    /// Remove the object.
    async fn delete_object(&self, path: &str) -> AppResult<()>;
}

/// Run a storage call under [`TIMEOUT`].
pub(crate) async fn with_timeout<T, F>(operation: &str, future: F) -> AppResult<T>
where
    F: Future<Output = AppResult<T>>,
{
    tokio::time::timeout(TIMEOUT, future)
        .await
        .map_err(|_| AppError::storage(format!("{operation} timed out after {TIMEOUT:?}")))?
}
