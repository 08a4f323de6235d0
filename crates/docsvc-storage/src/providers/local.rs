//! Local filesystem filestore.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use bytes::Bytes;
use tokio::fs;
use tracing::debug;
use url::Url;

use docsvc_core::config::storage::{LocalStorageConfig, StorageDriver};
use docsvc_core::error::{AppError, ErrorKind};
use docsvc_core::result::AppResult;

use crate::filestore::{Filestore, with_timeout};
use crate::object::{ObjectMetadata, PutMethod};
use crate::path::make_path_with_prefix;
use crate::signed_url::put_via_signed_url;

/// Filestore rooted at a local directory.
#[derive(Debug, Clone)]
pub struct LocalFilestore {
    /// Root directory for all stored objects.
    root: PathBuf,
    path_prefix: String,
}

impl LocalFilestore {
    /// Create the filestore, making sure the root directory exists.
    pub async fn new(config: &LocalStorageConfig) -> AppResult<Self> {
        let root = PathBuf::from(&config.root);
        fs::create_dir_all(&root).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to create storage root: {}", root.display()),
                e,
            )
        })?;
        let root = fs::canonicalize(&root).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to resolve storage root: {}", root.display()),
                e,
            )
        })?;

        Ok(Self {
            root,
            path_prefix: config.path_prefix.clone(),
        })
    }

    /// Resolve an object path to a file within the root.
    fn resolve(&self, path: &str) -> AppResult<PathBuf> {
        let key = make_path_with_prefix(&self.path_prefix, path);
        let clean = key.trim_start_matches('/');
        if clean.split('/').any(|segment| segment == "..") {
            return Err(AppError::bad_request(format!(
                "Object path escapes the storage root: {path}"
            )));
        }
        Ok(self.root.join(clean))
    }

    /// Ensure the parent directory of a path exists.
    async fn ensure_parent(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await.map_err(|e| {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to create parent directory: {}", parent.display()),
                    e,
                )
            })?;
        }
        Ok(())
    }
}

fn io_error(e: std::io::Error, action: &str, path: &str) -> AppError {
    if e.kind() == std::io::ErrorKind::NotFound {
        AppError::not_found(format!("Object not found: {path}"))
    } else {
        AppError::with_source(ErrorKind::Storage, format!("Failed to {action}: {path}"), e)
    }
}

#[async_trait]
impl Filestore for LocalFilestore {
    fn driver(&self) -> StorageDriver {
        StorageDriver::Local
    }

    async fn generate_get_object_signed_url(&self, _path: &str) -> AppResult<String> {
        Err(AppError::not_implemented(
            "Signed URLs are not supported by the local driver",
        ))
    }

    async fn generate_put_object_signed_url(&self, _object: &ObjectMetadata) -> AppResult<String> {
        Err(AppError::not_implemented(
            "Signed URLs are not supported by the local driver",
        ))
    }

    async fn get_object(&self, path: &str) -> AppResult<Bytes> {
        let full_path = self.resolve(path)?;
        let data = with_timeout("local read", async {
            fs::read(&full_path).await.map_err(|e| io_error(e, "read object", path))
        })
        .await?;
        Ok(Bytes::from(data))
    }

    async fn get_object_url(&self, path: &str) -> AppResult<String> {
        let full_path = self.resolve(path)?;
        let url = Url::from_file_path(&full_path).map_err(|_| {
            AppError::internal(format!("Cannot build file URL for {}", full_path.display()))
        })?;
        Ok(url.to_string())
    }

    async fn put_object(&self, mut object: ObjectMetadata) -> AppResult<ObjectMetadata> {
        if object.put_method == PutMethod::SignedUrl {
            put_via_signed_url(&object).await?;
            object.size = object.content.len() as i64;
            return Ok(object);
        }

        let path = object.filepath();
        let full_path = self.resolve(&path)?;
        self.ensure_parent(&full_path).await?;

        with_timeout("local write", async {
            fs::write(&full_path, &object.content)
                .await
                .map_err(|e| io_error(e, "write object", &path))
        })
        .await?;

        object.size = object.content.len() as i64;
        debug!(path = %path, size = object.size, "Stored object locally");
        Ok(object)
    }

    async fn duplicate_object(&self, source_path: &str, target_path: &str) -> AppResult<()> {
        let source = self.resolve(source_path)?;
        let target = self.resolve(target_path)?;
        self.ensure_parent(&target).await?;

        with_timeout("local copy", async {
            fs::copy(&source, &target)
                .await
                .map_err(|e| io_error(e, "copy object", source_path))
        })
        .await?;

        debug!(from = %source_path, to = %target_path, "Duplicated object locally");
        Ok(())
    }

    async fn delete_object(&self, path: &str) -> AppResult<()> {
        let full_path = self.resolve(path)?;
        match fs::remove_file(&full_path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(io_error(e, "delete object", path)),
        }
    }
}
