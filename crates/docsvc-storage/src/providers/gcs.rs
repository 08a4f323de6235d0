//! Google Cloud Storage filestore.

use std::path::Path;

use async_trait::async_trait;
use bytes::Bytes;
use google_cloud_storage::client::{Client, ClientConfig};
use google_cloud_storage::http::Error as GcsError;
use google_cloud_storage::http::objects::copy::CopyObjectRequest;
use google_cloud_storage::http::objects::delete::DeleteObjectRequest;
use google_cloud_storage::http::objects::download::Range;
use google_cloud_storage::http::objects::get::GetObjectRequest;
use google_cloud_storage::http::objects::upload::{Media, UploadObjectRequest, UploadType};
use google_cloud_storage::sign::{SignedURLMethod, SignedURLOptions};
use tracing::{debug, info};

use docsvc_core::config::storage::{GcsConfig, StorageDriver};
use docsvc_core::error::AppError;
use docsvc_core::result::AppResult;

use crate::filestore::{EXPIRED_SIGNED_URL_TIME, Filestore, with_timeout};
use crate::object::{ObjectMetadata, PutMethod};
use crate::path::make_path_with_prefix;
use crate::signed_url::put_via_signed_url;

/// Filestore backed by a Cloud Storage bucket.
pub struct GcsFilestore {
    client: Client,
    bucket: String,
    path_prefix: String,
}

impl std::fmt::Debug for GcsFilestore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GcsFilestore")
            .field("bucket", &self.bucket)
            .field("path_prefix", &self.path_prefix)
            .finish()
    }
}

impl GcsFilestore {
    /// Authenticate with the service account in `GOOGLE_APPLICATION_CREDENTIALS`.
    pub async fn new(config: &GcsConfig) -> AppResult<Self> {
        if config.bucket_name.is_empty() {
            return Err(AppError::configuration("GCS_BUCKET_NAME is required"));
        }
        if !config.credentials_file.is_empty() && !Path::new(&config.credentials_file).is_file() {
            return Err(AppError::configuration(format!(
                "GCS credentials file not found: {}",
                config.credentials_file
            )));
        }

        let client_config = ClientConfig::default()
            .with_auth()
            .await
            .map_err(|e| AppError::configuration(format!("Failed to create GCS client: {e}")))?;

        info!(bucket = %config.bucket_name, "GCS filestore ready");
        Ok(Self {
            client: Client::new(client_config),
            bucket: config.bucket_name.clone(),
            path_prefix: config.path_prefix.clone(),
        })
    }

    fn key(&self, path: &str) -> String {
        make_path_with_prefix(&self.path_prefix, path)
    }

    async fn signed_url(&self, path: &str, options: SignedURLOptions) -> AppResult<String> {
        self.client
            .signed_url(&self.bucket, &self.key(path), None, None, options)
            .await
            .map_err(|e| AppError::storage(format!("Failed to sign URL for '{path}': {e}")))
    }
}

fn gcs_error(action: &str, path: &str, e: GcsError) -> AppError {
    match e {
        GcsError::Response(ref response) if response.code == 404 => {
            AppError::not_found(format!("Object not found: {path}"))
        }
        other => AppError::storage(format!("Failed to {action} '{path}': {other}")),
    }
}

#[async_trait]
impl Filestore for GcsFilestore {
    fn driver(&self) -> StorageDriver {
        StorageDriver::Gcs
    }

    async fn generate_get_object_signed_url(&self, path: &str) -> AppResult<String> {
        self.signed_url(
            path,
            SignedURLOptions {
                method: SignedURLMethod::GET,
                expires: EXPIRED_SIGNED_URL_TIME,
                ..Default::default()
            },
        )
        .await
    }

    async fn generate_put_object_signed_url(&self, object: &ObjectMetadata) -> AppResult<String> {
        self.signed_url(
            &object.filepath(),
            SignedURLOptions {
                method: SignedURLMethod::PUT,
                expires: EXPIRED_SIGNED_URL_TIME,
                content_type: Some(object.content_type.clone()),
                ..Default::default()
            },
        )
        .await
    }

    async fn get_object(&self, path: &str) -> AppResult<Bytes> {
        let request = GetObjectRequest {
            bucket: self.bucket.clone(),
            object: self.key(path),
            ..Default::default()
        };

        let data = with_timeout("GCS download_object", async {
            self.client
                .download_object(&request, &Range::default())
                .await
                .map_err(|e| gcs_error("download", path, e))
        })
        .await?;
        Ok(Bytes::from(data))
    }

    async fn get_object_url(&self, path: &str) -> AppResult<String> {
        self.generate_get_object_signed_url(path).await
    }

    async fn put_object(&self, mut object: ObjectMetadata) -> AppResult<ObjectMetadata> {
        object.size = object.content.len() as i64;
        if object.put_method == PutMethod::SignedUrl {
            put_via_signed_url(&object).await?;
            return Ok(object);
        }

        let path = object.filepath();
        let request = UploadObjectRequest {
            bucket: self.bucket.clone(),
            ..Default::default()
        };
        let mut media = Media::new(self.key(&path));
        media.content_type = object.content_type.clone().into();

        with_timeout("GCS upload_object", async {
            self.client
                .upload_object(&request, object.content.to_vec(), &UploadType::Simple(media))
                .await
                .map_err(|e| gcs_error("upload", &path, e))
        })
        .await?;

        debug!(bucket = %self.bucket, path = %path, size = object.size, "Stored object");
        Ok(object)
    }

    async fn duplicate_object(&self, source_path: &str, target_path: &str) -> AppResult<()> {
        let request = CopyObjectRequest {
            source_bucket: self.bucket.clone(),
            source_object: self.key(source_path),
            destination_bucket: self.bucket.clone(),
            destination_object: self.key(target_path),
            ..Default::default()
        };

        with_timeout("GCS copy_object", async {
            self.client
                .copy_object(&request)
                .await
                .map_err(|e| gcs_error("copy", source_path, e))
        })
        .await?;

        debug!(from = %source_path, to = %target_path, "Duplicated object");
        Ok(())
    }

    async fn delete_object(&self, path: &str) -> AppResult<()> {
        let request = DeleteObjectRequest {
            bucket: self.bucket.clone(),
            object: self.key(path),
            ..Default::default()
        };

        with_timeout("GCS delete_object", async {
            self.client
                .delete_object(&request)
                .await
                .map_err(|e| gcs_error("delete", path, e))
        })
        .await
    }
}
