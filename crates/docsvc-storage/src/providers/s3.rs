//! Amazon S3 and MinIO filestore.
//!
//! MinIO speaks the S3 protocol, so both drivers share [`S3Filestore`]; the
//! MinIO flavour targets a custom endpoint with path-style addressing.

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_s3::Client;
use aws_sdk_s3::config::{Credentials, Region};
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::presigning::PresigningConfig;
use aws_sdk_s3::primitives::ByteStream;
use bytes::Bytes;
use tracing::{debug, info};

use docsvc_core::config::storage::{MinioConfig, S3Config, StorageDriver};
use docsvc_core::error::AppError;
use docsvc_core::result::AppResult;

use crate::filestore::{EXPIRED_SIGNED_URL_TIME, Filestore, with_timeout};
use crate::object::{ObjectMetadata, PutMethod};
use crate::path::{base_name, encode_key, make_path_with_prefix};
use crate::signed_url::put_via_signed_url;

/// Filestore backed by an S3-compatible bucket.
#[derive(Debug, Clone)]
pub struct S3Filestore {
    client: Client,
    bucket: String,
    path_prefix: String,
    driver: StorageDriver,
}

impl S3Filestore {
    /// Connect to Amazon S3.
    ///
    /// Static credentials are used when configured; otherwise the default AWS
    /// provider chain (environment, profile, instance metadata) applies.
    pub async fn s3(config: &S3Config) -> AppResult<Self> {
        require_bucket(&config.bucket_name, "S3_BUCKET_NAME")?;
        let region = Region::new(config.region.clone());

        let client = if config.access_key_id.is_empty() {
            let shared = aws_config::defaults(BehaviorVersion::latest())
                .region(region)
                .load()
                .await;
            Client::new(&shared)
        } else {
            let credentials = Credentials::new(
                &config.access_key_id,
                &config.secret_access_key,
                None,
                None,
                "document-service",
            );
            let s3_config = aws_sdk_s3::config::Builder::new()
                .behavior_version(BehaviorVersion::latest())
                .region(region)
                .credentials_provider(credentials)
                .build();
            Client::from_conf(s3_config)
        };

        info!(bucket = %config.bucket_name, region = %config.region, "S3 filestore ready");
        Ok(Self {
            client,
            bucket: config.bucket_name.clone(),
            path_prefix: config.path_prefix.clone(),
            driver: StorageDriver::S3,
        })
    }

    /// Connect to a MinIO server.
    pub fn minio(config: &MinioConfig) -> AppResult<Self> {
        require_bucket(&config.bucket_name, "MINIO_BUCKET_NAME")?;
        if config.endpoint.is_empty() {
            return Err(AppError::configuration("MINIO_ENDPOINT is required"));
        }

        let credentials = Credentials::new(
            &config.access_key,
            &config.secret_key,
            None,
            None,
            "document-service",
        );
        let s3_config = aws_sdk_s3::config::Builder::new()
            .behavior_version(BehaviorVersion::latest())
            .endpoint_url(config.endpoint_url())
            .region(Region::new(config.region.clone()))
            .credentials_provider(credentials)
            .force_path_style(true)
            .build();

        info!(endpoint = %config.endpoint_url(), bucket = %config.bucket_name, "MinIO filestore ready");
        Ok(Self {
            client: Client::from_conf(s3_config),
            bucket: config.bucket_name.clone(),
            path_prefix: config.path_prefix.clone(),
            driver: StorageDriver::Minio,
        })
    }

    fn key(&self, path: &str) -> String {
        make_path_with_prefix(&self.path_prefix, path)
    }

    fn presigning() -> AppResult<PresigningConfig> {
        PresigningConfig::expires_in(EXPIRED_SIGNED_URL_TIME)
            .map_err(|e| AppError::internal(format!("Invalid presigning config: {e}")))
    }
}

fn require_bucket(bucket: &str, variable: &str) -> AppResult<()> {
    if bucket.is_empty() {
        return Err(AppError::configuration(format!("{variable} is required")));
    }
    Ok(())
}

/// `x-amz-copy-source` value: the bucket and the URL-encoded key.
fn copy_source(bucket: &str, key: &str) -> String {
    format!("{bucket}/{}", encode_key(key))
}

fn sdk_error<E>(action: &str, path: &str, e: E) -> AppError
where
    E: std::error::Error,
{
    AppError::storage(format!("Failed to {action} '{path}': {}", DisplayErrorContext(&e)))
}

#[async_trait]
impl Filestore for S3Filestore {
    fn driver(&self) -> StorageDriver {
        self.driver
    }

    async fn generate_get_object_signed_url(&self, path: &str) -> AppResult<String> {
        let mut request = self.client.get_object().bucket(&self.bucket).key(self.key(path));
        if self.driver == StorageDriver::Minio {
            request = request
                .response_content_disposition(format!("inline; filename={}", base_name(path)));
        }

        let presigned = request
            .presigned(Self::presigning()?)
            .await
            .map_err(|e| sdk_error("presign GET for", path, e))?;
        Ok(presigned.uri().to_string())
    }

    async fn generate_put_object_signed_url(&self, object: &ObjectMetadata) -> AppResult<String> {
        let path = object.filepath();
        let presigned = self
            .client
            .put_object()
            .bucket(&self.bucket)
            .key(self.key(&path))
            .content_type(&object.content_type)
            .presigned(Self::presigning()?)
            .await
            .map_err(|e| sdk_error("presign PUT for", &path, e))?;
        Ok(presigned.uri().to_string())
    }

    async fn get_object(&self, path: &str) -> AppResult<Bytes> {
        with_timeout("S3 get_object", async {
            let output = self
                .client
                .get_object()
                .bucket(&self.bucket)
                .key(self.key(path))
                .send()
                .await
                .map_err(|e| {
                    let service = e.into_service_error();
                    if service.is_no_such_key() {
                        AppError::not_found(format!("Object not found: {path}"))
                    } else {
                        sdk_error("get", path, service)
                    }
                })?;

            let data = output
                .body
                .collect()
                .await
                .map_err(|e| sdk_error("read body of", path, e))?;
            Ok(data.into_bytes())
        })
        .await
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
        with_timeout("S3 put_object", async {
            self.client
                .put_object()
                .bucket(&self.bucket)
                .key(self.key(&path))
                .content_type(&object.content_type)
                .content_length(object.size)
                .content_disposition("attachment")
                .body(ByteStream::from(object.content.clone()))
                .send()
                .await
                .map_err(|e| sdk_error("put", &path, e))
        })
        .await?;

        debug!(bucket = %self.bucket, path = %path, size = object.size, "Stored object");
        Ok(object)
    }

    async fn duplicate_object(&self, source_path: &str, target_path: &str) -> AppResult<()> {
        let source = copy_source(&self.bucket, &self.key(source_path));
        with_timeout("S3 copy_object", async {
            self.client
                .copy_object()
                .copy_source(source)
                .bucket(&self.bucket)
                .key(self.key(target_path))
                .send()
                .await
                .map_err(|e| sdk_error("copy", source_path, e))
        })
        .await?;

        debug!(from = %source_path, to = %target_path, "Duplicated object");
        Ok(())
    }

    async fn delete_object(&self, path: &str) -> AppResult<()> {
        with_timeout("S3 delete_object", async {
            self.client
                .delete_object()
                .bucket(&self.bucket)
                .key(self.key(path))
                .send()
                .await
                .map_err(|e| sdk_error("delete", path, e))
        })
        .await?;
        Ok(())
    }
}
