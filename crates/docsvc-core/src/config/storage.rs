//! Object storage configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Storage backends the filestore can be wired to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageDriver {
    /// Google Cloud Storage.
    Gcs,
    /// Amazon S3.
    S3,
    /// MinIO (S3-compatible, custom endpoint).
    Minio,
    /// Local filesystem.
    Local,
}

impl FromStr for StorageDriver {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gcs" => Ok(Self::Gcs),
            "s3" => Ok(Self::S3),
            "minio" => Ok(Self::Minio),
            "local" => Ok(Self::Local),
            other => Err(AppError::configuration(format!(
                "Unknown storage driver '{other}', expected one of gcs, s3, minio, local"
            ))),
        }
    }
}

impl fmt::Display for StorageDriver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gcs => write!(f, "gcs"),
            Self::S3 => write!(f, "s3"),
            Self::Minio => write!(f, "minio"),
            Self::Local => write!(f, "local"),
        }
    }
}

/// Top-level storage configuration.
#[derive(Debug, Clone, Serialize)]
pub struct StorageConfig {
    /// Raw `STORAGE_DRIVER` value.
    pub driver: String,
    /// MinIO settings.
    pub minio: MinioConfig,
    /// Google Cloud Storage settings.
    pub gcs: GcsConfig,
    /// Amazon S3 settings.
    pub s3: S3Config,
    /// Local filesystem settings.
    pub local: LocalStorageConfig,
}

impl StorageConfig {
    /// Parse the configured driver.
    pub fn driver(&self) -> Result<StorageDriver, AppError> {
        self.driver.parse()
    }
}

/// MinIO settings (`MINIO_*` variables).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MinioConfig {
    /// Host and port of the MinIO server, without scheme.
    #[serde(rename = "minio_endpoint", default)]
    pub endpoint: String,
    /// Access key.
    #[serde(rename = "minio_access_key", default)]
    pub access_key: String,
    /// Secret key.
    #[serde(rename = "minio_secret_key", default, skip_serializing)]
    pub secret_key: String,
    /// Bucket holding the objects.
    #[serde(rename = "minio_bucket_name", default)]
    pub bucket_name: String,
    /// Key prefix prepended to every object path.
    #[serde(rename = "minio_path_prefix", default)]
    pub path_prefix: String,
    /// Region used for request signing.
    #[serde(rename = "minio_region", default = "default_region")]
    pub region: String,
    /// Whether to talk to the endpoint over HTTPS.
    #[serde(rename = "minio_use_ssl", default)]
    pub use_ssl: bool,
}

impl MinioConfig {
    /// Endpoint URL including scheme.
    pub fn endpoint_url(&self) -> String {
        if self.endpoint.contains("://") {
            return self.endpoint.clone();
        }
        let scheme = if self.use_ssl { "https" } else { "http" };
        format!("{scheme}://{}", self.endpoint)
    }
}

/// Google Cloud Storage settings (`GCS_*` variables).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GcsConfig {
    /// Bucket holding the objects.
    #[serde(rename = "gcs_bucket_name", default)]
    pub bucket_name: String,
    /// Key prefix prepended to every object path.
    #[serde(rename = "gcs_path_prefix", default)]
    pub path_prefix: String,
    /// Path to the service account key file.
    #[serde(rename = "google_application_credentials", default)]
    pub credentials_file: String,
}

/// Amazon S3 settings (`S3_*` and `AWS_*` variables).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct S3Config {
    /// Bucket holding the objects.
    #[serde(rename = "s3_bucket_name", default)]
    pub bucket_name: String,
    /// Key prefix prepended to every object path.
    #[serde(rename = "s3_path_prefix", default)]
    pub path_prefix: String,
    /// Access key ID.
    #[serde(rename = "aws_access_key_id", default)]
    pub access_key_id: String,
    /// Secret access key.
    #[serde(rename = "aws_secret_access_key", default, skip_serializing)]
    pub secret_access_key: String,
    /// AWS region.
    #[serde(rename = "aws_region", default = "default_region")]
    pub region: String,
}

/// Local filesystem settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocalStorageConfig {
    /// Root directory objects are written under.
    #[serde(rename = "local_storage_root", default = "default_local_root")]
    pub root: String,
    /// Key prefix prepended to every object path.
    #[serde(rename = "local_path_prefix", default)]
    pub path_prefix: String,
}

impl Default for LocalStorageConfig {
    fn default() -> Self {
        Self {
            root: default_local_root(),
            path_prefix: String::new(),
        }
    }
}

/// Driver used when `STORAGE_DRIVER` is unset.
pub fn default_driver() -> String {
    StorageDriver::Minio.to_string()
}

fn default_region() -> String {
    "us-east-1".to_string()
}

fn default_local_root() -> String {
    "./data/storage".to_string()
}
