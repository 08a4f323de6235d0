//! Driver selection from configuration.

use std::sync::Arc;

use tracing::info;

use docsvc_core::config::storage::{StorageConfig, StorageDriver};
use docsvc_core::error::AppError;
use docsvc_core::result::AppResult;

use crate::filestore::Filestore;
use crate::providers::LocalFilestore;

/// Build the filestore named by `STORAGE_DRIVER`.
pub async fn create_filestore(config: &StorageConfig) -> AppResult<Arc<dyn Filestore>> {
    let driver = config.driver()?;
    info!(%driver, "Initializing filestore");

    let store: Arc<dyn Filestore> = match driver {
        StorageDriver::Local => Arc::new(LocalFilestore::new(&config.local).await?),
        #[cfg(feature = "s3")]
        StorageDriver::S3 => Arc::new(crate::providers::S3Filestore::s3(&config.s3).await?),
        #[cfg(feature = "s3")]
        StorageDriver::Minio => Arc::new(crate::providers::S3Filestore::minio(&config.minio)?),
        #[cfg(feature = "gcs")]
        StorageDriver::Gcs => Arc::new(crate::providers::GcsFilestore::new(&config.gcs).await?),
        #[allow(unreachable_patterns)]
        other => {
            return Err(AppError::configuration(format!(
                "Storage driver '{other}' is not compiled into this build"
            )));
        }
    };

    Ok(store)
}
