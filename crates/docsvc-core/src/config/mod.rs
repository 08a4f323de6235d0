//! Application configuration schemas.
//!
//! Every setting comes from a flat environment variable (`APP_HTTP_PORT`,
//! `DB_HOST`, `MINIO_BUCKET_NAME`, ...). The `config` crate reads the
//! process environment once and each section deserializes the keys it
//! cares about, ignoring the rest.

pub mod app;
pub mod database;
pub mod logging;
pub mod storage;
pub mod tracer;

use std::collections::HashMap;

use serde::Serialize;

use self::app::AppSettings;
use self::database::DatabaseConfig;
use self::logging::LoggingConfig;
use self::storage::{GcsConfig, LocalStorageConfig, MinioConfig, S3Config, StorageConfig};
use self::tracer::TracerConfig;

use crate::error::AppError;

/// Root application configuration.
#[derive(Debug, Clone, Serialize)]
pub struct AppConfig {
    /// Service identity and listener ports.
    pub app: AppSettings,
    /// Database connection settings.
    pub database: DatabaseConfig,
    /// Object storage settings.
    pub storage: StorageConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// APM tracer settings.
    pub tracer: TracerConfig,
}

impl AppConfig {
    /// Load configuration from the process environment.
    pub fn load() -> Result<Self, AppError> {
        Self::from_source(config::Environment::default())
    }

    /// Load configuration from an explicit variable map instead of the
    /// process environment. Keys use the same names as the environment.
    pub fn from_map(vars: HashMap<String, String>) -> Result<Self, AppError> {
        Self::from_source(config::Environment::default().source(Some(vars)))
    }

    fn from_source(env: config::Environment) -> Result<Self, AppError> {
        let source = config::Config::builder()
            .add_source(env.ignore_empty(true))
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        let section = |name: &str| {
            let name = name.to_string();
            move |e: config::ConfigError| {
                AppError::configuration(format!("Failed to deserialize {name} config: {e}"))
            }
        };

        let config = Self {
            app: source.clone().try_deserialize().map_err(section("app"))?,
            database: source.clone().try_deserialize().map_err(section("database"))?,
            storage: StorageConfig {
                driver: source
                    .get_string("storage_driver")
                    .unwrap_or_else(|_| storage::default_driver()),
                minio: source.clone().try_deserialize::<MinioConfig>().map_err(section("minio"))?,
                gcs: source.clone().try_deserialize::<GcsConfig>().map_err(section("gcs"))?,
                s3: source.clone().try_deserialize::<S3Config>().map_err(section("s3"))?,
                local: source
                    .clone()
                    .try_deserialize::<LocalStorageConfig>()
                    .map_err(section("local storage"))?,
            },
            logging: source.clone().try_deserialize().map_err(section("logging"))?,
            tracer: source.try_deserialize().map_err(section("tracer"))?,
        };

        config.database.ensure_supported_driver()?;
        Ok(config)
    }
}
