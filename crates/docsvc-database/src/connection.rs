//! PostgreSQL connection pool management.

use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions, PgSslMode};
use tracing::info;

use docsvc_core::config::database::DatabaseConfig;
use docsvc_core::error::{AppError, ErrorKind};

/// Wrapper around the sqlx PostgreSQL connection pool.
#[derive(Debug, Clone)]
pub struct DatabasePool {
    /// The underlying sqlx connection pool.
    pool: PgPool,
}

impl DatabasePool {
    /// Create a new database pool from configuration. Every session uses
    /// `timezone` as its `TimeZone`.
    pub async fn connect(config: &DatabaseConfig, timezone: &str) -> Result<Self, AppError> {
        info!(
            url = %mask_password(&config.url()),
            timezone,
            max_connections = config.max_open_connections,
            min_connections = config.min_connections(),
            "Connecting to PostgreSQL"
        );

        let pool = PgPoolOptions::new()
            .max_connections(config.max_open_connections)
            .min_connections(config.min_connections())
            .acquire_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .connect_with(connect_options(config, timezone)?)
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Database,
                    format!("Failed to connect to database: {e}"),
                    e,
                )
            })?;

        info!("Successfully connected to PostgreSQL");
        Ok(Self { pool })
    }

    /// Return a reference to the underlying sqlx pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Return the underlying sqlx pool (consuming self).
    pub fn into_pool(self) -> PgPool {
        self.pool
    }

    /// Close all connections in the pool.
    pub async fn close(&self) {
        self.pool.close().await;
        info!("Database pool closed");
    }
}

fn connect_options(config: &DatabaseConfig, timezone: &str) -> Result<PgConnectOptions, AppError> {
    let ssl_mode: PgSslMode = config.ssl_mode.parse().map_err(|e| {
        AppError::with_source(
            ErrorKind::Configuration,
            format!("Invalid DB_SSL_MODE '{}'", config.ssl_mode),
            e,
        )
    })?;

    let mut options = PgConnectOptions::new()
        .host(&config.host)
        .port(config.port)
        .database(&config.name)
        .ssl_mode(ssl_mode)
        .options([("TimeZone", timezone)]);

    if !config.user.is_empty() {
        options = options.username(&config.user);
    }
    if !config.password.is_empty() {
        options = options.password(&config.password);
    }

    Ok(options)
}

/// Mask the password portion of a database URL for safe logging.
fn mask_password(url: &str) -> String {
    if let Some(at_pos) = url.find('@') {
        if let Some(colon_pos) = url[..at_pos].rfind(':') {
            let scheme_end = url.find("://").map(|p| p + 3).unwrap_or(0);
            if colon_pos > scheme_end {
                return format!("{}:****@{}", &url[..colon_pos], &url[at_pos + 1..]);
            }
        }
    }
    url.to_string()
}
