//! Database migration runner.

use sqlx::PgPool;
use tracing::{info, warn};

use docsvc_core::error::{AppError, ErrorKind};
use docsvc_entity::table::Table;
use docsvc_entity::{Document, DocumentCategory};

/// Run all pending database migrations.
pub async fn run_migrations(pool: &PgPool) -> Result<(), AppError> {
    info!("Running database migrations...");

    sqlx::migrate!("../../migrations")
        .run(pool)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                format!("Failed to run migrations: {e}"),
                e,
            )
        })?;

    info!("Database migrations completed successfully");
    Ok(())
}

/// Drop every service table together with the migration history.
///
/// Dependent tables come first.
pub async fn reset_database(pool: &PgPool) -> Result<(), AppError> {
    let tables = [
        Document::TABLE_NAME,
        DocumentCategory::TABLE_NAME,
        "_sqlx_migrations",
    ];

    for table in tables {
        warn!(table, "Dropping table");
        sqlx::query(&format!("DROP TABLE IF EXISTS {table} CASCADE"))
            .execute(pool)
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Database,
                    format!("Failed to drop table {table}"),
                    e,
                )
            })?;
    }

    info!("Database reset completed");
    Ok(())
}
