//! Database migration management commands.

use tracing::warn;

use docsvc_core::config::AppConfig;
use docsvc_core::error::AppError;
use docsvc_core::result::AppResult;
use docsvc_database::migration::{reset_database, run_migrations};

use crate::output;

/// `db:migrate`
pub async fn migrate(config: &AppConfig) -> AppResult<()> {
    let db = super::connect(config).await?;
    run_migrations(db.pool()).await?;
    db.close().await;

    output::print_success("All migrations applied successfully.");
    Ok(())
}

/// `db:reset`: drop every table, then migrate again. Refused in production.
pub async fn reset(config: &AppConfig, force: bool) -> AppResult<()> {
    if config.app.is_production() {
        return Err(AppError::bad_request(
            "db:reset is not allowed when APP_ENV is production",
        ));
    }

    if !force {
        let confirm = dialoguer::Confirm::new()
            .with_prompt("This will DROP all tables and re-run migrations. Continue?")
            .default(false)
            .interact()
            .map_err(|e| AppError::internal(format!("Input error: {e}")))?;

        if !confirm {
            println!("Cancelled.");
            return Ok(());
        }
    }

    let db = super::connect(config).await?;
    warn!(database = %config.database.name, "Resetting database");
    reset_database(db.pool()).await?;
    run_migrations(db.pool()).await?;
    db.close().await;

    output::print_success("Database reset complete.");
    Ok(())
}
