//! Default command: migrate, then serve the HTTP API.

use tracing::info;

use docsvc_api::AppState;
use docsvc_core::config::AppConfig;
use docsvc_core::result::AppResult;
use docsvc_database::migration::run_migrations;
use docsvc_storage::create_filestore;

use crate::shutdown::shutdown_signal;

/// Start the HTTP server.
pub async fn execute(config: AppConfig) -> AppResult<()> {
    let db = super::connect(&config).await?;
    run_migrations(db.pool()).await?;

    let filestore = create_filestore(&config.storage).await?;
    let port = config.app.http_port;
    info!(
        name = %config.app.name,
        environment = %config.app.environment,
        storage = %filestore.driver(),
        "Starting HTTP transport"
    );

    let state = AppState::new(config, db.pool().clone(), filestore);
    docsvc_api::server::serve(state, port, shutdown_signal()).await?;

    db.close().await;
    Ok(())
}
