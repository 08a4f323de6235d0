//! `grpc:start`: migrate, then serve the gRPC API.

use tracing::info;

use docsvc_core::config::AppConfig;
use docsvc_core::result::AppResult;
use docsvc_database::migration::run_migrations;

use crate::shutdown::shutdown_signal;

/// Start the gRPC server.
pub async fn execute(config: &AppConfig) -> AppResult<()> {
    let db = super::connect(config).await?;
    run_migrations(db.pool()).await?;

    info!(
        name = %config.app.name,
        environment = %config.app.environment,
        "Starting gRPC transport"
    );
    docsvc_grpc::serve(db.pool().clone(), config.app.grpc_port, shutdown_signal()).await?;

    db.close().await;
    Ok(())
}
