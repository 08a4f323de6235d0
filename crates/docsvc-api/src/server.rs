//! HTTP listener lifecycle.

use std::future::{Future, IntoFuture};
use std::net::SocketAddr;
use std::time::Duration;

use tracing::{info, warn};

use docsvc_core::error::{AppError, ErrorKind};
use docsvc_core::result::AppResult;

use crate::router::build_router;
use crate::state::AppState;

/// How long in-flight requests may run after the shutdown signal.
pub const SHUTDOWN_DRAIN: Duration = Duration::from_secs(10);

/// Serve the HTTP API on `port` until `shutdown` resolves.
///
/// Once it does, in-flight requests get [`SHUTDOWN_DRAIN`] to finish.
pub async fn serve<F>(state: AppState, port: u16, shutdown: F) -> AppResult<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = build_router(state);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await.map_err(|e| {
        AppError::with_source(ErrorKind::Internal, format!("Failed to bind {addr}"), e)
    })?;

    info!(%addr, "HTTP server listening");

    let (signalled_tx, signalled_rx) = tokio::sync::oneshot::channel::<()>();
    let server = axum::serve(listener, app).with_graceful_shutdown(async move {
        shutdown.await;
        info!("Shutdown signal received, draining HTTP connections...");
        let _ = signalled_tx.send(());
    });

    let mut server = std::pin::pin!(server.into_future());
    tokio::select! {
        result = &mut server => {
            return result.map_err(|e| AppError::with_source(ErrorKind::Internal, "HTTP server error", e));
        }
        _ = signalled_rx => {}
    }

    match tokio::time::timeout(SHUTDOWN_DRAIN, server).await {
        Ok(result) => {
            result.map_err(|e| AppError::with_source(ErrorKind::Internal, "HTTP server error", e))?;
            info!("HTTP server shut down gracefully");
        }
        Err(_) => warn!(drain = ?SHUTDOWN_DRAIN, "Drain period elapsed, closing remaining connections"),
    }
    Ok(())
}
