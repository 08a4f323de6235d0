//! gRPC listener lifecycle.

use std::future::Future;
use std::net::SocketAddr;

use sqlx::PgPool;
use tonic::transport::Server;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tracing::info;

use docsvc_core::error::{AppError, ErrorKind};
use docsvc_core::result::AppResult;
use docsvc_database::repositories::DocumentCategoryRepository;

use crate::handler::DocumentCategoryHandler;
use crate::layer::{CallLogLayer, panic_to_internal};
use crate::pb;
use crate::pb::document_category_service_server::DocumentCategoryServiceServer;

/// Serve the gRPC API on `port` until `shutdown` resolves.
pub async fn serve<F>(pool: PgPool, port: u16, shutdown: F) -> AppResult<()>
where
    F: Future<Output = ()> + Send,
{
    let handler = DocumentCategoryHandler::new(DocumentCategoryRepository::new(pool));

    let (mut health_reporter, health_service) = tonic_health::server::health_reporter();
    health_reporter
        .set_serving::<DocumentCategoryServiceServer<DocumentCategoryHandler>>()
        .await;

    let reflection = tonic_reflection::server::Builder::configure()
        .register_encoded_file_descriptor_set(pb::FILE_DESCRIPTOR_SET)
        .register_encoded_file_descriptor_set(tonic_health::pb::FILE_DESCRIPTOR_SET)
        .build_v1()
        .map_err(|e| {
            AppError::with_source(ErrorKind::Internal, "Failed to build reflection service", e)
        })?;

    let layers = ServiceBuilder::new()
        .layer(CallLogLayer)
        .layer(CatchPanicLayer::custom(panic_to_internal));

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!(%addr, "gRPC server listening");

    Server::builder()
        .layer(layers)
        .add_service(health_service)
        .add_service(reflection)
        .add_service(DocumentCategoryServiceServer::new(handler))
        .serve_with_shutdown(addr, async {
            shutdown.await;
            info!("Shutdown signal received, stopping gRPC server...");
        })
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Internal, "gRPC server error", e))?;

    info!("gRPC server shut down gracefully");
    Ok(())
}
