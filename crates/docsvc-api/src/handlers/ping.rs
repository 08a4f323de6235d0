//! Liveness check.

use axum::Json;

use docsvc_core::response::SuccessResponse;

use crate::dto::PingStatus;

/// GET /ping
pub async fn ping() -> Json<SuccessResponse<PingStatus>> {
    Json(SuccessResponse::new(200, PingStatus::ok(), "pong"))
}
