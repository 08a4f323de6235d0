//! Turns a panicking handler into the standard 500 envelope.

use std::any::Any;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use docsvc_core::response::ErrorResponse;

use crate::error::INTERNAL_SERVER_ERROR_MESSAGE;

/// Panic handler for [`CatchPanicLayer::custom`](tower_http::catch_panic::CatchPanicLayer::custom).
pub fn panic_to_envelope(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    tracing::error!(panic = detail, "HTTP handler panicked");

    let body = ErrorResponse::new(
        StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
        INTERNAL_SERVER_ERROR_MESSAGE,
    );
    (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
}
