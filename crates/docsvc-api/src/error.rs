//! Maps domain `AppError` to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use docsvc_core::error::{AppError, ErrorKind};
use docsvc_core::response::ErrorResponse;

/// Message every 500 carries in production.
pub const INTERNAL_SERVER_ERROR_MESSAGE: &str = "error.common.internal_server_error";

/// Error type returned by handlers.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

/// Tracing code of a 500, kept on the response for the production masking layer.
#[derive(Debug, Clone)]
pub(crate) struct InternalErrorCode(pub Option<String>);

/// HTTP status for an error kind.
pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        _ if kind.is_internal() => StatusCode::INTERNAL_SERVER_ERROR,
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::Validation => StatusCode::UNPROCESSABLE_ENTITY,
        _ => StatusCode::BAD_REQUEST,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        let status = status_for(err.kind);

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(kind = %err.kind, error = %err.message, source = ?err.source, "Internal server error");
        }

        let body = ErrorResponse::new(status.as_u16(), err.message.clone())
            .with_details(&err.details)
            .with_error_code(err.error_code.clone());

        let mut response = (status, Json(body)).into_response();
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            response
                .extensions_mut()
                .insert(InternalErrorCode(err.error_code));
        }
        response
    }
}
