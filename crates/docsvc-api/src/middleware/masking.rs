//! Hides internal error messages from clients in production.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use docsvc_core::response::ErrorResponse;

use crate::error::{INTERNAL_SERVER_ERROR_MESSAGE, InternalErrorCode};

/// Replace the body of every internal error with the generic message.
pub async fn mask_internal_errors(response: Response) -> Response {
    let Some(InternalErrorCode(error_code)) = response.extensions().get::<InternalErrorCode>().cloned()
    else {
        return response;
    };

    let body = ErrorResponse::new(
        StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
        INTERNAL_SERVER_ERROR_MESSAGE,
    )
    .with_error_code(error_code);
    (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
}
