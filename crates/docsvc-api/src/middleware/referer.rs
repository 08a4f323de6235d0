//! Rejects requests coming from a page URL with a fragment.

use axum::extract::Request;
use axum::http::header::REFERER;
use axum::middleware::Next;
use axum::response::Response;

use docsvc_core::error::AppError;

use crate::error::ApiError;

/// Message of the rejection.
pub const ILLEGAL_CHARACTER_MESSAGE: &str = "common.error.uri_contains_illegal_character";

/// Fail with 400 when the `Referer` header contains `#`.
pub async fn reject_fragment_referer(request: Request, next: Next) -> Result<Response, ApiError> {
    let has_fragment = request
        .headers()
        .get(REFERER)
        .map(|value| value.as_bytes().contains(&b'#'))
        .unwrap_or(false);

    if has_fragment {
        return Err(AppError::bad_request(ILLEGAL_CHARACTER_MESSAGE).into());
    }

    Ok(next.run(request).await)
}
