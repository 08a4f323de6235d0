//! Upload through a pre-signed URL.

use std::sync::LazyLock;

use reqwest::header::CONTENT_TYPE;
use tracing::debug;

use docsvc_core::error::{AppError, ErrorKind};
use docsvc_core::result::AppResult;

use crate::filestore::TIMEOUT;
use crate::object::ObjectMetadata;

static HTTP: LazyLock<reqwest::Client> = LazyLock::new(|| {
    reqwest::Client::builder()
        .timeout(TIMEOUT)
        .build()
        .unwrap_or_default()
});

/// `PUT` the object's content to its `put_signed_url`.
pub(crate) async fn put_via_signed_url(object: &ObjectMetadata) -> AppResult<()> {
    if object.put_signed_url.is_empty() {
        return Err(AppError::validation(
            "Signed URL is required for a signed URL upload",
        ));
    }

    let response = HTTP
        .put(&object.put_signed_url)
        .header(CONTENT_TYPE, &object.content_type)
        .body(object.content.clone())
        .send()
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Storage, "Signed URL upload failed", e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(AppError::storage(format!(
            "Signed URL upload rejected with status {status}"
        )));
    }

    debug!(path = %object.filepath(), %status, "Uploaded through signed URL");
    Ok(())
}
