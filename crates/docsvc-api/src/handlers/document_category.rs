//! Document category handlers.

use axum::Json;
use axum::extract::{Path, State};
use tracing::debug;

use docsvc_core::error::AppError;
use docsvc_core::response::SuccessResponse;

use crate::dto::DocumentCategoryView;
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/v1/document-categories/{id}
pub async fn view(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SuccessResponse<DocumentCategoryView>>, ApiError> {
    let category = state.categories.find(&id).await.map_err(|e| {
        if e.is_not_found() {
            debug!(id = %id, "Document category not found");
            AppError::not_found("error.common.not_found")
        } else {
            e
        }
    })?;

    Ok(Json(SuccessResponse::new(
        200,
        DocumentCategoryView::from(category),
        "success.view_category",
    )))
}
