//! Route definitions for the document service HTTP API.

use axum::Router;
use axum::middleware as axum_middleware;
use axum::routing::get;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let production = state.config.app.is_production();

    let api_v1 = Router::new()
        .route(
            "/document-categories/{id}",
            get(handlers::document_category::view),
        )
        .layer(axum_middleware::from_fn(
            middleware::referer::reject_fragment_referer,
        ));

    let mut router = Router::new()
        .route("/ping", get(handlers::ping::ping))
        .nest("/api/v1", api_v1);

    if production {
        router = router.layer(axum_middleware::map_response(
            middleware::masking::mask_internal_errors,
        ));
    }

    router
        .layer(CatchPanicLayer::custom(middleware::recovery::panic_to_envelope))
        .layer(TraceLayer::new_for_http())
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}
