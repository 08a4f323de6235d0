//! # docsvc-api
//!
//! REST transport of the document service built on Axum: the ping check,
//! document category reads, envelope mapping of [`AppError`] and the
//! request middleware.
//!
//! [`AppError`]: docsvc_core::error::AppError

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use router::build_router;
pub use state::AppState;
