//! Convenience result type alias for the document service.

use crate::error::AppError;

/// A specialized `Result` type for document service operations.
pub type AppResult<T> = Result<T, AppError>;
