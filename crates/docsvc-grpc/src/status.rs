//! Mapping of `AppError` into `tonic::Status`.

use tonic::{Code, Status};
use tonic_types::{ErrorDetails, StatusExt};
use tracing::error;

use docsvc_core::error::{AppError, ErrorKind};

/// Message of every `Internal` status.
pub const INTERNAL_SERVER_ERROR: &str = "error.common.internal_server_error";
/// Message of a rejected list request.
pub const UNPROCESSABLE_ENTITY: &str = "error.common.unprocessable_entity";
/// Message of a missing category.
pub const CATEGORY_NOT_FOUND: &str = "error.document_category.not_found";

/// Convert an error into the status returned to the caller.
///
/// `not_found` replaces the message of a not-found error. Validation
/// failures carry their field errors as `google.rpc.BadRequest` violations;
/// anything else is logged and reported as `Internal`.
pub fn to_status(err: AppError, not_found: &str) -> Status {
    match err.kind {
        kind if kind.is_internal() => {
            error!(%kind, error = %err.message, source = ?err.source, "Internal gRPC error");
            Status::internal(INTERNAL_SERVER_ERROR)
        }
        ErrorKind::NotFound => Status::not_found(not_found),
        ErrorKind::Validation => {
            let mut details = ErrorDetails::new();
            for field in &err.details {
                details.add_bad_request_violation(field.field.clone(), field.message.clone());
            }
            Status::with_error_details(Code::InvalidArgument, UNPROCESSABLE_ENTITY, details)
        }
        _ => Status::invalid_argument(err.message),
    }
}
