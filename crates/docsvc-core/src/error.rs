//! Unified application error types for the document service.
//!
//! All crates map their internal errors into [`AppError`] for consistent
//! propagation through the ? operator. The transports translate an
//! [`ErrorKind`] into an HTTP status or a gRPC code.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Top-level error kind categorization used across the entire application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    /// The requested resource was not found.
    NotFound,
    /// The request could not be understood (malformed path, illegal characters).
    BadRequest,
    /// Input validation failed; field errors are attached.
    Validation,
    /// An internal server error occurred.
    Internal,
    /// A database error occurred.
    Database,
    /// An object storage error occurred.
    Storage,
    /// A configuration error occurred.
    Configuration,
    /// A serialization/deserialization error occurred.
    Serialization,
    /// The requested operation is not supported by the active driver.
    NotImplemented,
}

impl ErrorKind {
    /// Whether this kind is reported to callers as an internal failure
    /// (HTTP 500, gRPC `Internal`).
    pub fn is_internal(self) -> bool {
        !matches!(self, Self::NotFound | Self::BadRequest | Self::Validation)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "NOT_FOUND"),
            Self::BadRequest => write!(f, "BAD_REQUEST"),
            Self::Validation => write!(f, "VALIDATION"),
            Self::Internal => write!(f, "INTERNAL"),
            Self::Database => write!(f, "DATABASE"),
            Self::Storage => write!(f, "STORAGE"),
            Self::Configuration => write!(f, "CONFIGURATION"),
            Self::Serialization => write!(f, "SERIALIZATION"),
            Self::NotImplemented => write!(f, "NOT_IMPLEMENTED"),
        }
    }
}

/// A single field-level validation failure.
///
/// `message` is a translation key such as `validation.error.is_required`;
/// `data` carries the offending value and the rule options so a client can
/// render a localized message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldError {
    /// Validator scope (empty when the validator was not scoped).
    pub scope: String,
    /// Name of the field that failed.
    pub field: String,
    /// Translation key of the failed rule.
    pub message: String,
    /// Field value and rule options.
    pub data: serde_json::Map<String, serde_json::Value>,
}

/// The unified application error used throughout the document service.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct AppError {
    /// The category of error.
    pub kind: ErrorKind,
    /// A human-readable message or translation key.
    pub message: String,
    /// Field errors for [`ErrorKind::Validation`].
    pub details: Vec<FieldError>,
    /// Optional tracing code surfaced to clients as `error_code`.
    pub error_code: Option<String>,
    /// Optional underlying cause.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new application error.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            details: Vec::new(),
            error_code: None,
            source: None,
        }
    }

    /// Create a new application error with an underlying cause.
    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            source: Some(Box::new(source)),
            ..Self::new(kind, message)
        }
    }

    /// Create a validation error carrying field errors.
    pub fn invalid(message: impl Into<String>, details: Vec<FieldError>) -> Self {
        Self {
            details,
            ..Self::new(ErrorKind::Validation, message)
        }
    }

    /// Attach a tracing code.
    pub fn with_error_code(mut self, code: impl Into<String>) -> Self {
        self.error_code = Some(code.into());
        self
    }

    /// Create a not-found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    /// Create a bad-request error.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::BadRequest, message)
    }

    /// Create a validation error without field details.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }

    /// Create a database error.
    pub fn database(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Database, message)
    }

    /// Create a storage error.
    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Storage, message)
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }

    /// Create a not-implemented error.
    pub fn not_implemented(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotImplemented, message)
    }

    /// Whether this is a not-found error.
    pub fn is_not_found(&self) -> bool {
        self.kind == ErrorKind::NotFound
    }
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            message: self.message.clone(),
            details: self.details.clone(),
            error_code: self.error_code.clone(),
            source: None,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source(
            ErrorKind::Serialization,
            format!("JSON serialization error: {err}"),
            err,
        )
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            return Self::with_source(ErrorKind::NotFound, format!("I/O error: {err}"), err);
        }
        Self::with_source(ErrorKind::Storage, format!("I/O error: {err}"), err)
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::with_source(
            ErrorKind::Configuration,
            format!("Configuration error: {err}"),
            err,
        )
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut details: Vec<FieldError> = errors
            .field_errors()
            .into_iter()
            .filter_map(|(field, errs)| {
                let err = errs.first()?;
                let mut data = serde_json::Map::new();
                for (key, value) in &err.params {
                    let key = if key == "value" { field.to_string() } else { capitalize(key) };
                    data.insert(key, value.clone());
                }
                Some(FieldError {
                    scope: String::new(),
                    field: field.to_string(),
                    message: err
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("validation.error.{}", err.code)),
                    data,
                })
            })
            .collect();
        details.sort_by(|a, b| a.field.cmp(&b.field));
        Self::invalid("error.common.unprocessable_entity", details)
    }
}

fn capitalize(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_internal_kinds() {
        assert!(ErrorKind::Database.is_internal());
        assert!(ErrorKind::Storage.is_internal());
        assert!(!ErrorKind::NotFound.is_internal());
        assert!(ErrorKind::NotImplemented.is_internal());
        assert!(!ErrorKind::Validation.is_internal());
        assert!(!ErrorKind::BadRequest.is_internal());
    }

    #[test]
    fn test_io_not_found_maps_to_not_found() {
        let err: AppError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_clone_keeps_details() {
        let err = AppError::invalid(
            "error.common.unprocessable_entity",
            vec![FieldError {
                scope: String::new(),
                field: "page".to_string(),
                message: "validation.error.is_required".to_string(),
                data: serde_json::Map::new(),
            }],
        )
        .with_error_code("LIST-001");

        let cloned = err.clone();
        assert_eq!(cloned.kind, ErrorKind::Validation);
        assert_eq!(cloned.details.len(), 1);
        assert_eq!(cloned.error_code.as_deref(), Some("LIST-001"));
        assert_eq!(
            cloned.to_string(),
            "VALIDATION: error.common.unprocessable_entity"
        );
    }

    #[test]
    fn test_from_validation_errors() {
        let mut errors = validator::ValidationErrors::new();
        let mut err = validator::ValidationError::new("length");
        err.message = Some("validation.error.is_required".into());
        errors.add("slug", err);
        errors.add("name", validator::ValidationError::new("range"));

        let app: AppError = errors.into();
        assert_eq!(app.kind, ErrorKind::Validation);
        assert_eq!(app.message, "error.common.unprocessable_entity");
        assert_eq!(app.details[0].field, "name");
        assert_eq!(app.details[0].message, "validation.error.range");
        assert_eq!(app.details[1].message, "validation.error.is_required");
    }
}
