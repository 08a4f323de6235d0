//! JSON response envelopes shared by the REST transport.

use serde::{Deserialize, Serialize};

use crate::error::FieldError;
use crate::parameter::ResponseMetadata;

/// Success envelope: `{code, data, message, meta?}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuccessResponse<T> {
    pub code: u16,
    pub data: T,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<ResponseMetadata>,
}

impl<T> SuccessResponse<T> {
    /// Create a success envelope without metadata.
    pub fn new(code: u16, data: T, message: impl Into<String>) -> Self {
        Self {
            code,
            data,
            message: message.into(),
            meta: None,
        }
    }

    /// Attach list metadata.
    pub fn with_meta(mut self, meta: ResponseMetadata) -> Self {
        self.meta = Some(meta);
        self
    }
}

/// One entry of the error envelope's `data` list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub field: String,
    pub description: String,
}

impl From<&FieldError> for ErrorDetail {
    fn from(err: &FieldError) -> Self {
        Self {
            field: err.field.clone(),
            description: err.message.clone(),
        }
    }
}

/// Error envelope: `{code, data, message, error_code?}`.
///
/// `data` lists field errors for validation failures and is `null`
/// otherwise.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: u16,
    pub data: Option<Vec<ErrorDetail>>,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
}

impl ErrorResponse {
    /// Create an error envelope.
    pub fn new(code: u16, message: impl Into<String>) -> Self {
        Self {
            code,
            data: None,
            message: message.into(),
            error_code: None,
        }
    }

    /// Attach field errors; an empty list leaves `data` null.
    pub fn with_details(mut self, details: &[FieldError]) -> Self {
        if !details.is_empty() {
            self.data = Some(details.iter().map(ErrorDetail::from).collect());
        }
        self
    }

    /// Attach a tracing code.
    pub fn with_error_code(mut self, error_code: Option<String>) -> Self {
        self.error_code = error_code;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_envelope_omits_missing_meta() {
        let body = serde_json::to_value(SuccessResponse::new(200, json!({"status": "OK"}), "pong"))
            .expect("serialize");
        assert_eq!(body, json!({"code": 200, "data": {"status": "OK"}, "message": "pong"}));
    }

    #[test]
    fn test_success_envelope_with_meta() {
        let meta = ResponseMetadata {
            per_page: 5,
            page: 1,
            total: 2,
        };
        let body = serde_json::to_value(SuccessResponse::new(200, json!([]), "ok").with_meta(meta))
            .expect("serialize");
        assert_eq!(body["meta"], json!({"per_page": 5, "page": 1, "total": 2}));
    }

    #[test]
    fn test_error_envelope() {
        let body = serde_json::to_value(ErrorResponse::new(404, "error.common.not_found"))
            .expect("serialize");
        assert_eq!(
            body,
            json!({"code": 404, "data": null, "message": "error.common.not_found"})
        );

        let details = vec![FieldError {
            scope: String::new(),
            field: "page".to_string(),
            message: "validation.error.is_required".to_string(),
            data: serde_json::Map::new(),
        }];
        let body = serde_json::to_value(
            ErrorResponse::new(422, "error.common.unprocessable_entity")
                .with_details(&details)
                .with_error_code(Some("LIST-001".to_string())),
        )
        .expect("serialize");
        assert_eq!(
            body["data"],
            json!([{"field": "page", "description": "validation.error.is_required"}])
        );
        assert_eq!(body["error_code"], "LIST-001");
    }
}
