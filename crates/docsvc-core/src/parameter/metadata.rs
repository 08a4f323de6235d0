//! Pagination metadata returned alongside list results.

use serde::{Deserialize, Serialize};

use super::query::SqlQueryParameters;

/// The `meta` object of a list response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseMetadata {
    pub per_page: i64,
    pub page: i64,
    /// Rows matching the filter, ignoring pagination.
    pub total: i64,
}

impl ResponseMetadata {
    /// Build metadata from the request parameters and the counted total.
    pub fn new(params: &SqlQueryParameters, total: i64) -> Self {
        Self {
            per_page: params.per_page,
            page: params.page,
            total,
        }
    }
}
