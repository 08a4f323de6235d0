//! Built parameters ready for SQL rendering.

use serde::Serialize;

/// Kind of a conditional filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConditionKind {
    /// `equal[field]=value`, rendered `field = ?`.
    Equal,
    /// `not[field]=value`, rendered `field != ?`.
    Not,
    /// `like[field]=value`, rendered `field LIKE ?` with `%value%`.
    Like,
}

impl ConditionKind {
    /// Query-string key of this kind.
    pub fn key(self) -> &'static str {
        match self {
            Self::Equal => "equal",
            Self::Not => "not",
            Self::Like => "like",
        }
    }

    /// SQL comparison operator.
    pub fn operator(self) -> &'static str {
        match self {
            Self::Equal => "=",
            Self::Not => "!=",
            Self::Like => "LIKE",
        }
    }
}

/// A single `field = value` filter taken from the query string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Condition {
    /// Filtered column.
    pub field: String,
    /// Raw filter value.
    pub value: String,
}

impl Condition {
    /// Create a condition.
    pub fn new(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
        }
    }
}

/// `BETWEEN` clause over a date column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateRange {
    /// SQL fragment, e.g. `created_at BETWEEN ? AND ?`.
    pub clause: String,
    /// Start and end dates bound to the placeholders.
    pub values: [String; 2],
}

/// Normalized request parameters, kept for validation and for echoing the
/// active filters back to clients.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct QueryParameters {
    pub per_page: i64,
    pub page: i64,
    pub order_by: String,
    pub order_method: String,
    pub search_condition: String,
    pub date_range_by: String,
    pub date_start: String,
    pub date_end: String,
    pub equals: Vec<Condition>,
    /// `equals` re-encoded as `&equal[field]=value` pairs.
    pub equals_query_string: String,
    pub likes: Vec<Condition>,
    /// `likes` re-encoded as `&like[field]=value` pairs.
    pub likes_query_string: String,
    pub not_equals: Vec<Condition>,
    /// `not_equals` re-encoded as `&not[field]=value` pairs.
    pub not_equals_query_string: String,
}

impl QueryParameters {
    /// Conditions of the given kind.
    pub fn conditions(&self, kind: ConditionKind) -> &[Condition] {
        match kind {
            ConditionKind::Equal => &self.equals,
            ConditionKind::Not => &self.not_equals,
            ConditionKind::Like => &self.likes,
        }
    }

    /// Values of the `equal[field]` filters.
    pub fn equal_values(&self, field: &str) -> Vec<&str> {
        values_by_field(&self.equals, field)
    }

    /// Values of the `like[field]` filters.
    pub fn like_values(&self, field: &str) -> Vec<&str> {
        values_by_field(&self.likes, field)
    }

    /// Values of the `not[field]` filters.
    pub fn not_equal_values(&self, field: &str) -> Vec<&str> {
        values_by_field(&self.not_equals, field)
    }
}

fn values_by_field<'a>(conditions: &'a [Condition], field: &str) -> Vec<&'a str> {
    conditions
        .iter()
        .filter(|c| c.field == field && !c.value.is_empty())
        .map(|c| c.value.as_str())
        .collect()
}

/// Re-encode conditions as `&key[field]=value` pairs.
pub(crate) fn to_query_string(kind: ConditionKind, conditions: &[Condition]) -> String {
    conditions
        .iter()
        .map(|c| format!("&{}[{}]={}", kind.key(), c.field, c.value))
        .collect()
}

/// Parameters used to filter, order and paginate a list query.
///
/// `query_key` joins one `field <op> ?` fragment per condition; the values
/// bound to those placeholders are in `query_value`, in the same order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SqlQueryParameters {
    pub offset: i64,
    pub limit: i64,
    pub per_page: i64,
    pub page: i64,
    /// `"{order_by} {order_method}"`.
    pub order: String,
    /// Present only when the column and both dates were supplied.
    pub date_range: Option<DateRange>,
    pub query_key: String,
    pub query_value: Vec<String>,
    pub query_parameters: QueryParameters,
}

impl SqlQueryParameters {
    /// Whether any conditional filter is active.
    pub fn has_conditions(&self) -> bool {
        !self.query_key.is_empty()
    }
}
