//! Raw parameters and the builder that turns them into SQL parameters.

use std::sync::LazyLock;

use regex::Regex;

use super::query::{
    Condition, ConditionKind, DateRange, QueryParameters, SqlQueryParameters, to_query_string,
};
use super::{
    DEFAULT_DATE_RANGE_BY, DEFAULT_ORDER_BY, DEFAULT_ORDER_METHOD, DEFAULT_PAGE, DEFAULT_PER_PAGE,
    DEFAULT_SEARCH_CONDITION,
};

static EQUAL_KEY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^equal\[(.*[a-z])\]$").expect("valid regex"));
static NOT_KEY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^not\[(.*[a-z])\]$").expect("valid regex"));
static LIKE_KEY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^like\[(.*[a-z])\]$").expect("valid regex"));

/// Parameters as collected from a request, before normalization.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceParameters {
    pub search_condition: String,
    pub page: i64,
    pub per_page: i64,
    pub order_by: String,
    pub order_method: String,
    pub date_range_by: String,
    pub date_start: String,
    pub date_end: String,
    /// Every query-string pair in arrival order. Keys other than
    /// `equal[..]`, `not[..]` and `like[..]` are ignored.
    pub query_strings: Vec<(String, String)>,
}

impl Default for SourceParameters {
    fn default() -> Self {
        Self {
            search_condition: DEFAULT_SEARCH_CONDITION.to_string(),
            page: DEFAULT_PAGE,
            per_page: DEFAULT_PER_PAGE,
            order_by: DEFAULT_ORDER_BY.to_string(),
            order_method: DEFAULT_ORDER_METHOD.to_string(),
            date_range_by: DEFAULT_DATE_RANGE_BY.to_string(),
            date_start: String::new(),
            date_end: String::new(),
            query_strings: Vec::new(),
        }
    }
}

impl SourceParameters {
    /// Normalize the parameters and derive the SQL filter, order, date
    /// range and pagination.
    pub fn build(self) -> SqlQueryParameters {
        let equals = self.collect(ConditionKind::Equal);
        let not_equals = self.collect(ConditionKind::Not);
        let likes = self.collect(ConditionKind::Like);
        let search_condition = normalize_search_condition(&self.search_condition);

        let mut keys = Vec::new();
        let mut values = Vec::new();
        for (kind, conditions) in [
            (ConditionKind::Equal, &equals),
            (ConditionKind::Not, &not_equals),
            (ConditionKind::Like, &likes),
        ] {
            for condition in conditions {
                keys.push(format!("{} {} ?", condition.field, kind.operator()));
                values.push(match kind {
                    ConditionKind::Like => format!("%{}%", condition.value),
                    _ => condition.value.clone(),
                });
            }
        }
        let separator = format!(" {} ", search_condition.to_uppercase());

        let (offset, limit) = paginate(self.page, self.per_page);

        let date_range = (!self.date_range_by.is_empty()
            && !self.date_start.is_empty()
            && !self.date_end.is_empty())
        .then(|| DateRange {
            clause: format!("{} BETWEEN ? AND ?", self.date_range_by),
            values: [self.date_start.clone(), self.date_end.clone()],
        });

        let query_parameters = QueryParameters {
            per_page: self.per_page,
            page: self.page,
            order_by: self.order_by.clone(),
            order_method: self.order_method.clone(),
            search_condition,
            date_range_by: self.date_range_by,
            date_start: self.date_start,
            date_end: self.date_end,
            equals_query_string: to_query_string(ConditionKind::Equal, &equals),
            equals,
            likes_query_string: to_query_string(ConditionKind::Like, &likes),
            likes,
            not_equals_query_string: to_query_string(ConditionKind::Not, &not_equals),
            not_equals,
        };

        SqlQueryParameters {
            offset,
            limit,
            per_page: self.per_page,
            page: self.page,
            order: format!("{} {}", self.order_by, self.order_method),
            date_range,
            query_key: keys.join(&separator),
            query_value: values,
            query_parameters,
        }
    }

    /// Conditions of one kind, in arrival order, without empty values.
    fn collect(&self, kind: ConditionKind) -> Vec<Condition> {
        let pattern = match kind {
            ConditionKind::Equal => &*EQUAL_KEY,
            ConditionKind::Not => &*NOT_KEY,
            ConditionKind::Like => &*LIKE_KEY,
        };

        self.query_strings
            .iter()
            .filter(|(_, value)| !value.is_empty())
            .filter_map(|(key, value)| {
                let field = pattern.captures(key)?.get(1)?.as_str();
                Some(Condition::new(field, value.as_str()))
            })
            .collect()
    }
}

/// `and`/`or` in lowercase; empty becomes `and`; anything else is kept so
/// validation can reject it.
fn normalize_search_condition(condition: &str) -> String {
    if condition.is_empty() || condition.eq_ignore_ascii_case("and") {
        return "and".to_string();
    }
    if condition.eq_ignore_ascii_case("or") {
        return "or".to_string();
    }
    condition.to_string()
}

fn paginate(page: i64, per_page: i64) -> (i64, i64) {
    if page <= 1 {
        return (0, per_page);
    }
    ((page - 1).saturating_mul(per_page), per_page)
}
