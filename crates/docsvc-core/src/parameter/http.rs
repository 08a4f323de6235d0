//! Parameters received as an HTTP query string.

use url::form_urlencoded;

use super::query::SqlQueryParameters;
use super::source::SourceParameters;

impl SourceParameters {
    /// Collect parameters from a raw query string.
    ///
    /// An absent key takes its default, a key present with an empty value
    /// stays empty, and an unparsable number becomes `0` so validation
    /// rejects it.
    pub fn from_query(query: &str) -> Self {
        let pairs: Vec<(String, String)> = form_urlencoded::parse(query.as_bytes())
            .into_owned()
            .collect();
        let defaults = Self::default();

        let first = |key: &str| {
            pairs
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.clone())
        };
        let text = |key: &str, default: String| first(key).unwrap_or(default);
        let number = |key: &str, default: i64| {
            first(key).map_or(default, |v| v.trim().parse().unwrap_or(0))
        };

        Self {
            search_condition: text("search_condition", defaults.search_condition),
            page: number("page", defaults.page),
            per_page: number("per_page", defaults.per_page),
            order_by: text("order_by", defaults.order_by),
            order_method: text("order_method", defaults.order_method),
            date_range_by: text("date_range_by", defaults.date_range_by),
            date_start: text("date_start", String::new()),
            date_end: text("date_end", String::new()),
            query_strings: pairs.clone(),
        }
    }
}

impl SqlQueryParameters {
    /// Build SQL parameters straight from an HTTP query string.
    pub fn from_query(query: &str) -> Self {
        SourceParameters::from_query(query).build()
    }
}
