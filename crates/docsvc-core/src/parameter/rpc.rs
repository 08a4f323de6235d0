//! Parameters received over gRPC.

use url::form_urlencoded;

use super::query::SqlQueryParameters;
use super::source::SourceParameters;

/// List parameters as carried by an RPC message.
///
/// `equal`, `not` and `like` hold URL-encoded query strings such as
/// `equal[name]=Original&equal[name]=Sign`. Unset (empty or zero) fields
/// take the same defaults as the HTTP transport.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RpcParameters {
    pub search_condition: String,
    pub page: i64,
    pub per_page: i64,
    pub order_by: String,
    pub order_method: String,
    pub equal: String,
    pub not: String,
    pub like: String,
    pub date_range_by: String,
    pub date_start: String,
    pub date_end: String,
}

impl RpcParameters {
    /// Merge the encoded filters and build SQL parameters.
    pub fn to_sql_query_parameters(&self) -> SqlQueryParameters {
        self.to_source_parameters().build()
    }

    /// Convert into source parameters, applying defaults to unset fields.
    pub fn to_source_parameters(&self) -> SourceParameters {
        let defaults = SourceParameters::default();
        let text = |value: &str, default: String| {
            if value.is_empty() { default } else { value.to_string() }
        };

        let query_strings = [&self.equal, &self.not, &self.like]
            .into_iter()
            .flat_map(|encoded| form_urlencoded::parse(encoded.as_bytes()).into_owned())
            .collect();

        SourceParameters {
            search_condition: text(&self.search_condition, defaults.search_condition),
            page: if self.page == 0 { defaults.page } else { self.page },
            per_page: if self.per_page == 0 { defaults.per_page } else { self.per_page },
            order_by: text(&self.order_by, defaults.order_by),
            order_method: text(&self.order_method, defaults.order_method),
            date_range_by: text(&self.date_range_by, defaults.date_range_by),
            date_start: self.date_start.clone(),
            date_end: self.date_end.clone(),
            query_strings,
        }
    }
}
