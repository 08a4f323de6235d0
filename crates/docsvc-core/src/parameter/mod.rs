//! List query parameters.
//!
//! Every list endpoint accepts the same parameters: pagination
//! (`page`, `per_page`), ordering (`order_by`, `order_method`), a date range
//! (`date_range_by`, `date_start`, `date_end`) and conditional filters
//! written as `equal[field]=value`, `not[field]=value` and
//! `like[field]=value`, combined with `search_condition`.
//!
//! Transports collect these into [`SourceParameters`] (from an HTTP query
//! string or an [`RpcParameters`] message) and call
//! [`SourceParameters::build`] to obtain [`SqlQueryParameters`], which the
//! repositories render into parameterized SQL.

mod http;
mod metadata;
mod query;
mod rpc;
mod source;
mod validate;

pub use metadata::ResponseMetadata;
pub use query::{Condition, ConditionKind, DateRange, QueryParameters, SqlQueryParameters};
pub use rpc::RpcParameters;
pub use source::SourceParameters;

/// Page used when none is given.
pub const DEFAULT_PAGE: i64 = 1;
/// Page size used when none is given.
pub const DEFAULT_PER_PAGE: i64 = 5;
/// Largest accepted page size.
pub const MAX_PER_PAGE: i64 = 25;
/// Search condition used when none is given.
pub const DEFAULT_SEARCH_CONDITION: &str = "AND";
/// Ordering column used when none is given.
pub const DEFAULT_ORDER_BY: &str = "created_at";
/// Ordering direction used when none is given.
pub const DEFAULT_ORDER_METHOD: &str = "desc";
/// Date range column used when none is given.
pub const DEFAULT_DATE_RANGE_BY: &str = "created_at";
/// `chrono` layout of `date_start` and `date_end`.
pub const DATE_LAYOUT: &str = "%Y-%m-%d";
