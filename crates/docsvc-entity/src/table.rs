//! Table metadata shared by the entities.

/// Columns that can carry the `created_at`/`updated_at`/`deleted_at`
/// timestamps every table has.
pub const TIME_FIELDS: [&str; 3] = ["created_at", "updated_at", "deleted_at"];

/// A database-backed entity.
///
/// The field lists feed list-parameter validation: only filterable fields
/// may appear in `equal[..]`, `not[..]` and `like[..]` keys, and only time
/// fields may be used for ordering or date ranges.
pub trait Table {
    /// Table name.
    const TABLE_NAME: &'static str;

    /// Columns that accept conditional filters.
    const FILTERABLE_FIELDS: &'static [&'static str];

    /// Columns usable for ordering and date ranges.
    const TIME_FIELDS: &'static [&'static str] = &TIME_FIELDS;
}
