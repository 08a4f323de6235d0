//! Rendering of list parameters into paginated SQL.
//!
//! [`SqlQueryParameters`] carry `?`-placeholder fragments. They are
//! re-validated against the entity's field lists, then rendered into a
//! [`QueryBuilder`] with every value bound, never interpolated.

use chrono::NaiveDate;
use sqlx::postgres::PgRow;
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

use docsvc_core::error::{AppError, ErrorKind};
use docsvc_core::parameter::{DATE_LAYOUT, ResponseMetadata, SqlQueryParameters};
use docsvc_core::result::AppResult;
use docsvc_entity::table::Table;

/// Count the matching rows of `T`, then fetch one page of them.
pub async fn fetch_page<T>(
    pool: &PgPool,
    params: &SqlQueryParameters,
) -> AppResult<(Vec<T>, ResponseMetadata)>
where
    T: Table + for<'r> FromRow<'r, PgRow> + Send + Unpin,
{
    let errors = params.validate(T::FILTERABLE_FIELDS, T::TIME_FIELDS);
    if !errors.is_empty() {
        return Err(AppError::invalid("error.common.unprocessable_entity", errors));
    }

    let mut count = QueryBuilder::<Postgres>::new(format!(
        "SELECT COUNT(*) FROM {} WHERE deleted_at IS NULL",
        T::TABLE_NAME
    ));
    push_filters(&mut count, params)?;
    let total: i64 = count
        .build_query_scalar::<i64>()
        .fetch_one(pool)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                format!("Failed to count {}", T::TABLE_NAME),
                e,
            )
        })?;

    let mut list = QueryBuilder::<Postgres>::new(format!(
        "SELECT * FROM {} WHERE deleted_at IS NULL",
        T::TABLE_NAME
    ));
    push_filters(&mut list, params)?;
    list.push(" ORDER BY ").push(&params.order);
    list.push(" LIMIT ").push_bind(params.limit);
    list.push(" OFFSET ").push_bind(params.offset);

    let rows = list
        .build_query_as::<T>()
        .fetch_all(pool)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                format!("Failed to list {}", T::TABLE_NAME),
                e,
            )
        })?;

    Ok((rows, ResponseMetadata::new(params, total)))
}

/// Append the conditional filter and the date range as `AND (...)` clauses.
pub fn push_filters(builder: &mut QueryBuilder<'_, Postgres>, params: &SqlQueryParameters) -> AppResult<()> {
    if params.has_conditions() {
        builder.push(" AND (");
        push_placeholders(builder, &params.query_key, params.query_value.iter().cloned())?;
        builder.push(")");
    }

    if let Some(range) = &params.date_range {
        let [start, end] = &range.values;
        let dates = [parse_date("date_start", start)?, parse_date("date_end", end)?];
        builder.push(" AND (");
        push_placeholders(builder, &range.clause, dates)?;
        builder.push(")");
    }

    Ok(())
}

/// Replace each `?` of `fragment` with the next bound value.
fn push_placeholders<'a, V, I>(
    builder: &mut QueryBuilder<'a, Postgres>,
    fragment: &str,
    values: I,
) -> AppResult<()>
where
    I: IntoIterator<Item = V>,
    V: 'a + sqlx::Encode<'a, Postgres> + sqlx::Type<Postgres> + Send,
{
    let mut values = values.into_iter();
    let mut pieces = fragment.split('?');

    if let Some(first) = pieces.next() {
        builder.push(first);
    }
    for piece in pieces {
        let value = values.next().ok_or_else(|| {
            AppError::internal(format!("Missing value for placeholder in '{fragment}'"))
        })?;
        builder.push_bind(value);
        builder.push(piece);
    }

    if values.next().is_some() {
        return Err(AppError::internal(format!(
            "Too many values for placeholders in '{fragment}'"
        )));
    }
    Ok(())
}

fn parse_date(field: &str, value: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_LAYOUT).map_err(|e| {
        AppError::with_source(
            ErrorKind::Validation,
            format!("Invalid {field} '{value}'"),
            e,
        )
    })
}
