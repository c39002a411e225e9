use serde_json::Value;
use sqlx::PgPool;

use super::{FetchError, TableQuery};

/// Fetch rows as JSON objects straight from Postgres.
pub async fn fetch(pool: &PgPool, query: &TableQuery) -> Result<Vec<Value>, FetchError> {
    let sql = build_sql(query);
    log::debug!("{sql}");

    let mut q = sqlx::query_scalar::<_, Value>(&sql);
    if let Some(filter) = &query.filter {
        q = q.bind(filter.value.as_str());
    }

    q.fetch_all(pool)
        .await
        .map_err(|e| FetchError::new(query.table, e.to_string()))
}

/// Table and column names come from compile-time constants; the filter value
/// is always bound as `$1`.
pub(crate) fn build_sql(query: &TableQuery) -> String {
    let mut sql = format!("SELECT row_to_json(t) FROM {} t", query.table.name());
    if let Some(filter) = &query.filter {
        sql.push_str(&format!(" WHERE t.\"{}\"::text = $1", filter.column));
    }
    if let Some(order) = &query.order {
        let dir = match order.direction {
            super::Direction::Asc => "ASC",
            super::Direction::Desc => "DESC",
        };
        sql.push_str(&format!(" ORDER BY t.\"{}\" {}", order.column, dir));
    }
    if let Some(limit) = query.limit {
        sql.push_str(&format!(" LIMIT {limit}"));
    }
    sql
}
