use crate::source::{DataSource, FetchError, Filter, Order, Table};
use super::types::{Job, ACTIVE_STATUS};

/// Active postings, most recently posted first.
pub async fn find_active(source: &DataSource) -> Result<Vec<Job>, FetchError> {
    source
        .select_where(Table::Jobs, Filter::eq("status", ACTIVE_STATUS), Order::desc("posted_date"))
        .await
}
