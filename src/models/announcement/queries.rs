use crate::source::{DataSource, FetchError, Order, Table};
use super::types::Announcement;

/// All announcements, latest date first.
pub async fn find_all(source: &DataSource) -> Result<Vec<Announcement>, FetchError> {
    source.select_all(Table::Announcements, Order::desc("date")).await
}
