use crate::source::{DataSource, FetchError, Order, Table};
use super::types::FinancialEntry;

/// Every ledger row, newest first.
pub async fn find_all(source: &DataSource) -> Result<Vec<FinancialEntry>, FetchError> {
    source.select_all(Table::FinancialReports, Order::desc("date")).await
}
