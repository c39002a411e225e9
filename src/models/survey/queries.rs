use crate::source::{DataSource, FetchError, Filter, Order, Table};
use super::types::SurveyRecord;

/// All zone records ordered by zone name.
pub async fn find_all(source: &DataSource) -> Result<Vec<SurveyRecord>, FetchError> {
    source.select_all(Table::SurveyData, Order::asc("zone")).await
}

pub async fn find_by_zone(source: &DataSource, zone: &str) -> Result<Option<SurveyRecord>, FetchError> {
    source.select_single(Table::SurveyData, Filter::eq("zone", zone)).await
}
