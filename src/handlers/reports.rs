use actix_web::{web, HttpResponse};

use crate::errors::{render, AppError};
use crate::models::financial::{self, derive_yearly_aggregates, max_value};
use crate::resource::LoadHandle;
use crate::source::{DataSource, Table};
use crate::templates_structs::{EntryRow, PageContext, ReportsTemplate, YearRow};

const RECENT_ENTRIES: usize = 10;

/// GET /reports
/// Ledger overview: yearly category bars plus the ten latest entries.
pub async fn index(source: web::Data<DataSource>) -> Result<HttpResponse, AppError> {
    let source = source.into_inner();
    let state = LoadHandle::spawn(Table::FinancialReports.name(), async move {
        financial::find_all(&source).await
    })
    .settle()
    .await;

    let error = state.error().map(str::to_string);
    let entries = state.into_loaded().unwrap_or_default();

    let aggregates = derive_yearly_aggregates(&entries);
    let max = max_value(&aggregates);
    let years = aggregates.iter().map(|a| YearRow::new(a, max)).collect();
    let recent = entries.iter().take(RECENT_ENTRIES).map(EntryRow::from).collect();

    let tmpl = ReportsTemplate {
        ctx: PageContext::build("/reports"),
        error,
        years,
        recent,
    };
    render(tmpl)
}
