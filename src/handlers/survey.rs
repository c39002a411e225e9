use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::errors::{render, AppError};
use crate::models::survey::{self, apply_zone_load, ZoneList, ALL_ZONES};
use crate::resource::{LoadHandle, LoadState};
use crate::source::{DataSource, Table};
use crate::templates_structs::{PageContext, SurveySummary, SurveyTemplate, ZoneOption};

#[derive(Debug, Deserialize)]
pub struct SurveyQuery {
    pub zone: Option<String>,
}

/// GET /survey?zone=
/// Loads the zone list first; a specific zone is only fetched after that
/// list has arrived with at least one zone.
pub async fn index(
    source: web::Data<DataSource>,
    query: web::Query<SurveyQuery>,
) -> Result<HttpResponse, AppError> {
    let source = source.into_inner();
    let selected_zone = query
        .into_inner()
        .zone
        .filter(|z| !z.trim().is_empty())
        .unwrap_or_else(|| ALL_ZONES.to_string());

    let list_source = source.clone();
    let list_state = LoadHandle::spawn(Table::SurveyData.name(), async move {
        survey::find_all(&list_source).await
    })
    .settle()
    .await;

    let error = list_state.error().map(str::to_string);
    let zone_list = ZoneList::from_records(list_state.into_loaded().unwrap_or_default());

    let mut displayed = zone_list.default_record.clone();
    let mut zone_error = None;
    if zone_list.needs_zone_load(&selected_zone) {
        let zone = selected_zone.clone();
        let zone_state = LoadHandle::spawn(Table::SurveyData.name(), async move {
            survey::find_by_zone(&source, &zone).await
        })
        .settle()
        .await;
        if matches!(zone_state, LoadState::Loaded(None)) {
            log::info!("No survey record for zone '{selected_zone}', keeping current view");
        }
        (displayed, zone_error) = apply_zone_load(displayed, zone_state);
    }

    let zones = zone_list
        .zones
        .iter()
        .map(|name| ZoneOption { name: name.clone(), selected: *name == selected_zone })
        .collect();

    let tmpl = SurveyTemplate {
        ctx: PageContext::build("/survey"),
        error,
        zone_error,
        zones,
        summary: displayed.as_ref().map(SurveySummary::from),
    };
    render(tmpl)
}
