use actix_web::{web, HttpResponse};
use chrono::Utc;
use serde::Deserialize;

use crate::errors::{render, AppError};
use crate::models::announcement::{self, filter_announcements, upcoming_events, AnnouncementFilter};
use crate::resource::LoadHandle;
use crate::source::{DataSource, Table};
use crate::templates_structs::{AnnouncementCard, EventsTemplate, FilterChip, PageContext, UpcomingRow};

#[derive(Debug, Deserialize)]
pub struct EventsQuery {
    pub filter: Option<String>,
}

/// GET /events?filter=
/// The filter narrows the loaded list; the upcoming panel always looks at
/// the whole list.
pub async fn index(
    source: web::Data<DataSource>,
    query: web::Query<EventsQuery>,
) -> Result<HttpResponse, AppError> {
    let filter = AnnouncementFilter::from_param(query.filter.as_deref());

    let source = source.into_inner();
    let state = LoadHandle::spawn(Table::Announcements.name(), async move {
        announcement::find_all(&source).await
    })
    .settle()
    .await;

    let error = state.error().map(str::to_string);
    let announcements = state.into_loaded().unwrap_or_default();

    let upcoming = upcoming_events(&announcements, Utc::now())
        .into_iter()
        .map(UpcomingRow::from)
        .collect();
    let cards = filter_announcements(&announcements, filter)
        .into_iter()
        .map(AnnouncementCard::from)
        .collect();

    let tmpl = EventsTemplate {
        ctx: PageContext::build("/events"),
        error,
        upcoming,
        chips: FilterChip::row(filter),
        cards,
    };
    render(tmpl)
}
