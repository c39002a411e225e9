use actix_web::HttpResponse;

use crate::errors::{render, AppError};
use crate::models::dashboard::CARDS;
use crate::templates_structs::{DashboardTemplate, PageContext};

/// GET /
/// Static shortcut cards; reads nothing.
pub async fn index() -> Result<HttpResponse, AppError> {
    let tmpl = DashboardTemplate {
        ctx: PageContext::build("/"),
        cards: &CARDS,
    };
    render(tmpl)
}
