pub mod dashboard;
pub mod events;
pub mod jobs;
pub mod reports;
pub mod survey;

use actix_web::{http::StatusCode, web, HttpRequest, HttpResponse};
use askama::Template;

use crate::errors::AppError;
use crate::templates_structs::{NotFoundTemplate, PageContext};

/// Configure the five page routes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(dashboard::index))
        .route("/reports", web::get().to(reports::index))
        .route("/survey", web::get().to(survey::index))
        .route("/jobs", web::get().to(jobs::index))
        .route("/events", web::get().to(events::index));
}

/// Default service: 404 inside the navigation frame.
pub async fn not_found(req: HttpRequest) -> Result<HttpResponse, AppError> {
    let tmpl = NotFoundTemplate { ctx: PageContext::build(req.path()) };
    let html = tmpl.render()?;
    Ok(HttpResponse::build(StatusCode::NOT_FOUND)
        .content_type("text/html; charset=utf-8")
        .body(html))
}
