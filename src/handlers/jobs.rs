use actix_web::{web, HttpResponse};

use crate::errors::{render, AppError};
use crate::models::job;
use crate::resource::LoadHandle;
use crate::source::{DataSource, Table};
use crate::templates_structs::{JobCard, JobsTemplate, PageContext};

/// GET /jobs
pub async fn index(source: web::Data<DataSource>) -> Result<HttpResponse, AppError> {
    let source = source.into_inner();
    let state = LoadHandle::spawn(Table::Jobs.name(), async move {
        job::find_active(&source).await
    })
    .settle()
    .await;

    let error = state.error().map(str::to_string);
    let jobs = state
        .into_loaded()
        .unwrap_or_default()
        .iter()
        .map(JobCard::from)
        .collect();

    let tmpl = JobsTemplate {
        ctx: PageContext::build("/jobs"),
        error,
        jobs,
    };
    render(tmpl)
}
