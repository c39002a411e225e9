use askama::Template;

use super::PageContext;
use crate::models::format::display_date;
use crate::models::job::Job;

#[derive(Template)]
#[template(path = "jobs.html")]
pub struct JobsTemplate {
    pub ctx: PageContext,
    pub error: Option<String>,
    pub jobs: Vec<JobCard>,
}

pub struct JobCard {
    pub title: String,
    pub place: String,
    pub salary: String,
    pub description: Option<String>,
    pub posted: String,
    pub contact_link: String,
}

impl From<&Job> for JobCard {
    fn from(job: &Job) -> Self {
        Self {
            title: job.title.clone(),
            place: job.place(),
            salary: job.salary.clone(),
            description: job.description.clone().filter(|d| !d.is_empty()),
            posted: display_date(&job.posted_date),
            contact_link: job.contact_link(),
        }
    }
}
