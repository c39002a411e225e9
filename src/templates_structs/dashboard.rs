use askama::Template;

use super::PageContext;
use crate::models::dashboard::DashboardCard;

#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub ctx: PageContext,
    pub cards: &'static [DashboardCard],
}
