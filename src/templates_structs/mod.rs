// Template context structures for Askama templates, one module per page.
// All types are re-exported: `use mahallu_connect::templates_structs::*`

use crate::models::nav::{self, NavTab};

pub const APP_NAME: &str = "Mahallu Connect";

/// Frame shared by every page: the title bar and the bottom tabs.
/// Templates access these as `ctx.app_name`, `ctx.tabs`.
pub struct PageContext {
    pub app_name: &'static str,
    pub current_path: String,
    pub tabs: Vec<NavTab>,
}

impl PageContext {
    pub fn build(current_path: &str) -> Self {
        Self {
            app_name: APP_NAME,
            current_path: current_path.to_string(),
            tabs: nav::tabs(current_path),
        }
    }
}

mod common;
mod dashboard;
mod events;
mod jobs;
mod reports;
mod survey;

pub use self::common::NotFoundTemplate;
pub use self::dashboard::DashboardTemplate;
pub use self::events::{AnnouncementCard, EventsTemplate, FilterChip, UpcomingRow};
pub use self::jobs::{JobCard, JobsTemplate};
pub use self::reports::{CategoryBar, EntryRow, ReportsTemplate, YearRow};
pub use self::survey::{SurveySummary, SurveyTemplate, ZoneOption};
