use askama::Template;

use super::PageContext;
use crate::models::format::{plain_number, rupees};
use crate::models::survey::{education_breakdown, EducationBreakdown, SurveyRecord};

#[derive(Template)]
#[template(path = "survey.html")]
pub struct SurveyTemplate {
    pub ctx: PageContext,
    pub error: Option<String>,
    /// Zone detail failed while the zone list itself loaded.
    pub zone_error: Option<String>,
    pub zones: Vec<ZoneOption>,
    pub summary: Option<SurveySummary>,
}

pub struct ZoneOption {
    pub name: String,
    pub selected: bool,
}

pub struct SurveySummary {
    pub zone: String,
    pub total_households: String,
    pub unemployed: String,
    pub poverty: String,
    pub average_income: String,
    pub education: EducationBreakdown,
}

impl From<&SurveyRecord> for SurveySummary {
    fn from(record: &SurveyRecord) -> Self {
        Self {
            zone: record.zone.clone(),
            total_households: record.total_households.to_string(),
            unemployed: plain_number(record.unemployed_percentage),
            poverty: plain_number(record.poverty_percentage),
            average_income: rupees(record.average_income),
            education: education_breakdown(&record.education_counts()),
        }
    }
}
