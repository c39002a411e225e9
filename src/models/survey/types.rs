use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::models::RecordId;

/// Reserved pseudo-zone holding the community-wide figures.
pub const ALL_ZONES: &str = "All Zones";

/// One row of `survey_data`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveyRecord {
    pub id: RecordId,
    pub zone: String,
    pub total_households: i64,
    pub unemployed_percentage: f64,
    pub poverty_percentage: f64,
    pub average_income: f64,
    /// Education level label → household count, in source order.
    #[serde(default)]
    pub education_distribution: Option<Map<String, Value>>,
}

impl SurveyRecord {
    /// Raw counts per level. Non-numeric counts read as 0.
    pub fn education_counts(&self) -> Vec<(String, f64)> {
        self.education_distribution
            .iter()
            .flatten()
            .map(|(level, count)| (level.clone(), count.as_f64().unwrap_or(0.0)))
            .collect()
    }
}
