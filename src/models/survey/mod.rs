pub mod education;
pub mod queries;
pub mod types;

pub use education::{education_breakdown, EducationBreakdown, EducationLevel};
pub use queries::*;
pub use types::*;

use crate::resource::LoadState;

/// Zone names from the list load plus the default ("All Zones") record.
#[derive(Debug, Clone, Default)]
pub struct ZoneList {
    pub zones: Vec<String>,
    pub default_record: Option<SurveyRecord>,
}

impl ZoneList {
    pub fn from_records(records: Vec<SurveyRecord>) -> Self {
        let zones = records.iter().map(|r| r.zone.clone()).collect();
        let default_record = records.into_iter().find(|r| r.zone == ALL_ZONES);
        Self { zones, default_record }
    }

    pub fn is_ready(&self) -> bool {
        !self.zones.is_empty()
    }

    /// The zone detail load waits for a non-empty zone list and is not
    /// needed for the default zone, which the list load already carried.
    pub fn needs_zone_load(&self, selected: &str) -> bool {
        self.is_ready() && selected != ALL_ZONES
    }
}

/// Fold the zone detail load into the displayed record. A found record
/// replaces it; no match keeps it; a failure keeps it and returns the message.
pub fn apply_zone_load(
    displayed: Option<SurveyRecord>,
    state: LoadState<Option<SurveyRecord>>,
) -> (Option<SurveyRecord>, Option<String>) {
    match state {
        LoadState::Loaded(Some(record)) => (Some(record), None),
        LoadState::Failed(message) => (displayed, Some(message)),
        LoadState::Loaded(None) | LoadState::Idle | LoadState::Loading => (displayed, None),
    }
}
