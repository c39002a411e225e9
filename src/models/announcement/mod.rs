pub mod queries;
pub mod types;

pub use queries::*;
pub use types::*;

use chrono::{DateTime, Utc};

pub const UPCOMING_LIMIT: usize = 3;

/// Events dated at or after `now`, first three in list order.
///
/// The list arrives latest-first, so these are the three furthest-out
/// events rather than the three soonest.
pub fn upcoming_events(announcements: &[Announcement], now: DateTime<Utc>) -> Vec<&Announcement> {
    announcements
        .iter()
        .filter(|a| a.kind() == Some(AnnouncementKind::Event))
        .filter(|a| a.timestamp().is_some_and(|ts| ts >= now))
        .take(UPCOMING_LIMIT)
        .collect()
}

/// Client-side category filter over an already loaded list.
pub fn filter_announcements(
    announcements: &[Announcement],
    filter: AnnouncementFilter,
) -> Vec<&Announcement> {
    announcements.iter().filter(|a| filter.matches(a)).collect()
}
