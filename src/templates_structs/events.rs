use askama::Template;

use super::PageContext;
use crate::models::announcement::{Announcement, AnnouncementFilter, AnnouncementKind};
use crate::models::format::display_date;

#[derive(Template)]
#[template(path = "events.html")]
pub struct EventsTemplate {
    pub ctx: PageContext,
    pub error: Option<String>,
    pub upcoming: Vec<UpcomingRow>,
    pub chips: Vec<FilterChip>,
    pub cards: Vec<AnnouncementCard>,
}

pub struct UpcomingRow {
    pub title: String,
    pub date: String,
}

pub struct FilterChip {
    pub label: &'static str,
    pub href: String,
    pub tone: &'static str,
    pub active: bool,
}

pub struct AnnouncementCard {
    pub title: String,
    pub kind_label: String,
    pub icon: &'static str,
    pub tone: &'static str,
    pub description: Option<String>,
    pub date: String,
    pub location: Option<String>,
}

impl FilterChip {
    /// All, Events, Notices, Obituaries, with the current one marked.
    pub fn row(current: AnnouncementFilter) -> Vec<Self> {
        let mut chips = vec![FilterChip {
            label: "All",
            href: "/events".to_string(),
            tone: "teal",
            active: current == AnnouncementFilter::All,
        }];
        chips.extend(AnnouncementKind::ALL.iter().map(|kind| FilterChip {
            label: kind.plural_label(),
            href: format!("/events?filter={}", kind.as_str()),
            tone: kind.tone(),
            active: current == AnnouncementFilter::Only(*kind),
        }));
        chips
    }
}

impl From<&Announcement> for UpcomingRow {
    fn from(a: &Announcement) -> Self {
        Self { title: a.title.clone(), date: display_date(&a.date) }
    }
}

impl From<&Announcement> for AnnouncementCard {
    fn from(a: &Announcement) -> Self {
        Self {
            title: a.title.clone(),
            kind_label: a.kind_label(),
            icon: a.icon(),
            tone: a.badge_tone(),
            description: a.description.clone().filter(|d| !d.is_empty()),
            date: display_date(&a.date),
            location: a.location.clone().filter(|l| !l.is_empty()),
        }
    }
}
