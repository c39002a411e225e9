use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::RecordId;
use crate::models::format::parse_timestamp;

/// One row of `announcements`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Announcement {
    pub id: RecordId,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub description: Option<String>,
    pub date: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Announcement {
    pub fn kind(&self) -> Option<AnnouncementKind> {
        AnnouncementKind::parse(&self.kind)
    }

    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.date)
    }

    /// Badge text: the type with its first letter upper-cased.
    pub fn kind_label(&self) -> String {
        let mut chars = self.kind.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    pub fn icon(&self) -> &'static str {
        self.kind().map_or("bell", |k| k.icon())
    }

    pub fn badge_tone(&self) -> &'static str {
        self.kind().map_or("gray", |k| k.tone())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnouncementKind {
    Event,
    Notice,
    Obituary,
}

impl AnnouncementKind {
    pub const ALL: [AnnouncementKind; 3] =
        [AnnouncementKind::Event, AnnouncementKind::Notice, AnnouncementKind::Obituary];

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "event" => Some(AnnouncementKind::Event),
            "notice" => Some(AnnouncementKind::Notice),
            "obituary" => Some(AnnouncementKind::Obituary),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AnnouncementKind::Event => "event",
            AnnouncementKind::Notice => "notice",
            AnnouncementKind::Obituary => "obituary",
        }
    }

    /// Filter chip text.
    pub fn plural_label(&self) -> &'static str {
        match self {
            AnnouncementKind::Event => "Events",
            AnnouncementKind::Notice => "Notices",
            AnnouncementKind::Obituary => "Obituaries",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            AnnouncementKind::Event => "calendar",
            AnnouncementKind::Notice => "bell",
            AnnouncementKind::Obituary => "heart",
        }
    }

    pub fn tone(&self) -> &'static str {
        match self {
            AnnouncementKind::Event => "blue",
            AnnouncementKind::Notice => "yellow",
            AnnouncementKind::Obituary => "gray",
        }
    }
}

/// Category filter for the list. Anything unrecognised means `All`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnnouncementFilter {
    #[default]
    All,
    Only(AnnouncementKind),
}

impl AnnouncementFilter {
    pub fn from_param(raw: Option<&str>) -> Self {
        raw.and_then(AnnouncementKind::parse)
            .map_or(AnnouncementFilter::All, AnnouncementFilter::Only)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AnnouncementFilter::All => "all",
            AnnouncementFilter::Only(kind) => kind.as_str(),
        }
    }

    pub fn matches(&self, announcement: &Announcement) -> bool {
        match self {
            AnnouncementFilter::All => true,
            AnnouncementFilter::Only(kind) => announcement.kind == kind.as_str(),
        }
    }
}
