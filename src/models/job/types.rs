use serde::{Deserialize, Serialize};

use crate::models::RecordId;

pub const ACTIVE_STATUS: &str = "active";

/// One row of `jobs`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    pub id: RecordId,
    pub title: String,
    pub location: String,
    pub country: String,
    /// Free-form display text, e.g. "AED 2,500 / month".
    pub salary: String,
    pub contact: String,
    #[serde(default)]
    pub description: Option<String>,
    pub posted_date: String,
    pub status: String,
}

impl Job {
    pub fn contact_link(&self) -> String {
        whatsapp_link(&self.contact)
    }

    pub fn place(&self) -> String {
        format!("{}, {}", self.location, self.country)
    }
}

/// WhatsApp chat link for a contact string. Whitespace is removed; the rest
/// is used unchanged, so a malformed number yields a link that goes nowhere.
pub fn whatsapp_link(contact: &str) -> String {
    let clean: String = contact.chars().filter(|c| !c.is_whitespace()).collect();
    format!("https://wa.me/{clean}")
}
