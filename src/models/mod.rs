use std::fmt;

use serde::{Deserialize, Serialize};

pub mod announcement;
pub mod dashboard;
pub mod financial;
pub mod format;
pub mod job;
pub mod nav;
pub mod survey;

/// Source-provided row identity (uuid text or integer key).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Number(n) => write!(f, "{n}"),
            RecordId::Text(s) => f.write_str(s),
        }
    }
}
