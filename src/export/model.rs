// src/export/model.rs

use crate::models::LogRow;
use serde::Serialize;

/// Flat export record. Field names double as the CSV header.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct EntryExport {
    pub timestamp: String,
    pub day: String,
    pub name: String,
    pub chore: String,
}

impl From<&LogRow> for EntryExport {
    fn from(r: &LogRow) -> Self {
        Self {
            timestamp: r.timestamp.clone(),
            day: r.weekday.clone(),
            name: r.performer.clone(),
            chore: r.chore.clone(),
        }
    }
}
