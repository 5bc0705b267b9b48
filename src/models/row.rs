//! Fixed 4-column row shared by the primary and the flagged log.

use crate::utils::time::{DATE_PREFIX_LEN, TIMESTAMP_FORMAT, weekday_label};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Column headers, in storage order.
pub const HEADERS: [&str; 4] = ["timestamp", "day", "name", "chore"];

/// One entry of a chore log.
///
/// The same shape is used for a fresh submission, an accepted entry and a
/// flagged claim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogRow {
    /// `YYYY-MM-DD HH:MM:SS` in the configured zone.
    pub timestamp: String,
    pub weekday: String,
    pub performer: String,
    pub chore: String,
}

impl LogRow {
    pub fn new(timestamp: &str, weekday: &str, performer: &str, chore: &str) -> Self {
        Self {
            timestamp: timestamp.to_string(),
            weekday: weekday.to_string(),
            performer: performer.to_string(),
            chore: chore.to_string(),
        }
    }

    /// Stamp a new submission with the local wall-clock time.
    pub fn stamp(now: NaiveDateTime, labels: &[String], performer: &str, chore: &str) -> Self {
        Self {
            timestamp: now.format(TIMESTAMP_FORMAT).to_string(),
            weekday: weekday_label(now.date(), labels),
            performer: performer.to_string(),
            chore: chore.to_string(),
        }
    }

    /// First 10 characters of the timestamp, i.e. the `YYYY-MM-DD` part.
    ///
    /// Shorter timestamps are returned whole, so they never match a full date.
    pub fn date_prefix(&self) -> String {
        self.timestamp.chars().take(DATE_PREFIX_LEN).collect()
    }

    pub fn to_record(&self) -> [&str; 4] {
        [
            self.timestamp.as_str(),
            self.weekday.as_str(),
            self.performer.as_str(),
            self.chore.as_str(),
        ]
    }
}
