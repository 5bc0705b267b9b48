//! Time utilities: fixed timestamp format, zone-aware "now", weekday labels.

use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate, NaiveDateTime, Utc};
use chrono_tz::Tz;

/// Storage format of every timestamp in both logs.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Storage format of the date part.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Width of the date part at the start of a timestamp (`YYYY-MM-DD`).
pub const DATE_PREFIX_LEN: usize = 10;

/// Resolve an IANA zone name such as `Asia/Jerusalem`.
pub fn parse_zone(name: &str) -> AppResult<Tz> {
    name.parse::<Tz>()
        .map_err(|_| AppError::Config(format!("Unknown timezone '{}'", name)))
}

/// Current wall-clock time in the given zone, without zone information.
pub fn now_in_zone(name: &str) -> AppResult<NaiveDateTime> {
    let tz = parse_zone(name)?;
    Ok(Utc::now().with_timezone(&tz).naive_local())
}

pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT).ok()
}

/// Label for the weekday of `date`, indexed Sunday = 0.
///
/// Falls back to the English weekday name when `labels` has no entry for it.
pub fn weekday_label(date: NaiveDate, labels: &[String]) -> String {
    let idx = date.weekday().num_days_from_sunday() as usize;
    labels
        .get(idx)
        .cloned()
        .unwrap_or_else(|| date.format("%A").to_string())
}
