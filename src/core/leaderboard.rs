use crate::models::{LogRow, Period};
use crate::utils::colors::{bar_color, paint};
use crate::utils::table::pad_right;
use crate::utils::time::parse_timestamp;
use chrono::{Duration, NaiveDateTime};
use std::collections::HashMap;
use unicode_width::UnicodeWidthStr;

/// Widest bar, in characters.
const BAR_WIDTH: usize = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Standing {
    pub performer: String,
    pub count: usize,
}

pub struct LeaderboardLogic;

impl LeaderboardLogic {
    /// Count entries of `chore` per performer within `period` ending at `now`.
    ///
    /// Bounded periods only keep rows whose timestamp parses; the full log
    /// keeps everything. Sorted by count, then name.
    pub fn rank(rows: &[LogRow], chore: &str, period: Period, now: NaiveDateTime) -> Vec<Standing> {
        let cutoff = period.days().map(|d| now - Duration::days(d));

        let mut counts: HashMap<&str, usize> = HashMap::new();
        for row in rows.iter().filter(|r| r.chore == chore) {
            if let Some(cutoff) = cutoff {
                match parse_timestamp(&row.timestamp) {
                    Some(ts) if ts >= cutoff => {}
                    _ => continue,
                }
            }
            *counts.entry(row.performer.as_str()).or_default() += 1;
        }

        let mut standings: Vec<Standing> = counts
            .into_iter()
            .map(|(performer, count)| Standing {
                performer: performer.to_string(),
                count,
            })
            .collect();
        standings.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.performer.cmp(&b.performer)));
        standings
    }

    /// Horizontal bar chart, one line per performer.
    pub fn render(standings: &[Standing]) -> String {
        let name_w = standings
            .iter()
            .map(|s| s.performer.width())
            .max()
            .unwrap_or(0);
        let top = standings.iter().map(|s| s.count).max().unwrap_or(0).max(1);

        let mut out = String::new();
        for (rank, s) in standings.iter().enumerate() {
            let len = (s.count * BAR_WIDTH).div_ceil(top).max(1);
            out.push_str(&format!(
                "{} {} {}\n",
                pad_right(&s.performer, name_w),
                paint(bar_color(rank), &"█".repeat(len)),
                s.count
            ));
        }
        out
    }
}
