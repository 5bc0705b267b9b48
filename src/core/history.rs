use crate::models::{HEADERS, LogRow};
use crate::utils::table::Table;

pub struct HistoryLogic;

impl HistoryLogic {
    /// The newest `limit` entries, in log order (the log is already newest-first).
    pub fn latest(rows: &[LogRow], limit: usize) -> &[LogRow] {
        &rows[..limit.min(rows.len())]
    }

    pub fn render(rows: &[LogRow]) -> String {
        let mut table = Table::new(&HEADERS);
        for r in rows {
            table.add_row(&r.to_record());
        }
        table.render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latest_takes_from_the_top() {
        let rows: Vec<LogRow> = (0..15)
            .map(|i| LogRow::new(&format!("2024-01-{:02} 09:00:00", 15 - i), "", "YAFA", "x"))
            .collect();

        let top = HistoryLogic::latest(&rows, 10);
        assert_eq!(top.len(), 10);
        assert_eq!(top[0].timestamp, "2024-01-15 09:00:00");
        assert_eq!(HistoryLogic::latest(&rows[..3], 10).len(), 3);
    }

    #[test]
    fn render_has_header_and_one_line_per_row() {
        let rows = vec![LogRow::new("2024-01-01 09:00:00", "שני", "YAFA", "פינוי מדיח")];
        let out = HistoryLogic::render(&rows);

        assert!(out.starts_with("timestamp"));
        assert_eq!(out.lines().count(), 3);
        assert!(out.contains("YAFA"));
    }
}
