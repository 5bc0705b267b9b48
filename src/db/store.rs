//! SQLite-backed log store: `chore_log` is the primary log,
//! `flagged_log` the flagged one.

use crate::db::pool::DbPool;
use crate::db::queries::{insert_row_at, load_rows};
use crate::errors::AppResult;
use crate::models::{LogId, LogRow};
use crate::store::LogStore;

impl LogStore for DbPool {
    fn fetch_all(&mut self, log: LogId) -> AppResult<Vec<LogRow>> {
        load_rows(&self.conn, log)
    }

    fn insert_row(&mut self, log: LogId, row: &LogRow, at_position: usize) -> AppResult<()> {
        insert_row_at(&mut self.conn, log, row, at_position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::initialize::open_store;
    use crate::db::queries::count_rows;
    use crate::errors::AppError;

    fn row(ts: &str, who: &str) -> LogRow {
        LogRow::new(ts, "שני", who, "פינוי מדיח")
    }

    #[test]
    fn rows_come_back_newest_first() {
        let mut pool = open_store(":memory:").unwrap();
        for (i, ts) in ["2024-01-01 08:00:00", "2024-01-01 09:00:00", "2024-01-01 10:00:00"]
            .iter()
            .enumerate()
        {
            pool.insert_row(LogId::Primary, &row(ts, &format!("P{i}")), 2)
                .unwrap();
        }

        let rows = pool.fetch_all(LogId::Primary).unwrap();
        let ts: Vec<&str> = rows.iter().map(|r| r.timestamp.as_str()).collect();
        assert_eq!(
            ts,
            ["2024-01-01 10:00:00", "2024-01-01 09:00:00", "2024-01-01 08:00:00"]
        );
        assert_eq!(count_rows(&pool.conn, LogId::Flagged).unwrap(), 0);
    }

    #[test]
    fn insert_in_the_middle_shifts_rows_below() {
        let mut pool = open_store(":memory:").unwrap();
        pool.insert_row(LogId::Flagged, &row("a", "A"), 2).unwrap();
        pool.insert_row(LogId::Flagged, &row("b", "B"), 3).unwrap();
        pool.insert_row(LogId::Flagged, &row("c", "C"), 3).unwrap();
        // past the end appends
        pool.insert_row(LogId::Flagged, &row("d", "D"), 50).unwrap();

        let who: Vec<String> = pool
            .fetch_all(LogId::Flagged)
            .unwrap()
            .into_iter()
            .map(|r| r.performer)
            .collect();
        assert_eq!(who, ["A", "C", "B", "D"]);
    }

    #[test]
    fn header_row_cannot_be_overwritten() {
        let mut pool = open_store(":memory:").unwrap();
        let err = pool.insert_row(LogId::Primary, &row("a", "A"), 1);
        assert!(matches!(err, Err(AppError::InvalidPosition(_))));
        assert!(pool.fetch_all(LogId::Primary).unwrap().is_empty());
    }

    #[test]
    fn write_lock_wraps_read_and_write() {
        let mut pool = open_store(":memory:").unwrap();
        let inserted = pool
            .with_write_lock(|p| {
                let before = p.fetch_all(LogId::Primary).unwrap().len();
                p.insert_row(LogId::Primary, &row("a", "A"), 2).unwrap();
                before
            })
            .unwrap();

        assert_eq!(inserted, 0);
        assert_eq!(pool.fetch_all(LogId::Primary).unwrap().len(), 1);
    }

    #[test]
    fn concurrent_submitters_on_one_file_serialize() {
        use crate::config::Config;
        use crate::core::submit::{Session, SubmitLogic, SubmitOutcome};
        use chrono::NaiveDate;
        use std::sync::{Arc, Barrier};
        use std::thread;

        let path = std::env::temp_dir().join("chorelog_unit_concurrent_submit.sqlite");
        std::fs::remove_file(&path).ok();
        drop(open_store(&path).unwrap());

        let now = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        let barrier = Arc::new(Barrier::new(2));

        let handles: Vec<_> = (0..2)
            .map(|_| {
                let barrier = Arc::clone(&barrier);
                let path = path.clone();
                thread::spawn(move || {
                    let logic = SubmitLogic::from_config(&Config::default());
                    let mut pool = DbPool::new(&path).unwrap();
                    barrier.wait();
                    let (_, outcome) = pool
                        .with_write_lock(|p| {
                            logic.submit(Session::default(), p, "YAFA", "פינוי מדיח", now)
                        })
                        .unwrap();
                    (
                        outcome.is_accepted(),
                        matches!(outcome, SubmitOutcome::Duplicate { .. }),
                    )
                })
            })
            .collect();

        let results: Vec<(bool, bool)> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(results.iter().filter(|(accepted, _)| *accepted).count(), 1);
        assert_eq!(results.iter().filter(|(_, duplicate)| *duplicate).count(), 1);

        let mut pool = DbPool::new(&path).unwrap();
        assert_eq!(pool.fetch_all(LogId::Primary).unwrap().len(), 1);
        assert_eq!(pool.fetch_all(LogId::Flagged).unwrap().len(), 1);
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn failed_commit_leaves_no_open_transaction() {
        let mut pool = open_store(":memory:").unwrap();
        pool.conn
            .execute_batch(
                "PRAGMA foreign_keys = ON;
                 CREATE TABLE parent (id INTEGER PRIMARY KEY);
                 CREATE TABLE child (
                     parent_id INTEGER REFERENCES parent(id) DEFERRABLE INITIALLY DEFERRED
                 );",
            )
            .unwrap();

        // the dangling reference is only checked at COMMIT
        let res = pool.with_write_lock(|p| {
            p.conn
                .execute("INSERT INTO child (parent_id) VALUES (42)", [])
                .unwrap();
        });

        assert!(res.is_err());
        assert!(pool.conn.is_autocommit());
        let children: i64 = pool
            .conn
            .query_row("SELECT COUNT(*) FROM child", [], |r| r.get(0))
            .unwrap();
        assert_eq!(children, 0);

        // later writes land outside any leftover transaction
        pool.insert_row(LogId::Primary, &row("a", "A"), 2).unwrap();
        assert_eq!(pool.fetch_all(LogId::Primary).unwrap().len(), 1);
    }

    #[test]
    fn missing_tables_surface_as_errors() {
        let mut pool = DbPool::new(":memory:").unwrap();
        assert!(pool.fetch_all(LogId::Primary).is_err());
        assert!(pool.insert_row(LogId::Primary, &row("a", "A"), 2).is_err());
    }
}
