//! SQLite connection wrapper (lightweight for CLI usage).

use crate::errors::AppResult;
use rusqlite::Connection;
use std::path::Path;
use std::time::Duration;

/// How long a command waits for another process holding the write lock.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    pub fn new<P: AsRef<Path>>(path: P) -> AppResult<Self> {
        let conn = Connection::open(path)?;
        conn.busy_timeout(BUSY_TIMEOUT)?;
        Ok(Self { conn })
    }

    /// Run `func` while holding SQLite's write lock.
    ///
    /// Another process running the same read-check-write sequence waits
    /// until this one commits, so both cannot pass the duplicate check.
    /// A failed `COMMIT` is rolled back, so the connection never stays
    /// inside a dead transaction.
    pub fn with_write_lock<F, T>(&mut self, func: F) -> AppResult<T>
    where
        F: FnOnce(&mut DbPool) -> T,
    {
        self.conn.execute_batch("BEGIN IMMEDIATE")?;
        let out = func(self);
        if let Err(e) = self.conn.execute_batch("COMMIT") {
            if !self.conn.is_autocommit() {
                self.conn.execute_batch("ROLLBACK").ok();
            }
            return Err(e.into());
        }
        Ok(out)
    }
}
