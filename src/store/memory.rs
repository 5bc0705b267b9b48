use super::{FIRST_DATA_POSITION, LogStore};
use crate::errors::{AppError, AppResult};
use crate::models::{LogId, LogRow};

/// In-memory log store.
///
/// The `fail_*` switches make the matching operation return an error, which
/// is how the fail-open and write-failure paths are exercised.
#[derive(Debug, Default, Clone)]
pub struct MemoryLogStore {
    primary: Vec<LogRow>,
    flagged: Vec<LogRow>,
    pub fail_reads: bool,
    pub fail_primary_writes: bool,
    pub fail_flagged_writes: bool,
}

impl MemoryLogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store whose primary log already holds `rows`, top-down.
    pub fn with_primary(rows: Vec<LogRow>) -> Self {
        Self {
            primary: rows,
            ..Self::default()
        }
    }

    /// Rows of `log` regardless of the failure switches.
    pub fn rows(&self, log: LogId) -> &[LogRow] {
        match log {
            LogId::Primary => &self.primary,
            LogId::Flagged => &self.flagged,
        }
    }

    fn rows_mut(&mut self, log: LogId) -> &mut Vec<LogRow> {
        match log {
            LogId::Primary => &mut self.primary,
            LogId::Flagged => &mut self.flagged,
        }
    }
}

impl LogStore for MemoryLogStore {
    fn fetch_all(&mut self, log: LogId) -> AppResult<Vec<LogRow>> {
        if self.fail_reads {
            return Err(AppError::Other(format!("{} log unreachable", log.label())));
        }
        Ok(self.rows(log).to_vec())
    }

    fn insert_row(&mut self, log: LogId, row: &LogRow, at_position: usize) -> AppResult<()> {
        let failing = match log {
            LogId::Primary => self.fail_primary_writes,
            LogId::Flagged => self.fail_flagged_writes,
        };
        if failing {
            return Err(AppError::Other(format!("{} log rejected the write", log.label())));
        }
        if at_position < FIRST_DATA_POSITION {
            return Err(AppError::InvalidPosition(at_position.to_string()));
        }

        let rows = self.rows_mut(log);
        let idx = (at_position - FIRST_DATA_POSITION).min(rows.len());
        rows.insert(idx, row.clone());
        Ok(())
    }
}
