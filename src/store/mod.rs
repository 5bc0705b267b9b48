//! Log store adapter: the two operations the submission workflow needs from
//! whatever keeps the chore logs.

mod memory;

pub use memory::MemoryLogStore;

use crate::errors::AppResult;
use crate::models::{LogId, LogRow};

/// Position of the first data row: row 1 is the header.
pub const FIRST_DATA_POSITION: usize = 2;

/// Tabular, append-only storage for the primary and the flagged log.
pub trait LogStore {
    /// All data rows of `log`, top-down, header excluded.
    fn fetch_all(&mut self, log: LogId) -> AppResult<Vec<LogRow>>;

    /// Insert `row` at the 1-based `at_position`, shifting later rows down.
    ///
    /// Positions below [`FIRST_DATA_POSITION`] are rejected; positions past
    /// the end append.
    fn insert_row(&mut self, log: LogId, row: &LogRow, at_position: usize) -> AppResult<()>;
}
