use crate::errors::{AppError, AppResult};
use crate::models::{LogId, LogRow};
use crate::store::FIRST_DATA_POSITION;
use rusqlite::{Connection, Result, Row, params};

pub fn map_row(row: &Row) -> Result<LogRow> {
    Ok(LogRow {
        timestamp: row.get("timestamp")?,
        weekday: row.get("weekday")?,
        performer: row.get("performer")?,
        chore: row.get("chore")?,
    })
}

/// All rows of `log`, top-down.
pub fn load_rows(conn: &Connection, log: LogId) -> AppResult<Vec<LogRow>> {
    let mut stmt = conn.prepare_cached(&format!(
        "SELECT timestamp, weekday, performer, chore FROM {}
         ORDER BY position ASC, id DESC",
        log.table()
    ))?;

    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn count_rows(conn: &Connection, log: LogId) -> AppResult<i64> {
    let n = conn.query_row(&format!("SELECT COUNT(*) FROM {}", log.table()), [], |r| {
        r.get(0)
    })?;
    Ok(n)
}

/// Insert `row` at `at_position`, moving every row at that position or below
/// one step down. Shift and insert happen inside one savepoint.
pub fn insert_row_at(
    conn: &mut Connection,
    log: LogId,
    row: &LogRow,
    at_position: usize,
) -> AppResult<()> {
    if at_position < FIRST_DATA_POSITION {
        return Err(AppError::InvalidPosition(format!(
            "{} (row 1 is the header)",
            at_position
        )));
    }

    let table = log.table();
    let sp = conn.savepoint()?;

    let next_free: i64 = sp.query_row(
        &format!("SELECT IFNULL(MAX(position), 1) + 1 FROM {table}"),
        [],
        |r| r.get(0),
    )?;
    let position = i64::try_from(at_position)
        .unwrap_or(i64::MAX)
        .min(next_free);

    sp.execute(
        &format!("UPDATE {table} SET position = position + 1 WHERE position >= ?1"),
        [position],
    )?;
    sp.execute(
        &format!(
            "INSERT INTO {table} (position, timestamp, weekday, performer, chore)
             VALUES (?1, ?2, ?3, ?4, ?5)"
        ),
        params![
            position,
            row.timestamp,
            row.weekday,
            row.performer,
            row.chore
        ],
    )?;

    sp.commit()?;
    Ok(())
}
