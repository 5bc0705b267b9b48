//! Versioned schema migrations. Each step records itself in the `log` table
//! as `migration_applied`, so running them again is a no-op.

use crate::models::LogId;
use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists. It tracks migrations, so it is
/// created before anything else.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

fn create_log_tables(conn: &Connection) -> Result<()> {
    for log in [LogId::Primary, LogId::Flagged] {
        conn.execute_batch(&format!(
            r#"
            CREATE TABLE IF NOT EXISTS {table} (
                id         INTEGER PRIMARY KEY AUTOINCREMENT,
                position   INTEGER NOT NULL,
                timestamp  TEXT NOT NULL,
                weekday    TEXT NOT NULL,
                performer  TEXT NOT NULL,
                chore      TEXT NOT NULL
            );
            "#,
            table = log.table()
        ))?;
    }
    Ok(())
}

fn create_lookup_indexes(conn: &Connection) -> Result<()> {
    for log in [LogId::Primary, LogId::Flagged] {
        conn.execute_batch(&format!(
            r#"
            CREATE INDEX IF NOT EXISTS idx_{table}_position ON {table}(position);
            CREATE INDEX IF NOT EXISTS idx_{table}_claim ON {table}(performer, chore);
            "#,
            table = log.table()
        ))?;
    }
    Ok(())
}

type Step = (&'static str, &'static str, fn(&Connection) -> Result<()>);

const STEPS: [Step; 2] = [
    (
        "20240101_0001_create_logs",
        "Created chore_log and flagged_log tables",
        create_log_tables,
    ),
    (
        "20240101_0002_lookup_indexes",
        "Added position and claim indexes",
        create_lookup_indexes,
    ),
];

/// Public entry point: run all pending migrations.
///
/// Invoked by db::initialize::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;

    for (version, message, step) in STEPS {
        if is_applied(conn, version)? {
            continue;
        }
        step(conn)?;
        mark_applied(conn, version, message)?;
        success(format!("Migration applied: {} → {}", version, message));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn migrations_run_once() {
        let conn = Connection::open_in_memory().unwrap();
        run_pending_migrations(&conn).unwrap();
        run_pending_migrations(&conn).unwrap();

        let applied: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM log WHERE operation = 'migration_applied'",
                [],
                |r| r.get(0),
            )
            .unwrap();
        assert_eq!(applied, STEPS.len() as i64);

        for log in [LogId::Primary, LogId::Flagged] {
            let n: i64 = conn
                .query_row(&format!("SELECT COUNT(*) FROM {}", log.table()), [], |r| {
                    r.get(0)
                })
                .unwrap();
            assert_eq!(n, 0);
        }
    }
}
