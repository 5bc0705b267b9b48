use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::submit::{Session, SubmitLogic, SubmitOutcome};
use crate::db::log::audit_quietly;
use crate::db::open_store;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{error, success, warning};
use crate::utils::time::{now_in_zone, parse_timestamp};

/// Log a finished chore.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Submit {
        chore,
        name,
        dev,
        at,
    } = cmd
    {
        //
        // 1. Resolve who is submitting
        //
        let performer = if *dev {
            cfg.developer_identity.clone().ok_or_else(|| {
                AppError::Config("--dev needs `developer_identity` in the configuration".into())
            })?
        } else {
            name.clone().unwrap_or_default()
        };

        //
        // 2. Local wall-clock time in the household zone
        //
        let now = match at {
            Some(s) => parse_timestamp(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
            None => now_in_zone(&cfg.timezone)?,
        };

        //
        // 3. Read-check-write under the store's write lock
        //
        let logic = SubmitLogic::from_config(cfg);
        let mut pool = open_store(cfg.database_path())?;
        let (_session, outcome) = pool.with_write_lock(|p| {
            logic.submit(Session::default(), p, &performer, chore, now)
        })?;

        //
        // 4. Report + internal log (non-blocking)
        //
        match &outcome {
            SubmitOutcome::Accepted(row) => {
                audit_quietly(
                    &pool.conn,
                    "submit",
                    &row.performer,
                    &format!("{} at {}", row.chore, row.timestamp),
                );
                success(format!(
                    "Well done {} on: {}! Saved.",
                    row.performer, row.chore
                ));
            }
            SubmitOutcome::Duplicate { attempt, flagged } => {
                audit_quietly(
                    &pool.conn,
                    "flagged",
                    &attempt.performer,
                    &format!("repeat claim of {} at {}", attempt.chore, attempt.timestamp),
                );
                error(format!(
                    "{} already reported '{}' today. Nice try 🤦",
                    attempt.performer, attempt.chore
                ));
                if !flagged {
                    warning("The repeat claim could not be added to the flagged list.");
                }
            }
            SubmitOutcome::WriteFailed { attempt, error: e } => {
                audit_quietly(
                    &pool.conn,
                    "submit_failed",
                    &attempt.performer,
                    &format!("{}: {}", attempt.chore, e),
                );
                error("Saving failed, please submit again.");
            }
            SubmitOutcome::Rejected(_) | SubmitOutcome::Busy => {}
        }

        outcome.into_result()?;
    }

    Ok(())
}
