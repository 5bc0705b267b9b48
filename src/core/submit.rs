//! Submission workflow: validate, check for a same-day claim, record.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::{LogId, LogRow};
use crate::store::{FIRST_DATA_POSITION, LogStore};
use crate::ui::messages::warning;
use crate::utils::time::{DATE_FORMAT, DATE_PREFIX_LEN};
use chrono::NaiveDateTime;

/// Per-session guard against re-entrant double submission.
///
/// Passed into [`SubmitLogic::submit`] and handed back with the outcome.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Session {
    pub in_flight: bool,
}

/// Terminal result of one submission attempt.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Written to the primary log.
    Accepted(LogRow),
    /// Same performer, chore and day already logged. `flagged` tells whether
    /// the attempt made it into the flagged log.
    Duplicate { attempt: LogRow, flagged: bool },
    /// The primary write failed; nothing was recorded.
    WriteFailed { attempt: LogRow, error: AppError },
    /// Input rejected before any store access.
    Rejected(AppError),
    /// The session already has a submission outstanding.
    Busy,
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted(_))
    }

    /// Map the outcome to the CLI's success/error convention.
    pub fn into_result(self) -> AppResult<LogRow> {
        match self {
            SubmitOutcome::Accepted(row) => Ok(row),
            SubmitOutcome::Duplicate { attempt, .. } => Err(AppError::DuplicateClaim {
                performer: attempt.performer,
                chore: attempt.chore,
            }),
            SubmitOutcome::WriteFailed { error, .. } => Err(AppError::WriteFailed(error.to_string())),
            SubmitOutcome::Rejected(e) => Err(e),
            SubmitOutcome::Busy => Err(AppError::SubmissionInFlight),
        }
    }
}

/// Closed sets of names and chores a submission is checked against.
#[derive(Debug, Clone)]
pub struct Roster {
    pub performers: Vec<String>,
    pub chores: Vec<String>,
    pub test_performer: Option<String>,
    pub placeholder: Option<String>,
}

impl Roster {
    pub fn from_config(cfg: &Config) -> Self {
        Self {
            performers: cfg.performers.clone(),
            chores: cfg.chores.clone(),
            test_performer: cfg.test_performer.clone(),
            placeholder: cfg.placeholder.clone(),
        }
    }

    pub fn is_test_performer(&self, name: &str) -> bool {
        self.test_performer.as_deref() == Some(name)
    }

    /// Exact-match validation; no trimming or case-folding.
    pub fn validate(&self, performer: &str, chore: &str) -> AppResult<()> {
        if performer.is_empty() || self.placeholder.as_deref() == Some(performer) {
            return Err(AppError::PlaceholderPerformer);
        }
        if !self.is_test_performer(performer) && !self.performers.iter().any(|p| p == performer)
        {
            return Err(AppError::InvalidPerformer(performer.to_string()));
        }
        if !self.chores.iter().any(|c| c == chore) {
            return Err(AppError::InvalidChore(chore.to_string()));
        }
        Ok(())
    }
}

/// True when `row` records `performer` doing `chore` on `today`
/// (`YYYY-MM-DD`). The date is the first 10 characters of the stored
/// timestamp, compared as a string.
pub fn is_same_day_claim(row: &LogRow, performer: &str, chore: &str, today: &str) -> bool {
    row.performer == performer
        && row.chore == chore
        && row.timestamp.chars().take(DATE_PREFIX_LEN).eq(today.chars())
}

pub fn already_claimed(rows: &[LogRow], performer: &str, chore: &str, today: &str) -> bool {
    rows.iter()
        .any(|r| is_same_day_claim(r, performer, chore, today))
}

/// Read a whole log, degrading any failure to an empty table.
pub fn fetch_or_empty<S: LogStore + ?Sized>(store: &mut S, log: LogId) -> Vec<LogRow> {
    match store.fetch_all(log) {
        Ok(rows) => rows,
        Err(e) => {
            warning(format!(
                "Could not read the {} log, continuing without it: {}",
                log.label(),
                e
            ));
            Vec::new()
        }
    }
}

pub struct SubmitLogic {
    roster: Roster,
    weekday_labels: Vec<String>,
}

impl SubmitLogic {
    pub fn new(roster: Roster, weekday_labels: Vec<String>) -> Self {
        Self {
            roster,
            weekday_labels,
        }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(Roster::from_config(cfg), cfg.weekday_labels.clone())
    }

    /// Run one submission attempt.
    ///
    /// `now` is the local wall-clock time in the household's zone. The
    /// returned session always has `in_flight == false`, except for `Busy`
    /// where the caller's session is handed back untouched.
    pub fn submit<S: LogStore + ?Sized>(
        &self,
        session: Session,
        store: &mut S,
        performer: &str,
        chore: &str,
        now: NaiveDateTime,
    ) -> (Session, SubmitOutcome) {
        if session.in_flight {
            return (session, SubmitOutcome::Busy);
        }

        let idle = Session { in_flight: false };

        if let Err(e) = self.roster.validate(performer, chore) {
            return (idle, SubmitOutcome::Rejected(e));
        }

        let attempt = LogRow::stamp(now, &self.weekday_labels, performer, chore);
        let today = now.format(DATE_FORMAT).to_string();

        let duplicate = !self.roster.is_test_performer(performer) && {
            let rows = fetch_or_empty(store, LogId::Primary);
            already_claimed(&rows, performer, chore, &today)
        };

        let outcome = if duplicate {
            let flagged = store
                .insert_row(LogId::Flagged, &attempt, FIRST_DATA_POSITION)
                .is_ok();
            SubmitOutcome::Duplicate { attempt, flagged }
        } else {
            match store.insert_row(LogId::Primary, &attempt, FIRST_DATA_POSITION) {
                Ok(()) => SubmitOutcome::Accepted(attempt),
                Err(error) => SubmitOutcome::WriteFailed { attempt, error },
            }
        };

        (idle, outcome)
    }
}
