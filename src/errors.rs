//! Unified application error type.
//! Every module (db, store, core, cli, export) returns AppError so that the
//! CLI has a single place where failures are reported.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Parsing / validation
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid row position: {0}")]
    InvalidPosition(String),

    #[error("Unknown performer '{0}'")]
    InvalidPerformer(String),

    #[error("Please pick who did the chore")]
    PlaceholderPerformer,

    #[error("Unknown chore '{0}'")]
    InvalidChore(String),

    // ---------------------------
    // Submission outcomes
    // ---------------------------
    #[error("{performer} already logged '{chore}' today")]
    DuplicateClaim { performer: String, chore: String },

    #[error("Failed to save the entry: {0}")]
    WriteFailed(String),

    #[error("A submission is already in progress")]
    SubmissionInFlight,

    #[error("Access denied: wrong password")]
    AccessDenied,

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
