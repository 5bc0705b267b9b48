
/// The two logical logs kept by chorelog.
///
/// `Primary` holds accepted submissions, `Flagged` holds duplicate-claim
/// attempts. Both share the same row shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogId {
    Primary,
    Flagged,
}

impl LogId {
    /// SQLite table backing the log.
    pub fn table(&self) -> &'static str {
        match self {
            LogId::Primary => "chore_log",
            LogId::Flagged => "flagged_log",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LogId::Primary => "primary",
            LogId::Flagged => "flagged",
        }
    }
}
