use clap::ValueEnum;

/// Time window used by the leaderboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Period {
    /// Everything in the log
    All,
    /// Last 3 days
    #[value(name = "3d")]
    ThreeDays,
    /// Last 7 days
    Week,
    /// Last 30 days
    Month,
}

impl Period {
    /// Length of the window in days, `None` for `All`.
    pub fn days(&self) -> Option<i64> {
        match self {
            Period::All => None,
            Period::ThreeDays => Some(3),
            Period::Week => Some(7),
            Period::Month => Some(30),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Period::All => "all time",
            Period::ThreeDays => "last 3 days",
            Period::Week => "last week",
            Period::Month => "last month",
        }
    }
}
