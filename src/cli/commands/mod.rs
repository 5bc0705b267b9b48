pub mod config;
pub mod export;
pub mod flagged;
pub mod history;
pub mod init;
pub mod leaderboard;
pub mod log;
pub mod submit;
