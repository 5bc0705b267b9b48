pub mod gate;
pub mod history;
pub mod leaderboard;
pub mod log;
pub mod submit;
