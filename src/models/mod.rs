pub mod log_id;
pub mod period;
pub mod row;

pub use log_id::LogId;
pub use period::Period;
pub use row::{HEADERS, LogRow};
