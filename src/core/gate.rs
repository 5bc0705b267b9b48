use crate::config::Config;
use crate::errors::{AppError, AppResult};

/// Optional shared household password.
pub struct AccessGate;

impl AccessGate {
    /// Without a configured password everything is allowed; otherwise the
    /// supplied one must match exactly.
    pub fn check(cfg: &Config, supplied: Option<&str>) -> AppResult<()> {
        match cfg.password.as_deref() {
            None => Ok(()),
            Some(expected) if supplied == Some(expected) => Ok(()),
            Some(_) => Err(AppError::AccessDenied),
        }
    }
}
