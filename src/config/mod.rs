use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Household configuration: who can log, what can be logged, where it is stored.
///
/// Every field has a default so partial config files stay valid.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    /// IANA zone used to stamp submissions.
    #[serde(default = "default_timezone")]
    pub timezone: String,
    #[serde(default = "default_performers")]
    pub performers: Vec<String>,
    #[serde(default = "default_chores")]
    pub chores: Vec<String>,
    /// Name that bypasses duplicate detection, for connectivity checks.
    #[serde(default = "default_test_performer")]
    pub test_performer: Option<String>,
    /// "Nobody selected" value, always rejected.
    #[serde(default = "default_placeholder")]
    pub placeholder: Option<String>,
    /// Sunday-first weekday labels written into every row.
    #[serde(default = "default_weekday_labels")]
    pub weekday_labels: Vec<String>,
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub developer_identity: Option<String>,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_timezone() -> String {
    "Asia/Jerusalem".to_string()
}
fn default_performers() -> Vec<String> {
    ["YAFA", "SHIFSHUF", "LAKERD", "GAMAD", "GAMAL"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}
fn default_chores() -> Vec<String> {
    ["פינוי מדיח", "ניקוי חצר"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}
fn default_test_performer() -> Option<String> {
    Some("TEST".to_string())
}
fn default_placeholder() -> Option<String> {
    Some("-".to_string())
}
pub fn default_weekday_labels() -> Vec<String> {
    ["ראשון", "שני", "שלישי", "רביעי", "חמישי", "שישי", "שבת"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}
fn default_history_limit() -> usize {
    10
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            timezone: default_timezone(),
            performers: default_performers(),
            chores: default_chores(),
            test_performer: default_test_performer(),
            placeholder: default_placeholder(),
            weekday_labels: default_weekday_labels(),
            history_limit: default_history_limit(),
            password: None,
            developer_identity: None,
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("chorelog")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".chorelog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("chorelog.conf")
    }

    /// Return the default path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("chorelog.sqlite")
    }

    /// Load configuration from `path` (or the standard location).
    /// A missing file yields the defaults.
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_file);

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.weekday_labels.len() != 7 {
            return Err(AppError::Config(format!(
                "weekday_labels needs 7 entries, found {}",
                self.weekday_labels.len()
            )));
        }
        if self.chores.is_empty() {
            return Err(AppError::Config("at least one chore is required".into()));
        }
        crate::utils::time::parse_zone(&self.timezone)?;
        Ok(())
    }

    /// Database path with `~` expanded.
    pub fn database_path(&self) -> PathBuf {
        expand_tilde(&self.database)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Write the configuration file (unless `is_test`) and create an empty
    /// database file if it does not exist yet.
    pub fn init_all(
        config_path: Option<&Path>,
        custom_db: Option<String>,
        is_test: bool,
    ) -> AppResult<Self> {
        let dir = Self::config_dir();

        let mut config = match config_path {
            Some(p) if p.exists() => Self::load(Some(p))?,
            _ => Self::default(),
        };

        if let Some(name) = custom_db {
            let p = expand_tilde(&name);
            let db_path = if p.is_absolute() { p } else { dir.join(p) };
            config.database = db_path.to_string_lossy().to_string();
        }

        if !is_test {
            let file_path = config_path
                .map(Path::to_path_buf)
                .unwrap_or_else(Self::config_file);
            if let Some(parent) = file_path.parent() {
                fs::create_dir_all(parent)?;
            }
            let mut file = fs::File::create(&file_path)?;
            file.write_all(config.to_yaml()?.as_bytes())?;
            println!("✅ Config file: {:?}", file_path);
        }

        let db_path = config.database_path();
        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_falls_back_to_defaults() {
        let cfg: Config = serde_yaml::from_str("password: secret\nhistory_limit: 3\n").unwrap();

        assert_eq!(cfg.password.as_deref(), Some("secret"));
        assert_eq!(cfg.history_limit, 3);
        assert_eq!(cfg.timezone, "Asia/Jerusalem");
        assert_eq!(cfg.test_performer.as_deref(), Some("TEST"));
        assert!(cfg.performers.contains(&"YAFA".to_string()));
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn rejects_short_weekday_list() {
        let cfg = Config {
            weekday_labels: vec!["Sun".into()],
            ..Config::default()
        };
        assert!(matches!(cfg.validate(), Err(AppError::Config(_))));
    }

    #[test]
    fn rejects_unknown_timezone() {
        let cfg = Config {
            timezone: "Nowhere/Atlantis".into(),
            ..Config::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn yaml_round_trip_keeps_roster() {
        let cfg = Config::default();
        let back: Config = serde_yaml::from_str(&cfg.to_yaml().unwrap()).unwrap();
        assert_eq!(back, cfg);
    }
}
