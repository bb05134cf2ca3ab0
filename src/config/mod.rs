use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Rows in the dashboard "recent activity" list.
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,
    /// chrono format for the time column.
    #[serde(default = "default_time_format")]
    pub time_format: String,
    /// chrono format for the date column.
    #[serde(default = "default_date_format")]
    pub date_format: String,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
    /// Label printed for events without a status; empty leaves the cell blank.
    #[serde(default = "default_unknown_status")]
    pub unknown_status: String,
}

fn default_recent_limit() -> usize {
    crate::core::views::DEFAULT_RECENT_LIMIT
}
fn default_time_format() -> String {
    "%I:%M %p".to_string()
}
fn default_date_format() -> String {
    "%b %-d".to_string()
}
fn default_unknown_status() -> String {
    crate::models::log_event::UNKNOWN_STATUS.to_string()
}
fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            recent_limit: default_recent_limit(),
            time_format: default_time_format(),
            date_format: default_date_format(),
            separator_char: default_separator_char(),
            unknown_status: default_unknown_status(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("hostelog")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".hostelog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("hostelog.conf")
    }

    /// Load configuration from `path`, or return defaults if not found.
    /// Missing keys fall back to their defaults.
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(&content)?)
    }

    /// Write a default configuration file at `path`. An existing file is
    /// kept unless `force` is set; returns whether a file was written.
    pub fn init(path: &Path, force: bool) -> AppResult<bool> {
        if path.exists() && !force {
            return Ok(false);
        }
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        let yaml = serde_yaml::to_string(&Self::default())?;
        let mut file = fs::File::create(path)?;
        file.write_all(yaml.as_bytes())?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let cfg: Config = serde_yaml::from_str("recent_limit: 3\n").unwrap();
        assert_eq!(cfg.recent_limit, 3);
        assert_eq!(cfg.time_format, "%I:%M %p");
        assert_eq!(cfg.unknown_status, "Unknown");
    }

    #[test]
    fn unknown_status_label_is_configurable() {
        let cfg: Config = serde_yaml::from_str("unknown_status: \"n/a\"\n").unwrap();
        assert_eq!(cfg.unknown_status, "n/a");
        assert_eq!(cfg.recent_limit, 5);
    }

    #[test]
    fn init_then_load_round_trips_defaults() {
        let path = env::temp_dir().join("hostelog_cfg_unit").join("hostelog.conf");
        fs::remove_file(&path).ok();

        assert!(Config::init(&path, false).unwrap());
        assert!(!Config::init(&path, false).unwrap());
        assert_eq!(Config::load_from(&path).unwrap(), Config::default());
    }
}
