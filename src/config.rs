//! Configuration
//!
//! Loaded from an optional TOML file. Every key has a default, so a missing
//! file or a partial one is fine.

use crate::error::ConfigError;
use crate::schedule::WeekStart;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Directory holding the persisted slots
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    #[serde(default)]
    pub week_start: WeekStart,

    /// Log filter used when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .map(|p| p.join("course-tracker"))
        .unwrap_or_else(|| PathBuf::from("./course_tracker_data"))
}

fn default_log_level() -> String {
    "course_tracker=warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            week_start: WeekStart::default(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Default config file location
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("course-tracker").join("config.toml"))
    }

    /// Load `path`; a file that does not exist yields the defaults
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }
}
