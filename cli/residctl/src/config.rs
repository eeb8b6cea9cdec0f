//! Configuration management.
//!
//! Settings are read from `config.json` in the platform config directory and
//! then overridden by environment variables:
//! - `RESID_FORMAT` (table or json)
//! - `RESID_INSENSITIVE` (1/true to tolerate a trailing `/` when parsing)
//! - `RESID_LOG_LEVEL` (trace, debug, info, warn, error)

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Configuration file name.
const CONFIG_FILE: &str = "config.json";

/// Get the config file path.
pub fn config_path() -> Result<PathBuf> {
    ProjectDirs::from("io", "resid", "resid")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE))
        .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
}

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Default output format.
    #[serde(default = "default_format")]
    pub format: String,

    /// Parse in insensitive mode by default.
    #[serde(default)]
    pub insensitive: bool,

    /// Log level used when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_format() -> String {
    "table".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format: default_format(),
            insensitive: false,
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Load config from disk and the environment.
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from(&config_path()?)?;
        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Load config from `path`, or return defaults if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config from {:?}", path))
    }

    /// Apply `RESID_*` overrides using `lookup` to read variables.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(format) = lookup("RESID_FORMAT") {
            self.format = format;
        }
        if let Some(insensitive) = lookup("RESID_INSENSITIVE") {
            self.insensitive = insensitive == "1" || insensitive.eq_ignore_ascii_case("true");
        }
        if let Some(level) = lookup("RESID_LOG_LEVEL") {
            self.log_level = level;
        }
    }

    /// Save config to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write config to {:?}", path))
    }
}
