//! Top-level application configuration.
//!
//! Configuration is stored in a YAML file and includes:
//! - The snapshot file to watch and the file actions are appended to
//! - Logging destination and filter
//! - Window size in logical units
//! - File watcher debounce interval
//!
//! The file is located by an explicit `--config` path, then
//! `$ERT_MANAGER_CONFIG`, then `<config dir>/ert-manager/config.yaml`.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::BaseDirs;
use serde::{Deserialize, Serialize};

use crate::error::{ErtError, Result};

/// Environment variable naming the config file
pub const CONFIG_ENV: &str = "ERT_MANAGER_CONFIG";

/// Environment variable overriding `log_filter`
pub const LOG_FILTER_ENV: &str = "ERT_MANAGER_LOG";

/// Logical units per terminal cell, horizontally
pub const UNITS_PER_COLUMN: u32 = 6;

/// Logical units per terminal cell, vertically
pub const UNITS_PER_ROW: u32 = 12;

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Snapshot file watched by `panel` when `--snapshot` is not given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snapshot_path: Option<PathBuf>,

    /// JSON-lines file emitted actions are appended to
    #[serde(default = "default_actions_path")]
    pub actions_path: PathBuf,

    /// Log file; no logging output when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,

    /// `tracing` filter directive (default: info)
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// Window size
    #[serde(default)]
    pub window: WindowConfig,

    /// Delay before re-reading a changed snapshot file, in milliseconds
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

fn default_actions_path() -> PathBuf {
    PathBuf::from("ert-actions.jsonl")
}

fn default_log_filter() -> String {
    "info".to_string()
}

fn default_debounce_ms() -> u64 {
    150
}

impl Default for Config {
    fn default() -> Self {
        Self {
            snapshot_path: None,
            actions_path: default_actions_path(),
            log_file: None,
            log_filter: default_log_filter(),
            window: WindowConfig::default(),
            debounce_ms: default_debounce_ms(),
        }
    }
}

/// Window size in logical units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowConfig {
    #[serde(default = "default_window_width")]
    pub width: u32,
    #[serde(default = "default_window_height")]
    pub height: u32,
}

fn default_window_width() -> u32 {
    360
}

fn default_window_height() -> u32 {
    505
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: default_window_width(),
            height: default_window_height(),
        }
    }
}

impl WindowConfig {
    /// Window size in terminal cells `(columns, rows)`, at least one cell each
    pub fn cells(&self) -> (u16, u16) {
        let to_cells = |units: u32, per_cell: u32| {
            u16::try_from(units / per_cell).unwrap_or(u16::MAX).max(1)
        };
        (
            to_cells(self.width, UNITS_PER_COLUMN),
            to_cells(self.height, UNITS_PER_ROW),
        )
    }
}

impl Config {
    /// Default config file location for this platform
    pub fn default_config_path() -> Option<PathBuf> {
        BaseDirs::new().map(|dirs| dirs.config_dir().join("ert-manager").join("config.yaml"))
    }

    /// Resolve which config file to read
    ///
    /// An explicit path wins, then `$ERT_MANAGER_CONFIG`, then the platform
    /// default.
    pub fn locate(explicit: Option<&Path>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(path.to_path_buf());
        }

        if let Ok(path) = env::var(CONFIG_ENV)
            && !path.is_empty()
        {
            return Some(PathBuf::from(path));
        }

        Self::default_config_path()
    }

    /// Load configuration, or return defaults if no file is found
    ///
    /// A path given explicitly must exist.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let Some(path) = Self::locate(explicit) else {
            return Ok(Config::default());
        };

        if !path.exists() {
            if explicit.is_some() {
                return Err(ErtError::Config(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }

        Self::load_from(&path)
    }

    /// Parse the config file at `path`
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            ErtError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read config at {}: {}", path.display(), e),
            ))
        })?;
        let config: Config = serde_yaml_ng::from_str(&content)?;
        Ok(config)
    }

    /// Log filter, with `$ERT_MANAGER_LOG` taking precedence over the file
    pub fn effective_log_filter(&self) -> String {
        if let Ok(filter) = env::var(LOG_FILTER_ENV)
            && !filter.is_empty()
        {
            return filter;
        }
        self.log_filter.clone()
    }

    /// Debounce interval for the snapshot file watcher
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}
