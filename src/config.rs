use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;
use std::time::Duration;

use crate::state::DecrementPolicy;

/// User settings read from `settings.json` in the data directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Seek target in seconds when a video loads and no marker is saved
    #[serde(default = "default_start_time_seconds")]
    pub start_time_seconds: f64,
    /// Whether a decrement also drops the latest logged timestamp
    #[serde(default)]
    pub decrement_policy: DecrementPolicy,
    #[serde(default = "default_window_width")]
    pub window_width: f64,
    #[serde(default = "default_window_height")]
    pub window_height: f64,
    /// How long to wait for the webview to report the playback position
    #[serde(default = "default_position_timeout_ms")]
    pub position_timeout_ms: u64,
}

fn default_start_time_seconds() -> f64 {
    0.0
}

fn default_window_width() -> f64 {
    1100.0
}

fn default_window_height() -> f64 {
    720.0
}

fn default_position_timeout_ms() -> u64 {
    500
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            start_time_seconds: default_start_time_seconds(),
            decrement_policy: DecrementPolicy::default(),
            window_width: default_window_width(),
            window_height: default_window_height(),
            position_timeout_ms: default_position_timeout_ms(),
        }
    }
}

impl AppConfig {
    /// Load settings, using defaults when the file is missing or unreadable.
    pub fn load(path: &Path) -> Self {
        match Self::try_load(path) {
            Ok(Some(config)) => {
                tracing::info!(path = ?path, "Loaded settings");
                config
            }
            Ok(None) => Self::default(),
            Err(err) => {
                tracing::warn!(path = ?path, error = %err, "Ignoring unreadable settings");
                Self::default()
            }
        }
    }

    fn try_load(path: &Path) -> io::Result<Option<Self>> {
        let json = match fs::read_to_string(path) {
            Ok(json) => json,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err),
        };
        let mut config: AppConfig = serde_json::from_str(&json)?;
        if !config.start_time_seconds.is_finite() || config.start_time_seconds < 0.0 {
            tracing::warn!(value = config.start_time_seconds, "Invalid start time; using 0");
            config.start_time_seconds = default_start_time_seconds();
        }
        Ok(Some(config))
    }

    pub fn position_timeout(&self) -> Duration {
        Duration::from_millis(self.position_timeout_ms)
    }
}
