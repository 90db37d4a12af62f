//! Application configuration.
//!
//! Loaded from an optional JSON file; command-line flags in the desktop
//! binary override individual fields afterwards.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::notify::DEFAULT_DURATION;

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window_width: f64,
    pub window_height: f64,
    /// Default notification lifetime; 0 disables auto-expiry
    pub notification_ms: u64,
    /// Maximum notifications on screen at once
    pub max_notifications: usize,
    /// Artificial delay before a submitted form is accepted
    pub latency_ms: u64,
    /// `EnvFilter` directive used when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_width: 1100.0,
            window_height: 860.0,
            notification_ms: DEFAULT_DURATION.as_millis() as u64,
            max_notifications: 5,
            latency_ms: 800,
            log_filter: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> CoreResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> CoreResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn validate(&self) -> CoreResult<()> {
        if !(self.window_width > 0.0 && self.window_height > 0.0) {
            return Err(CoreError::Config(format!(
                "window size must be positive, got {}x{}",
                self.window_width, self.window_height
            )));
        }
        if self.max_notifications == 0 {
            return Err(CoreError::Config(
                "max_notifications must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn notification_duration(&self) -> Duration {
        Duration::from_millis(self.notification_ms)
    }

    pub fn simulated_latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }
}
