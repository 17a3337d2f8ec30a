//! Application configuration

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use swipequiz_gesture::GestureConfig;

use crate::error::CoreError;
use crate::Result;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Path to the durable database file
    pub database_path: PathBuf,
    /// Swipe tuning
    pub gesture: GestureConfig,
    /// Byte limit for the session namespace, unlimited when absent
    pub session_quota_bytes: Option<usize>,
}

impl Config {
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            database_path: data_dir.join("swipequiz.db"),
            gesture: GestureConfig::default(),
            session_quota_bytes: None,
        }
    }

    pub fn data_dir() -> PathBuf {
        local_data_root()
            .map(|d| d.join("SwipeQuiz"))
            .unwrap_or_else(|| PathBuf::from(".swipequiz"))
    }

    /// Read a JSON config file. Missing fields take their defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&raw)?;
        config.validate()?;

        tracing::info!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let gesture = &self.gesture;
        if !(gesture.viewport_ratio.is_finite() && gesture.viewport_ratio > 0.0) {
            return Err(CoreError::Config(format!(
                "gesture.viewport_ratio must be positive, got {}",
                gesture.viewport_ratio
            )));
        }
        if !(gesture.fallback_threshold.is_finite() && gesture.fallback_threshold > 0.0) {
            return Err(CoreError::Config(format!(
                "gesture.fallback_threshold must be positive, got {}",
                gesture.fallback_threshold
            )));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(Self::data_dir())
    }
}

/// Per-user data root: `%LOCALAPPDATA%`, `~/Library/Application Support`
/// or `$XDG_DATA_HOME` (`~/.local/share`)
fn local_data_root() -> Option<PathBuf> {
    if cfg!(windows) {
        return std::env::var_os("LOCALAPPDATA").map(PathBuf::from);
    }

    let home = std::env::var_os("HOME").map(PathBuf::from);
    if cfg!(target_os = "macos") {
        return home.map(|h| h.join("Library/Application Support"));
    }

    std::env::var_os("XDG_DATA_HOME")
        .map(PathBuf::from)
        .or_else(|| home.map(|h| h.join(".local/share")))
}
