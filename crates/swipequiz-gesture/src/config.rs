//! Gesture tuning

use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    /// Share of the viewport width a drag must cover to commit
    pub viewport_ratio: f64,
    /// Commit distance when the viewport width is unknown
    pub fallback_threshold: f64,
    /// How long the right/wrong feedback holds input
    pub feedback_duration_ms: u64,
}

impl GestureConfig {
    pub const DEFAULT_VIEWPORT_RATIO: f64 = 0.15;
    pub const DEFAULT_FALLBACK_THRESHOLD: f64 = 60.0;
    pub const DEFAULT_FEEDBACK_DURATION_MS: u64 = 1300;

    /// Commit distance for the given viewport width.
    ///
    /// Always finite and positive; unusable tuning falls back to the defaults.
    pub fn threshold(&self, viewport_width: Option<f64>) -> f64 {
        let scaled = match viewport_width {
            Some(width) if width.is_finite() && width > 0.0 => Some(width * self.viewport_ratio),
            _ => None,
        };

        scaled
            .filter(|t| usable(*t))
            .or_else(|| Some(self.fallback_threshold).filter(|t| usable(*t)))
            .unwrap_or(Self::DEFAULT_FALLBACK_THRESHOLD)
    }

    pub fn feedback_duration(&self) -> Duration {
        Duration::from_millis(self.feedback_duration_ms)
    }
}

fn usable(threshold: f64) -> bool {
    threshold.is_finite() && threshold > 0.0
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            viewport_ratio: Self::DEFAULT_VIEWPORT_RATIO,
            fallback_threshold: Self::DEFAULT_FALLBACK_THRESHOLD,
            feedback_duration_ms: Self::DEFAULT_FEEDBACK_DURATION_MS,
        }
    }
}
