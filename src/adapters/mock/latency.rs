//! Simulated network latency for the mock handlers.

use std::time::Duration;

use crate::config::MockConfig;

/// Largest accepted latency multiplier, matching `mock.latency_scale`.
pub const MAX_LATENCY_SCALE: f64 = 10.0;

/// How long the mock handlers pretend the network takes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Latency {
    enabled: bool,
    scale: f64,
}

impl Latency {
    /// Delays exactly as written in the handlers.
    pub fn realistic() -> Self {
        Self {
            enabled: true,
            scale: 1.0,
        }
    }

    /// No delays at all. Used by tests.
    pub fn none() -> Self {
        Self {
            enabled: false,
            scale: 0.0,
        }
    }

    /// Delays multiplied by `scale`, capped at [`MAX_LATENCY_SCALE`].
    /// Zero, negative or non-finite scales disable latency.
    pub fn scaled(scale: f64) -> Self {
        if scale.is_finite() && scale > 0.0 {
            Self {
                enabled: true,
                scale: scale.min(MAX_LATENCY_SCALE),
            }
        } else {
            Self::none()
        }
    }

    pub fn from_config(config: &MockConfig) -> Self {
        if config.latency_enabled {
            Self::scaled(config.latency_scale)
        } else {
            Self::none()
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Effective delay for a nominal `millis`.
    pub fn delay(&self, millis: u64) -> Duration {
        if !self.enabled {
            return Duration::ZERO;
        }
        Duration::try_from_secs_f64(millis as f64 / 1000.0 * self.scale).unwrap_or(Duration::MAX)
    }

    /// Sleeps for the effective delay of `millis`.
    pub async fn wait(&self, millis: u64) {
        let delay = self.delay(millis);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}

impl Default for Latency {
    fn default() -> Self {
        Self::realistic()
    }
}
