//! Mock API configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Settings for the mock handler sets
#[derive(Debug, Clone, Deserialize)]
pub struct MockConfig {
    /// Simulate network latency in the mock handlers
    #[serde(default = "default_latency_enabled")]
    pub latency_enabled: bool,

    /// Multiplier applied to every simulated delay
    #[serde(default = "default_latency_scale")]
    pub latency_scale: f64,
}

impl MockConfig {
    /// Validate mock configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.latency_scale.is_finite() || !(0.0..=10.0).contains(&self.latency_scale) {
            return Err(ValidationError::InvalidLatencyScale);
        }
        Ok(())
    }
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            latency_enabled: default_latency_enabled(),
            latency_scale: default_latency_scale(),
        }
    }
}

fn default_latency_enabled() -> bool {
    true
}

fn default_latency_scale() -> f64 {
    1.0
}
