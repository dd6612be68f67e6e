//! HTTP client configuration

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

use super::error::ValidationError;
use super::server::Environment;

/// Settings for the outgoing HTTP clients
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the JSON-Server style backend
    #[serde(default = "default_json_server_url")]
    pub json_server_url: String,

    /// Origin the course app is served from; `{app_origin}/api` is the mock API
    #[serde(default = "default_app_origin")]
    pub app_origin: String,

    /// Talk to the JSON-Server backend instead of the mock API (development only)
    #[serde(default = "default_use_json_server")]
    pub use_json_server: bool,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Where the file token store keeps its tokens. In-memory when unset.
    pub token_file: Option<PathBuf>,
}

impl ClientConfig {
    /// Resolve the base URL for the resource clients.
    ///
    /// Development with JSON-Server enabled talks to `json_server_url`;
    /// every other combination goes through `{app_origin}/api`.
    pub fn base_url(&self, environment: &Environment) -> String {
        if environment.is_development() && self.use_json_server {
            self.json_server_url.trim_end_matches('/').to_string()
        } else {
            format!("{}/api", self.app_origin.trim_end_matches('/'))
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate client configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !is_http_url(&self.json_server_url) {
            return Err(ValidationError::InvalidUrl {
                field: "client.json_server_url",
            });
        }
        if !is_http_url(&self.app_origin) {
            return Err(ValidationError::InvalidUrl {
                field: "client.app_origin",
            });
        }
        if self.timeout_secs == 0 || self.timeout_secs > 300 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            json_server_url: default_json_server_url(),
            app_origin: default_app_origin(),
            use_json_server: default_use_json_server(),
            timeout_secs: default_timeout(),
            token_file: None,
        }
    }
}

fn is_http_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

fn default_json_server_url() -> String {
    "http://localhost:3001".to_string()
}

fn default_app_origin() -> String {
    "http://localhost:5173".to_string()
}

fn default_use_json_server() -> bool {
    true
}

fn default_timeout() -> u64 {
    10
}
