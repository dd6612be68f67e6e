//! Resolved API endpoint information.

use serde::Serialize;

use crate::config::{AppConfig, Environment};

/// Where the resource clients point and why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiEndpoint {
    pub base_url: String,
    pub is_development: bool,
    pub use_json_server: bool,
    pub environment: &'static str,
}

impl ApiEndpoint {
    pub fn from_config(config: &AppConfig) -> Self {
        let environment = &config.server.environment;
        Self {
            base_url: config.api_base_url(),
            is_development: environment.is_development(),
            use_json_server: config.client.use_json_server,
            environment: display_environment(environment),
        }
    }

    /// `true` when the endpoint is the JSON-Server backend rather than the mock API.
    pub fn targets_json_server(&self) -> bool {
        self.is_development && self.use_json_server
    }
}

// Anything that is not development reports itself as production.
fn display_environment(environment: &Environment) -> &'static str {
    if environment.is_development() {
        "development"
    } else {
        "production"
    }
}
