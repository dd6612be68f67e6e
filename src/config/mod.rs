//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `COURSE_API` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use course_api::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Mock API on {:?}", config.server.socket_addr());
//! ```

mod client;
mod error;
mod mock;
mod server;

pub use client::ClientConfig;
pub use error::{ConfigError, ValidationError};
pub use mock::MockConfig;
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a working
/// development setup. Load using [`AppConfig::load()`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Mock API server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Outgoing HTTP client configuration
    #[serde(default)]
    pub client: ClientConfig,

    /// Mock handler behaviour
    #[serde(default)]
    pub mock: MockConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `COURSE_API` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `COURSE_API__SERVER__PORT=3001` -> `server.port = 3001`
    /// - `COURSE_API__CLIENT__USE_JSON_SERVER=false` -> `client.use_json_server = false`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("COURSE_API")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.client.validate()?;
        self.mock.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }

    /// Base URL the resource clients should talk to
    pub fn api_base_url(&self) -> String {
        self.client.base_url(&self.server.environment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        env::remove_var("COURSE_API__SERVER__PORT");
        env::remove_var("COURSE_API__SERVER__ENVIRONMENT");
        env::remove_var("COURSE_API__CLIENT__USE_JSON_SERVER");
        env::remove_var("COURSE_API__CLIENT__APP_ORIGIN");
        env::remove_var("COURSE_API__MOCK__LATENCY_ENABLED");
    }

    #[test]
    fn test_load_with_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.server.port, 3001);
        assert_eq!(config.client.timeout_secs, 10);
        assert!(config.mock.latency_enabled);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_is_production() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("COURSE_API__SERVER__ENVIRONMENT", "production");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.is_production());
    }

    #[test]
    fn test_custom_server_port() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("COURSE_API__SERVER__PORT", "3000");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn test_json_server_mode_is_the_development_default() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let config = AppConfig::load().unwrap();
        assert_eq!(config.api_base_url(), "http://localhost:3001");
    }

    #[test]
    fn test_json_server_mode_can_be_switched_off() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("COURSE_API__CLIENT__USE_JSON_SERVER", "false");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.api_base_url(), "http://localhost:5173/api");
    }

    #[test]
    fn test_mock_latency_can_be_disabled() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("COURSE_API__MOCK__LATENCY_ENABLED", "false");
        let result = AppConfig::load();
        clear_env();

        assert!(!result.unwrap().mock.latency_enabled);
    }
}
