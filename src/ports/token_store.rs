//! Token Store Port - where the client keeps its bearer token.
//!
//! Mirrors browser local storage: string values under string keys, read on
//! every outgoing request. The bearer token lives under [`AUTH_TOKEN_KEY`].

use async_trait::async_trait;
use secrecy::SecretString;

/// Key the bearer token is stored under.
pub const AUTH_TOKEN_KEY: &str = "auth_token";

/// Errors that can occur during token storage operations
#[derive(Debug, thiserror::Error)]
pub enum TokenStoreError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Failed to serialize tokens: {0}")]
    SerializationFailed(String),

    #[error("Failed to deserialize tokens: {0}")]
    DeserializationFailed(String),
}

/// Port for reading and writing stored credentials
#[async_trait]
pub trait TokenStore: Send + Sync {
    /// Read the value stored under `key`
    ///
    /// # Returns
    /// `None` when nothing is stored under the key
    async fn get(&self, key: &str) -> Result<Option<SecretString>, TokenStoreError>;

    /// Store `value` under `key`, replacing any previous value
    async fn set(&self, key: &str, value: SecretString) -> Result<(), TokenStoreError>;

    /// Remove the value stored under `key`; missing keys are not an error
    async fn remove(&self, key: &str) -> Result<(), TokenStoreError>;

    /// Read the bearer token
    async fn auth_token(&self) -> Result<Option<SecretString>, TokenStoreError> {
        self.get(AUTH_TOKEN_KEY).await
    }
}
