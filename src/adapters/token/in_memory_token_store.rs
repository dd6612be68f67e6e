//! In-Memory Token Store Adapter
//!
//! Keeps tokens in a process-local map. Useful for testing and development.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::ports::{TokenStore, TokenStoreError, AUTH_TOKEN_KEY};

/// In-memory key/value token storage
#[derive(Debug, Clone, Default)]
pub struct InMemoryTokenStore {
    values: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryTokenStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds a bearer token
    pub fn with_token(token: impl Into<String>) -> Self {
        let mut values = HashMap::new();
        values.insert(AUTH_TOKEN_KEY.to_string(), token.into());
        Self {
            values: Arc::new(RwLock::new(values)),
        }
    }

    /// Clear all stored values (useful for tests)
    pub async fn clear(&self) {
        self.values.write().await.clear();
    }
}

#[async_trait]
impl TokenStore for InMemoryTokenStore {
    async fn get(&self, key: &str) -> Result<Option<SecretString>, TokenStoreError> {
        let values = self.values.read().await;
        Ok(values.get(key).cloned().map(SecretString::new))
    }

    async fn set(&self, key: &str, value: SecretString) -> Result<(), TokenStoreError> {
        let mut values = self.values.write().await;
        values.insert(key.to_string(), value.expose_secret().clone());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), TokenStoreError> {
        self.values.write().await.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn empty_store_has_no_token() {
        let store = InMemoryTokenStore::new();
        assert!(store.auth_token().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn set_then_get_returns_value() {
        let store = InMemoryTokenStore::new();
        store
            .set(AUTH_TOKEN_KEY, SecretString::new("abc".to_string()))
            .await
            .unwrap();

        let token = store.auth_token().await.unwrap().unwrap();
        assert_eq!(token.expose_secret(), "abc");
    }

    #[tokio::test]
    async fn remove_and_clear_drop_values() {
        let store = InMemoryTokenStore::with_token("abc");
        store.set("other", SecretString::new("x".to_string())).await.unwrap();

        store.remove(AUTH_TOKEN_KEY).await.unwrap();
        assert!(store.auth_token().await.unwrap().is_none());
        assert!(store.get("other").await.unwrap().is_some());

        store.clear().await;
        assert!(store.get("other").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn clones_share_state() {
        let store = InMemoryTokenStore::new();
        let clone = store.clone();
        clone
            .set(AUTH_TOKEN_KEY, SecretString::new("shared".to_string()))
            .await
            .unwrap();
        assert!(store.auth_token().await.unwrap().is_some());
    }
}
