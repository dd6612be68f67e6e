//! File-based Token Store Adapter
//!
//! Stores all keys in a single JSON object on disk, so a token set by one
//! run is picked up by the next.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use tokio::sync::Mutex;

use crate::ports::{TokenStore, TokenStoreError};

/// File-based token storage
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
    // Serializes read-modify-write cycles within this process.
    write_lock: Arc<Mutex<()>>,
}

impl FileTokenStore {
    /// Create a store backed by the JSON file at `path`
    ///
    /// The file and its parent directories are created on first write.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_all(&self) -> Result<BTreeMap<String, String>, TokenStoreError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let json = fs::read_to_string(&self.path)
            .await
            .map_err(|e| TokenStoreError::IoError(e.to_string()))?;

        if json.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&json).map_err(|e| TokenStoreError::DeserializationFailed(e.to_string()))
    }

    async fn write_all(&self, values: &BTreeMap<String, String>) -> Result<(), TokenStoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .await
                    .map_err(|e| TokenStoreError::IoError(e.to_string()))?;
            }
        }

        let json = serde_json::to_string_pretty(values)
            .map_err(|e| TokenStoreError::SerializationFailed(e.to_string()))?;

        fs::write(&self.path, json)
            .await
            .map_err(|e| TokenStoreError::IoError(e.to_string()))
    }
}

#[async_trait]
impl TokenStore for FileTokenStore {
    async fn get(&self, key: &str) -> Result<Option<SecretString>, TokenStoreError> {
        let values = self.read_all().await?;
        Ok(values.get(key).cloned().map(SecretString::new))
    }

    async fn set(&self, key: &str, value: SecretString) -> Result<(), TokenStoreError> {
        let _guard = self.write_lock.lock().await;
        let mut values = self.read_all().await?;
        values.insert(key.to_string(), value.expose_secret().clone());
        self.write_all(&values).await
    }

    async fn remove(&self, key: &str) -> Result<(), TokenStoreError> {
        let _guard = self.write_lock.lock().await;
        let mut values = self.read_all().await?;
        if values.remove(key).is_some() {
            self.write_all(&values).await?;
        }
        Ok(())
    }
}
