//! Resource API Port - CRUD verbs over a REST collection.
//!
//! A resource lives at `{base}` (the collection) and `{base}/{id}` (one
//! item). Implementations return the raw resource bodies; no envelope is
//! unwrapped at this level.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::TokenStoreError;

/// Query string pairs appended to list requests.
pub type QueryParams = Vec<(String, String)>;

/// Errors surfaced by HTTP-backed ports.
///
/// Transport failures are carried unchanged; non-2xx responses keep their
/// status and body but are not mapped to domain errors.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Request to {url} failed with status {status}")]
    Status { status: u16, url: String, body: String },

    #[error("Failed to decode response from {url}: {message}")]
    Decode { url: String, message: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Token store error: {0}")]
    Token(#[from] TokenStoreError),
}

impl ClientError {
    /// HTTP status of a non-2xx response.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            ClientError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, ClientError::Transport(e) if e.is_timeout())
    }
}

/// CRUD verbs against one resource collection.
#[async_trait]
pub trait ResourceApi<T>: Send + Sync
where
    T: DeserializeOwned + Send + 'static,
{
    /// `GET {base}` with optional query parameters
    async fn list(&self, params: &[(String, String)]) -> Result<Vec<T>, ClientError>;

    /// `GET {base}/{id}`
    async fn get(&self, id: &str) -> Result<T, ClientError>;

    /// `POST {base}`
    async fn create<B>(&self, body: &B) -> Result<T, ClientError>
    where
        B: Serialize + Send + Sync + ?Sized;

    /// `PUT {base}/{id}`
    async fn update<B>(&self, id: &str, body: &B) -> Result<T, ClientError>
    where
        B: Serialize + Send + Sync + ?Sized;

    /// `PATCH {base}/{id}`
    async fn patch<B>(&self, id: &str, body: &B) -> Result<T, ClientError>
    where
        B: Serialize + Send + Sync + ?Sized;

    /// `DELETE {base}/{id}`
    async fn delete(&self, id: &str) -> Result<(), ClientError>;

    /// `DELETE {base}` with a `{ "ids": [...] }` body
    async fn batch_delete(&self, ids: &[String]) -> Result<(), ClientError>;

    /// `HEAD {base}/{id}`; any failure, including transport errors, is `false`
    async fn exists(&self, id: &str) -> bool;
}
