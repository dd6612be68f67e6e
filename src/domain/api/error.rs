//! Structured error body.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::DomainError;

/// `{ code, message, status?, data? }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            status: None,
            data: None,
        }
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }
}

impl From<&DomainError> for ApiError {
    fn from(err: &DomainError) -> Self {
        Self::new(err.code.to_string(), err.message.clone())
    }
}
