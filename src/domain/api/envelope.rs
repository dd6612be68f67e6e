//! Response envelope wrapping every `/api` and `/api/msw` payload.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, ErrorCode, Timestamp};

/// `{ data?, message, success, timestamp? }`
///
/// By convention a failed envelope carries no `data`; nothing in the type
/// enforces that, so [`ApiResponse::into_data`] checks both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(default = "Option::default", skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    pub message: String,
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<Timestamp>,
    /// Machine-readable error tag, only set by simulated server failures.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Successful envelope carrying `data`.
    pub fn ok(data: T, message: impl Into<String>) -> Self {
        Self {
            data: Some(data),
            message: message.into(),
            success: true,
            timestamp: None,
            error: None,
        }
    }

    /// Successful envelope without a payload.
    pub fn ok_empty(message: impl Into<String>) -> Self {
        Self {
            data: None,
            message: message.into(),
            success: true,
            timestamp: None,
            error: None,
        }
    }

    /// Failed envelope; `data` is left empty.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            data: None,
            message: message.into(),
            success: false,
            timestamp: None,
            error: None,
        }
    }

    /// Stamps the envelope with the given time.
    pub fn at(mut self, timestamp: Timestamp) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Attaches a machine-readable error tag.
    pub fn with_error(mut self, code: ErrorCode) -> Self {
        self.error = Some(code.to_string());
        self
    }

    /// Unwraps the payload of a successful envelope.
    pub fn into_data(self) -> Result<T, DomainError> {
        if !self.success {
            return Err(DomainError::new(ErrorCode::RequestFailed, self.message));
        }
        self.data.ok_or_else(|| {
            DomainError::new(
                ErrorCode::MissingData,
                format!("Envelope has no data: {}", self.message),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn failure_serializes_without_data() {
        let envelope: ApiResponse<u32> = ApiResponse::failure("User not found");
        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(value, json!({ "message": "User not found", "success": false }));
    }

    #[test]
    fn timestamp_and_error_tag_are_emitted() {
        let ts = Timestamp::parse("2024-01-01T10:00:00Z").unwrap();
        let envelope: ApiResponse<()> = ApiResponse::failure("boom")
            .at(ts)
            .with_error(ErrorCode::MockInternalError);
        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(value["timestamp"], json!("2024-01-01T10:00:00Z"));
        assert_eq!(value["error"], json!("MOCK_INTERNAL_ERROR"));
    }

    #[test]
    fn deserializes_envelope_without_data() {
        let envelope: ApiResponse<Vec<u32>> =
            serde_json::from_value(json!({ "message": "Access granted", "success": true }))
                .unwrap();
        assert!(envelope.success);
        assert!(envelope.data.is_none());
    }

    #[test]
    fn into_data_unwraps_success() {
        let envelope = ApiResponse::ok(vec![1, 2], "Users fetched successfully");
        assert_eq!(envelope.into_data().unwrap(), vec![1, 2]);
    }

    #[test]
    fn into_data_rejects_failure_and_missing_data() {
        let failed: ApiResponse<u32> = ApiResponse::failure("Unauthorized");
        let err = failed.into_data().unwrap_err();
        assert_eq!(err.code, ErrorCode::RequestFailed);
        assert_eq!(err.message, "Unauthorized");

        let empty: ApiResponse<u32> = ApiResponse::ok_empty("Slow response");
        assert_eq!(empty.into_data().unwrap_err().code, ErrorCode::MissingData);
    }
}
