//! Error responses produced by the mock handlers.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::domain::api::{ApiError, ApiResponse};
use crate::domain::foundation::{DomainError, ErrorCode, Timestamp};

/// A failed mock request.
///
/// The `/api` and `/api/msw` sets answer failures with an envelope; the
/// JSON-Server style set answers with a bare [`ApiError`] body.
#[derive(Debug, thiserror::Error)]
pub enum MockApiError {
    #[error("{message}")]
    Envelope {
        status: StatusCode,
        message: String,
        timestamp: Option<Timestamp>,
        code: Option<ErrorCode>,
    },

    #[error("{0}")]
    Resource(DomainError),
}

impl MockApiError {
    fn envelope(status: StatusCode, message: impl Into<String>) -> Self {
        Self::Envelope {
            status,
            message: message.into(),
            timestamp: None,
            code: None,
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::envelope(StatusCode::NOT_FOUND, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::envelope(StatusCode::UNAUTHORIZED, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::envelope(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    /// Stamps an envelope error with the current time.
    pub fn stamped(self) -> Self {
        match self {
            Self::Envelope {
                status,
                message,
                code,
                ..
            } => Self::Envelope {
                status,
                message,
                timestamp: Some(Timestamp::now()),
                code,
            },
            other => other,
        }
    }

    /// Attaches a machine-readable tag to an envelope error.
    pub fn with_code(self, tag: ErrorCode) -> Self {
        match self {
            Self::Envelope {
                status,
                message,
                timestamp,
                ..
            } => Self::Envelope {
                status,
                message,
                timestamp,
                code: Some(tag),
            },
            other => other,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Envelope { status, .. } => *status,
            Self::Resource(err) => status_for(err.code),
        }
    }
}

impl From<DomainError> for MockApiError {
    fn from(err: DomainError) -> Self {
        Self::Resource(err)
    }
}

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::ValidationFailed | ErrorCode::InvalidFormat => StatusCode::BAD_REQUEST,
        ErrorCode::UserNotFound | ErrorCode::SectionNotFound | ErrorCode::RouteNotFound => {
            StatusCode::NOT_FOUND
        }
        ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorCode::RequestFailed
        | ErrorCode::MissingData
        | ErrorCode::MockInternalError
        | ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for MockApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            Self::Envelope {
                message,
                timestamp,
                code,
                ..
            } => {
                let mut body: ApiResponse<()> = ApiResponse::failure(message);
                if let Some(ts) = timestamp {
                    body = body.at(ts);
                }
                if let Some(code) = code {
                    body = body.with_error(code);
                }
                (status, Json(body)).into_response()
            }
            Self::Resource(err) => {
                let body = ApiError::from(&err).with_status(status.as_u16());
                (status, Json(body)).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_errors_keep_their_status() {
        assert_eq!(MockApiError::not_found("x").status(), StatusCode::NOT_FOUND);
        assert_eq!(MockApiError::unauthorized("x").status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            MockApiError::internal("x").status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn resource_errors_map_codes_to_status() {
        let err = MockApiError::from(DomainError::new(ErrorCode::UserNotFound, "gone"));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);

        let err = MockApiError::from(DomainError::validation("name", "too short"));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn stamping_sets_timestamp() {
        let err = MockApiError::not_found("x").stamped();
        assert!(matches!(
            err,
            MockApiError::Envelope {
                timestamp: Some(_),
                ..
            }
        ));
    }
}
