//! Basic demo handlers under `/api`.
//!
//! Envelopes here carry no timestamp.

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use super::error::MockApiError;
use super::store::MockState;
use crate::domain::api::{ApiResponse, ApiUser, CreateApiUserRequest};

/// Routes of the basic set.
pub fn basic_routes() -> Router<MockState> {
    Router::new()
        .route("/api/users", get(list_users).post(create_user))
        .route("/api/users/:id", get(get_user))
        .route("/api/protected", get(protected))
        .route("/api/slow", get(slow))
}

/// `Authorization: Bearer <token>` with any token.
pub(crate) fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
}

/// GET /api/users
pub async fn list_users(State(state): State<MockState>) -> Json<ApiResponse<Vec<ApiUser>>> {
    let users = state.db().read().await.basic_users.clone();
    Json(ApiResponse::ok(users, "Users fetched successfully"))
}

/// GET /api/users/:id
pub async fn get_user(
    State(state): State<MockState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<ApiUser>>, MockApiError> {
    let user = {
        let db = state.db().read().await;
        id.parse::<u64>()
            .ok()
            .and_then(|id| db.basic_users.iter().find(|u| u.id == id).cloned())
    };

    user.map(|user| Json(ApiResponse::ok(user, "User fetched successfully")))
        .ok_or_else(|| MockApiError::not_found("User not found"))
}

/// POST /api/users - id is `len + 1`, which can collide after deletions elsewhere
pub async fn create_user(
    State(state): State<MockState>,
    Json(request): Json<CreateApiUserRequest>,
) -> impl IntoResponse {
    let mut db = state.db().write().await;
    let id = db.basic_users.len() as u64 + 1;
    let user = ApiUser::from_request(id, request, None);
    db.basic_users.push(user.clone());
    tracing::debug!(id, "Basic mock user created");

    (
        StatusCode::CREATED,
        Json(ApiResponse::ok(user, "User created successfully")),
    )
}

/// GET /api/protected
pub async fn protected(headers: HeaderMap) -> Result<Json<ApiResponse<()>>, MockApiError> {
    match bearer_token(&headers) {
        Some(_) => Ok(Json(ApiResponse::ok_empty("Access granted"))),
        None => Err(MockApiError::unauthorized("Unauthorized")),
    }
}

/// GET /api/slow
pub async fn slow(State(state): State<MockState>) -> Json<ApiResponse<()>> {
    state.latency().wait(3000).await;
    Json(ApiResponse::ok_empty("Slow response"))
}
