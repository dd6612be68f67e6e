//! MSW demo handlers under `/api/msw`.
//!
//! Every envelope, success or failure, carries an RFC 3339 timestamp.

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::basic::bearer_token;
use super::error::MockApiError;
use super::store::MockState;
use crate::domain::api::{ApiResponse, ApiUser, CreateApiUserRequest, UpdateApiUserRequest};
use crate::domain::foundation::{ErrorCode, Timestamp};

/// Token accepted by `GET /api/msw/protected`.
pub const VALID_TOKEN: &str = "valid-token";

/// One registered handler, as listed by `GET /api/msw/_handlers`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HandlerInfo {
    pub method: &'static str,
    pub path: &'static str,
}

/// The simulated endpoints of the MSW set.
pub const MSW_HANDLERS: [HandlerInfo; 9] = [
    HandlerInfo { method: "GET", path: "/api/msw/users" },
    HandlerInfo { method: "GET", path: "/api/msw/users/:id" },
    HandlerInfo { method: "POST", path: "/api/msw/users" },
    HandlerInfo { method: "PUT", path: "/api/msw/users/:id" },
    HandlerInfo { method: "DELETE", path: "/api/msw/users/:id" },
    HandlerInfo { method: "GET", path: "/api/msw/slow" },
    HandlerInfo { method: "GET", path: "/api/msw/error" },
    HandlerInfo { method: "GET", path: "/api/msw/protected" },
    HandlerInfo { method: "GET", path: "/api/msw/timeout" },
];

/// Routes of the MSW set, plus the `_handlers` and `_reset` admin routes.
pub fn msw_routes() -> Router<MockState> {
    Router::new()
        .route("/api/msw/users", get(list_users).post(create_user))
        .route(
            "/api/msw/users/:id",
            get(get_user).put(update_user).delete(delete_user),
        )
        .route("/api/msw/slow", get(slow))
        .route("/api/msw/error", get(error))
        .route("/api/msw/protected", get(protected))
        .route("/api/msw/timeout", get(timeout))
        .route("/api/msw/_handlers", get(handlers))
        .route("/api/msw/_reset", post(reset))
}

fn stamped<T>(envelope: ApiResponse<T>) -> Json<ApiResponse<T>> {
    Json(envelope.at(Timestamp::now()))
}

fn user_not_found(id: &str) -> MockApiError {
    MockApiError::not_found(format!("User with id {} not found", id)).stamped()
}

fn find_index(users: &[ApiUser], id: &str) -> Option<usize> {
    let id = id.parse::<u64>().ok()?;
    users.iter().position(|u| u.id == id)
}

#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl PageQuery {
    /// `(start, end)` when both values are present and positive.
    fn bounds(&self) -> Option<(usize, usize)> {
        let page = self.page.as_deref()?.trim().parse::<usize>().ok()?;
        let limit = self.limit.as_deref()?.trim().parse::<usize>().ok()?;
        if page == 0 || limit == 0 {
            return None;
        }
        let start = (page - 1).saturating_mul(limit);
        Some((start, start.saturating_add(limit)))
    }
}

/// GET /api/msw/users
pub async fn list_users(
    State(state): State<MockState>,
    Query(query): Query<PageQuery>,
) -> Json<ApiResponse<Vec<ApiUser>>> {
    let users = {
        let db = state.db().read().await;
        match query.bounds() {
            Some((start, end)) => db
                .msw_users
                .iter()
                .skip(start)
                .take(end - start)
                .cloned()
                .collect(),
            None => db.msw_users.clone(),
        }
    };

    state.latency().wait(300).await;
    stamped(ApiResponse::ok(users, "Users fetched successfully from MSW"))
}

/// GET /api/msw/users/:id
pub async fn get_user(
    State(state): State<MockState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<ApiUser>>, MockApiError> {
    let user = {
        let db = state.db().read().await;
        find_index(&db.msw_users, &id).map(|index| db.msw_users[index].clone())
    };
    let user = user.ok_or_else(|| user_not_found(&id))?;

    state.latency().wait(200).await;
    Ok(stamped(ApiResponse::ok(user, "User fetched successfully from MSW")))
}

/// POST /api/msw/users
pub async fn create_user(
    State(state): State<MockState>,
    Json(request): Json<CreateApiUserRequest>,
) -> impl IntoResponse {
    let user = {
        let mut db = state.db().write().await;
        let user = ApiUser::from_request(db.next_msw_id(), request, Some(Timestamp::now()));
        db.msw_users.push(user.clone());
        user
    };
    tracing::debug!(id = user.id, "MSW mock user created");

    state.latency().wait(500).await;
    (
        StatusCode::CREATED,
        stamped(ApiResponse::ok(user, "User created successfully via MSW")),
    )
}

/// PUT /api/msw/users/:id - merges the given fields, the id is preserved
pub async fn update_user(
    State(state): State<MockState>,
    Path(id): Path<String>,
    Json(changes): Json<UpdateApiUserRequest>,
) -> Result<Json<ApiResponse<ApiUser>>, MockApiError> {
    let user = {
        let mut db = state.db().write().await;
        let index = find_index(&db.msw_users, &id).ok_or_else(|| user_not_found(&id))?;
        let user = &mut db.msw_users[index];
        user.apply(changes);
        user.clone()
    };

    state.latency().wait(300).await;
    Ok(stamped(ApiResponse::ok(user, "User updated successfully via MSW")))
}

/// DELETE /api/msw/users/:id
pub async fn delete_user(
    State(state): State<MockState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<()>>, MockApiError> {
    {
        let mut db = state.db().write().await;
        let index = find_index(&db.msw_users, &id).ok_or_else(|| user_not_found(&id))?;
        db.msw_users.remove(index);
    }

    state.latency().wait(200).await;
    Ok(stamped(ApiResponse::ok_empty("User deleted successfully via MSW")))
}

/// GET /api/msw/slow
pub async fn slow(State(state): State<MockState>) -> Json<ApiResponse<()>> {
    state.latency().wait(3000).await;
    stamped(ApiResponse::ok_empty(
        "This is a slow response from MSW (3 seconds delay)",
    ))
}

/// GET /api/msw/error - always a simulated 500
pub async fn error(State(state): State<MockState>) -> MockApiError {
    state.latency().wait(100).await;
    MockApiError::internal("Internal Server Error simulated by MSW")
        .stamped()
        .with_code(ErrorCode::MockInternalError)
}

/// GET /api/msw/protected
pub async fn protected(headers: HeaderMap) -> Result<Json<ApiResponse<Value>>, MockApiError> {
    let token = bearer_token(&headers)
        .ok_or_else(|| MockApiError::unauthorized("Unauthorized - Missing or invalid token").stamped())?;

    if token != VALID_TOKEN {
        return Err(MockApiError::unauthorized("Unauthorized - Invalid token").stamped());
    }

    Ok(stamped(ApiResponse::ok(
        json!({ "secret": "This is protected data from MSW" }),
        "Access granted to protected resource",
    )))
}

/// GET /api/msw/timeout - slower than the default client timeout
pub async fn timeout(State(state): State<MockState>) -> Json<ApiResponse<()>> {
    state.latency().wait(10_000).await;
    stamped(ApiResponse::ok_empty("This response should timeout"))
}

/// GET /api/msw/_handlers
pub async fn handlers() -> Json<ApiResponse<Vec<HandlerInfo>>> {
    stamped(ApiResponse::ok(
        MSW_HANDLERS.to_vec(),
        "Registered MSW handlers",
    ))
}

/// POST /api/msw/_reset - restores the MSW users only
pub async fn reset(State(state): State<MockState>) -> Json<ApiResponse<()>> {
    state.db().write().await.reset_msw();
    tracing::info!("MSW mock data reset to initial state");
    stamped(ApiResponse::ok_empty("MSW mock data reset to initial state"))
}
