//! JSON-Server style handlers under `/users`.
//!
//! Bodies are the raw resources with no envelope, matching what a
//! `json-server` backend returns. `HEAD /users/:id` is served by the `GET`
//! route.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};

use super::error::MockApiError;
use super::store::MockState;
use crate::domain::api::PageWindow;
use crate::domain::foundation::{DomainError, ErrorCode, Timestamp};
use crate::domain::user::{CreateUserRequest, UpdateUserRequest, User};

/// Routes of the JSON-Server style set.
pub fn json_server_routes() -> Router<MockState> {
    Router::new()
        .route(
            "/users",
            get(list_users).post(create_user).delete(batch_delete),
        )
        .route(
            "/users/:id",
            get(get_user)
                .put(update_user)
                .patch(update_user)
                .delete(delete_user),
        )
}

fn not_found(id: &str) -> MockApiError {
    DomainError::new(ErrorCode::UserNotFound, format!("User with id {} not found", id))
        .with_detail("id", id)
        .into()
}

#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub page: Option<usize>,
    pub limit: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct BatchDeleteRequest {
    pub ids: Vec<String>,
}

/// GET /users - paginated only when `page` or `limit` is given
pub async fn list_users(
    State(state): State<MockState>,
    Query(query): Query<ListQuery>,
) -> Json<Vec<User>> {
    let users = state.db().read().await.resource_users.clone();
    if query.page.is_none() && query.limit.is_none() {
        return Json(users);
    }
    Json(PageWindow::new(query.page, query.limit).slice(users))
}

/// GET /users/:id
pub async fn get_user(
    State(state): State<MockState>,
    Path(id): Path<String>,
) -> Result<Json<User>, MockApiError> {
    let db = state.db().read().await;
    let user = db
        .resource_users
        .iter()
        .find(|u| u.id.as_str() == id)
        .cloned()
        .ok_or_else(|| not_found(&id))?;
    Ok(Json(user))
}

/// POST /users - id is one past the largest numeric id
pub async fn create_user(
    State(state): State<MockState>,
    Json(request): Json<CreateUserRequest>,
) -> impl IntoResponse {
    let mut db = state.db().write().await;
    let id = db.next_resource_id();
    let user = User::from_request(id, request, Timestamp::now());
    db.resource_users.push(user.clone());
    tracing::debug!(id = %user.id, "Resource user created");

    (StatusCode::CREATED, Json(user))
}

/// PUT and PATCH /users/:id - both merge the present fields
pub async fn update_user(
    State(state): State<MockState>,
    Path(id): Path<String>,
    Json(changes): Json<UpdateUserRequest>,
) -> Result<Json<User>, MockApiError> {
    let mut db = state.db().write().await;
    let user = db
        .resource_users
        .iter_mut()
        .find(|u| u.id.as_str() == id)
        .ok_or_else(|| not_found(&id))?;
    user.apply(changes, Timestamp::now());
    Ok(Json(user.clone()))
}

/// DELETE /users/:id
pub async fn delete_user(
    State(state): State<MockState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, MockApiError> {
    let mut db = state.db().write().await;
    let index = db
        .resource_users
        .iter()
        .position(|u| u.id.as_str() == id)
        .ok_or_else(|| not_found(&id))?;
    db.resource_users.remove(index);
    Ok(Json(json!({})))
}

/// DELETE /users with `{ "ids": [...] }` - unknown ids are skipped
pub async fn batch_delete(
    State(state): State<MockState>,
    Json(request): Json<BatchDeleteRequest>,
) -> Json<Value> {
    let mut db = state.db().write().await;
    let before = db.resource_users.len();
    db.resource_users
        .retain(|u| !request.ids.iter().any(|id| id == u.id.as_str()));
    let deleted = before - db.resource_users.len();
    tracing::debug!(deleted, requested = request.ids.len(), "Resource users batch deleted");

    Json(json!({ "deleted": deleted }))
}
