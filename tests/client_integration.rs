//! Integration tests driving the HTTP clients against a live mock server.
//!
//! Each test binds the mock router on an ephemeral port and talks to it
//! through reqwest, so interceptors, status mapping and decoding all run
//! for real.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use reqwest::{Method, StatusCode, Url};
use secrecy::SecretString;
use serde_json::Value;
use tempfile::TempDir;
use tokio::net::TcpListener;

use course_api::adapters::client::{
    EnvelopeClient, HttpClient, ResourceClient, ResponseInterceptor,
};
use course_api::adapters::mock::{mock_router, Latency, MockState};
use course_api::adapters::token::{FileTokenStore, InMemoryTokenStore};
use course_api::application::{UserService, UserServiceError};
use course_api::config::{AppConfig, Environment};
use course_api::domain::api::{ApiResponse, CreateApiUserRequest};
use course_api::domain::foundation::ErrorCode;
use course_api::domain::user::{
    CreateUserRequest, UpdateUserRequest, User, UserRole, UserSearchParams,
};
use course_api::ports::{ClientError, ResourceApi, TokenStore, AUTH_TOKEN_KEY};

// =============================================================================
// Test Infrastructure
// =============================================================================

async fn spawn_server(latency: Latency) -> String {
    let app = mock_router(MockState::seeded(latency));
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

async fn users_client() -> ResourceClient<User> {
    let base = spawn_server(Latency::none()).await;
    let http = HttpClient::builder(base).build().unwrap();
    ResourceClient::new(http, "/users")
}

/// Counts what the response interceptor chain observes.
#[derive(Default)]
struct RecordingInterceptor {
    responses: AtomicUsize,
    errors: AtomicUsize,
    not_found: AtomicUsize,
}

impl ResponseInterceptor for RecordingInterceptor {
    fn on_response(&self, _method: &Method, _url: &Url, _status: StatusCode) {
        self.responses.fetch_add(1, Ordering::SeqCst);
    }

    fn on_error(&self, _method: &Method, _url: &Url, error: &ClientError) {
        self.errors.fetch_add(1, Ordering::SeqCst);
        if error.is_not_found() {
            self.not_found.fetch_add(1, Ordering::SeqCst);
        }
    }
}

// =============================================================================
// ResourceClient
// =============================================================================

#[tokio::test]
async fn resource_client_crud_round() {
    let users = users_client().await;

    let all = users.list(&[]).await.unwrap();
    assert_eq!(all.len(), 6);

    let alice = users.get("1").await.unwrap();
    assert_eq!(alice.name, "Alice Chen");

    let request = CreateUserRequest {
        name: "Grace Hopper".to_string(),
        email: "grace@example.com".to_string(),
        role: None,
        department: "Engineering".to_string(),
        skills: Some(vec!["COBOL".to_string()]),
    };
    let created = users.create(&request).await.unwrap();
    assert_eq!(created.id.as_str(), "7");
    assert_eq!(created.role, UserRole::User);

    let changes = UpdateUserRequest {
        department: Some("Design".to_string()),
        ..Default::default()
    };
    let updated = users.update("7", &changes).await.unwrap();
    assert_eq!(updated.department, "Design");

    let patched = users
        .patch("7", &UpdateUserRequest::active(false))
        .await
        .unwrap();
    assert!(!patched.is_active);

    assert!(users.exists("7").await);
    users.delete("7").await.unwrap();
    assert!(!users.exists("7").await);
}

#[tokio::test]
async fn resource_client_list_passes_query_params() {
    let users = users_client().await;
    let params = vec![
        ("page".to_string(), "2".to_string()),
        ("limit".to_string(), "4".to_string()),
    ];

    let page = users.list(&params).await.unwrap();

    assert_eq!(page.len(), 2);
    assert_eq!(page[0].id.as_str(), "5");
}

#[tokio::test]
async fn resource_client_batch_delete() {
    let users = users_client().await;

    users
        .batch_delete(&["1".to_string(), "2".to_string()])
        .await
        .unwrap();

    assert_eq!(users.list(&[]).await.unwrap().len(), 4);
    assert!(!users.exists("1").await);
}

#[tokio::test]
async fn resource_client_maps_404_to_status_error() {
    let users = users_client().await;

    let err = users.get("404").await.unwrap_err();

    match &err {
        ClientError::Status { status, url, body } => {
            assert_eq!(*status, 404);
            assert!(url.ends_with("/users/404"));
            assert!(body.contains("USER_NOT_FOUND"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(err.is_not_found());
}

#[tokio::test]
async fn response_interceptors_see_every_outcome() {
    let base = spawn_server(Latency::none()).await;
    let recorder = Arc::new(RecordingInterceptor::default());
    let http = HttpClient::builder(base)
        .with_response_interceptor(recorder.clone())
        .build()
        .unwrap();
    let users: ResourceClient<User> = ResourceClient::new(http, "users");

    users.get("1").await.unwrap();
    let _ = users.get("999").await;

    assert_eq!(recorder.responses.load(Ordering::SeqCst), 2);
    assert_eq!(recorder.errors.load(Ordering::SeqCst), 1);
    assert_eq!(recorder.not_found.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn client_timeout_is_a_transport_error() {
    // /api/msw/timeout sleeps 10s, scaled down to 1s here.
    let base = spawn_server(Latency::scaled(0.1)).await;
    let http = HttpClient::builder(format!("{}/api", base))
        .with_timeout(Duration::from_millis(200))
        .build()
        .unwrap();

    let err = http
        .fetch_data::<ApiResponse<Value>>("/msw/timeout")
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Transport(_)));
    assert!(err.is_timeout());
}

// =============================================================================
// Token store and auth header
// =============================================================================

#[tokio::test]
async fn stored_token_is_sent_as_bearer() {
    let base = spawn_server(Latency::none()).await;
    let store = Arc::new(InMemoryTokenStore::new());
    let http = HttpClient::builder(format!("{}/api", base))
        .with_token_store(store.clone())
        .build()
        .unwrap();

    let err = http
        .fetch_data::<ApiResponse<Value>>("/msw/protected")
        .await
        .unwrap_err();
    assert!(err.is_unauthorized());

    store
        .set(AUTH_TOKEN_KEY, SecretString::new("valid-token".to_string()))
        .await
        .unwrap();

    let envelope: ApiResponse<Value> = http.fetch_data("/msw/protected").await.unwrap();
    assert!(envelope.success);
    assert_eq!(
        envelope.data.unwrap()["secret"],
        "This is protected data from MSW"
    );
}

#[tokio::test]
async fn file_token_store_feeds_the_client() {
    let dir = TempDir::new().unwrap();
    let store = FileTokenStore::new(dir.path().join("tokens.json"));
    store
        .set(AUTH_TOKEN_KEY, SecretString::new("valid-token".to_string()))
        .await
        .unwrap();

    let base = spawn_server(Latency::none()).await;
    let http = HttpClient::builder(format!("{}/api", base))
        .with_token_store(Arc::new(FileTokenStore::new(store.path())))
        .build()
        .unwrap();

    let envelope: ApiResponse<Value> = http.fetch_data("/msw/protected").await.unwrap();
    assert!(envelope.success);
}

#[tokio::test]
async fn configured_client_follows_endpoint_switch_and_token_file() {
    let base = spawn_server(Latency::none()).await;

    let mut config = AppConfig::default();
    config.client.json_server_url = base.clone();
    let users = ResourceClient::<User>::new(HttpClient::from_config(&config).unwrap(), "/users");
    assert_eq!(users.list(&[]).await.unwrap().len(), 6);

    let dir = TempDir::new().unwrap();
    let token_file = dir.path().join("tokens.json");
    FileTokenStore::new(&token_file)
        .set(AUTH_TOKEN_KEY, SecretString::new("valid-token".to_string()))
        .await
        .unwrap();

    config.server.environment = Environment::Production;
    config.client.app_origin = base;
    config.client.token_file = Some(token_file);
    let http = HttpClient::from_config(&config).unwrap();

    let envelope: ApiResponse<Value> = http.fetch_data("/msw/protected").await.unwrap();
    assert!(envelope.success);
}

#[tokio::test]
async fn generic_helpers_round_trip_envelopes() {
    let base = spawn_server(Latency::none()).await;
    let http = HttpClient::builder(format!("{}/api", base)).build().unwrap();

    let created: ApiResponse<Value> = http
        .post_data(
            "/users",
            &CreateApiUserRequest {
                name: "Helper".to_string(),
                email: "helper@example.com".to_string(),
                role: None,
                avatar: None,
            },
        )
        .await
        .unwrap();
    assert_eq!(created.data.unwrap()["id"], 4);

    let updated: ApiResponse<Value> = http
        .put_data("/msw/users/1", &serde_json::json!({ "name": "Put Name" }))
        .await
        .unwrap();
    assert_eq!(updated.data.unwrap()["name"], "Put Name");

    let deleted: ApiResponse<Value> = http.delete_data("/msw/users/1").await.unwrap();
    assert!(deleted.success);
    assert!(deleted.data.is_none());
}

// =============================================================================
// EnvelopeClient
// =============================================================================

async fn envelope_client() -> EnvelopeClient {
    let base = spawn_server(Latency::none()).await;
    let http = HttpClient::builder(format!("{}/api", base)).build().unwrap();
    EnvelopeClient::new(http)
}

#[tokio::test]
async fn envelope_client_reads_users() {
    let client = envelope_client().await;

    let all = client.get_users(None, None).await.unwrap();
    assert_eq!(all.into_data().unwrap().len(), 3);

    let page = client.get_users(Some(2), Some(2)).await.unwrap();
    let users = page.into_data().unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].name, "MSW Admin");

    let missing = client.get_user(42).await.unwrap();
    assert!(!missing.success);
    let err = missing.into_data().unwrap_err();
    assert_eq!(err.code, ErrorCode::RequestFailed);
}

#[tokio::test]
async fn envelope_client_creates_user() {
    let client = envelope_client().await;
    let request = CreateApiUserRequest {
        name: "Envelope".to_string(),
        email: "envelope@example.com".to_string(),
        role: None,
        avatar: None,
    };

    let created = client.create_user(&request).await.unwrap().into_data().unwrap();

    assert_eq!(created.id, 4);
    assert_eq!(created.role, UserRole::User);
    assert!(created.created_at.is_some());
}

#[tokio::test]
async fn envelope_client_surfaces_failures_as_envelopes() {
    let client = envelope_client().await;

    let error = client.error_response().await.unwrap();
    assert!(!error.success);
    assert_eq!(error.error.as_deref(), Some("MOCK_INTERNAL_ERROR"));
    assert!(error.timestamp.is_some());

    let denied = client.protected_resource(None).await.unwrap();
    assert!(!denied.success);

    let wrong = client.protected_resource(Some("nope")).await.unwrap();
    assert_eq!(wrong.message, "Unauthorized - Invalid token");

    let granted = client.protected_resource(Some("valid-token")).await.unwrap();
    assert!(granted.success);

    let slow = client.slow_response().await.unwrap();
    assert!(slow.success);
}

// =============================================================================
// UserService over a live ResourceClient
// =============================================================================

#[tokio::test]
async fn user_service_over_http() {
    let service = UserService::new(users_client().await);

    let params = UserSearchParams {
        department: Some("Engineering".to_string()),
        ..Default::default()
    };
    let result = service.search_users(&params).await.unwrap();
    assert_eq!(result.total, 2);
    assert!(result.users.iter().all(|u| u.department == "Engineering"));

    let stats = service.user_stats().await.unwrap();
    assert_eq!(stats.total, 6);
    assert_eq!(stats.inactive, 1);

    let user = service.deactivate_user("1").await.unwrap();
    assert!(!user.is_active);
    assert_eq!(service.active_users().await.unwrap().len(), 4);

    let invalid = CreateUserRequest {
        name: "X".to_string(),
        email: "x@example.com".to_string(),
        role: None,
        department: "Engineering".to_string(),
        skills: None,
    };
    assert!(matches!(
        service.create_user_with_validation(&invalid).await,
        Err(UserServiceError::Validation(_))
    ));
    assert_eq!(service.resource().list(&[]).await.unwrap().len(), 6);
}
