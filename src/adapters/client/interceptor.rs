//! Request and response interceptors.

use async_trait::async_trait;
use rand::Rng;
use reqwest::header::{HeaderValue, AUTHORIZATION};
use reqwest::{Method, Request, StatusCode, Url};
use secrecy::ExposeSecret;
use std::sync::Arc;

use crate::domain::foundation::Timestamp;
use crate::ports::{ClientError, TokenStore};

/// Header carrying the per-request trace id.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Runs on every outgoing request before it is sent.
#[async_trait]
pub trait RequestInterceptor: Send + Sync {
    async fn intercept(&self, request: &mut Request) -> Result<(), ClientError>;
}

/// Observes every completed request, successful or not.
pub trait ResponseInterceptor: Send + Sync {
    fn on_response(&self, method: &Method, url: &Url, status: StatusCode);

    fn on_error(&self, method: &Method, url: &Url, error: &ClientError);
}

/// `req_<unix-millis>_<9 base36 chars>`
pub fn generate_request_id() -> String {
    let mut rng = rand::thread_rng();
    let suffix: String = (0..9)
        .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
        .collect();
    format!("req_{}_{}", Timestamp::now().as_unix_millis(), suffix)
}

/// Stamps each request with a fresh `X-Request-ID`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestIdInterceptor;

#[async_trait]
impl RequestInterceptor for RequestIdInterceptor {
    async fn intercept(&self, request: &mut Request) -> Result<(), ClientError> {
        let id = generate_request_id();
        // Only ASCII alphanumerics and underscores, always a valid header value.
        if let Ok(value) = HeaderValue::from_str(&id) {
            request.headers_mut().insert(REQUEST_ID_HEADER, value);
        }
        tracing::debug!(
            method = %request.method(),
            url = %request.url(),
            request_id = %id,
            "Sending API request"
        );
        Ok(())
    }
}

/// Adds `Authorization: Bearer <token>` when a token is stored.
///
/// A header already set on the request wins over the stored token.
#[derive(Clone)]
pub struct AuthHeaderInterceptor {
    store: Arc<dyn TokenStore>,
}

impl AuthHeaderInterceptor {
    pub fn new(store: Arc<dyn TokenStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl RequestInterceptor for AuthHeaderInterceptor {
    async fn intercept(&self, request: &mut Request) -> Result<(), ClientError> {
        if request.headers().contains_key(AUTHORIZATION) {
            return Ok(());
        }

        let Some(token) = self.store.auth_token().await? else {
            return Ok(());
        };

        match HeaderValue::from_str(&format!("Bearer {}", token.expose_secret())) {
            Ok(mut value) => {
                value.set_sensitive(true);
                request.headers_mut().insert(AUTHORIZATION, value);
            }
            Err(_) => {
                tracing::warn!("Stored auth token is not a valid header value, sending without it");
            }
        }
        Ok(())
    }
}

/// Central logging of responses and failures.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingInterceptor;

impl ResponseInterceptor for LoggingInterceptor {
    fn on_response(&self, method: &Method, url: &Url, status: StatusCode) {
        tracing::debug!(%method, %url, status = status.as_u16(), "API response");
    }

    fn on_error(&self, method: &Method, url: &Url, error: &ClientError) {
        match error.status() {
            Some(401) => tracing::warn!(%method, %url, "Authentication expired, sign in again"),
            Some(404) => tracing::warn!(%method, %url, "Resource not found"),
            Some(status) => tracing::error!(%method, %url, status, error = %error, "API request failed"),
            None => tracing::error!(%method, %url, error = %error, "API request failed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::token::InMemoryTokenStore;

    fn request(method: Method) -> Request {
        Request::new(method, Url::parse("http://localhost:3001/users").unwrap())
    }

    #[test]
    fn request_id_has_expected_shape() {
        let id = generate_request_id();
        let parts: Vec<&str> = id.split('_').collect();

        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "req");
        assert!(parts[1].parse::<i64>().is_ok());
        assert_eq!(parts[2].len(), 9);
        assert!(parts[2]
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }

    #[test]
    fn request_ids_differ() {
        assert_ne!(generate_request_id(), generate_request_id());
    }

    #[tokio::test]
    async fn request_id_interceptor_sets_header() {
        let mut req = request(Method::GET);
        RequestIdInterceptor.intercept(&mut req).await.unwrap();

        let value = req.headers().get(REQUEST_ID_HEADER).unwrap();
        assert!(value.to_str().unwrap().starts_with("req_"));
    }

    #[tokio::test]
    async fn auth_interceptor_adds_bearer_when_token_stored() {
        let interceptor = AuthHeaderInterceptor::new(Arc::new(InMemoryTokenStore::with_token("abc")));
        let mut req = request(Method::GET);

        interceptor.intercept(&mut req).await.unwrap();

        assert_eq!(req.headers().get(AUTHORIZATION).unwrap(), "Bearer abc");
    }

    #[tokio::test]
    async fn auth_interceptor_skips_without_token() {
        let interceptor = AuthHeaderInterceptor::new(Arc::new(InMemoryTokenStore::new()));
        let mut req = request(Method::GET);

        interceptor.intercept(&mut req).await.unwrap();

        assert!(req.headers().get(AUTHORIZATION).is_none());
    }

    #[tokio::test]
    async fn auth_interceptor_keeps_explicit_header() {
        let interceptor = AuthHeaderInterceptor::new(Arc::new(InMemoryTokenStore::with_token("stored")));
        let mut req = request(Method::GET);
        req.headers_mut()
            .insert(AUTHORIZATION, HeaderValue::from_static("Bearer explicit"));

        interceptor.intercept(&mut req).await.unwrap();

        assert_eq!(req.headers().get(AUTHORIZATION).unwrap(), "Bearer explicit");
    }
}
