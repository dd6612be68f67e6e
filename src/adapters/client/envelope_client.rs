//! Client for the enveloped `/api/msw` namespace.
//!
//! Unlike [`ResourceClient`](super::ResourceClient), this client does not
//! treat non-2xx statuses as errors: the mock endpoints answer failures with
//! an envelope too, and callers inspect `success` themselves.

use reqwest::header::AUTHORIZATION;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::http_client::{decode_json, HttpClient};
use crate::domain::api::{ApiResponse, ApiUser, CreateApiUserRequest};
use crate::ports::ClientError;

const NAMESPACE: &str = "/msw";

/// Fetch-style client for the MSW mock endpoints.
///
/// The wrapped [`HttpClient`] must be rooted at the mock API, e.g.
/// `http://localhost:5173/api`. Build it without a token store so that
/// `protected_resource(None)` really goes out without credentials.
#[derive(Debug, Clone)]
pub struct EnvelopeClient {
    http: HttpClient,
}

impl EnvelopeClient {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    async fn envelope<T: DeserializeOwned>(
        &self,
        builder: reqwest::RequestBuilder,
    ) -> Result<ApiResponse<T>, ClientError> {
        let response = self.http.dispatch(builder).await?;
        decode_json(response).await
    }

    fn path(endpoint: &str) -> String {
        format!("{}{}", NAMESPACE, endpoint)
    }

    /// `GET /msw/users`, optionally sliced by `page` and `limit`.
    pub async fn get_users(
        &self,
        page: Option<usize>,
        limit: Option<usize>,
    ) -> Result<ApiResponse<Vec<ApiUser>>, ClientError> {
        let mut builder = self.http.request(Method::GET, &Self::path("/users"));
        if let (Some(page), Some(limit)) = (page, limit) {
            builder = builder.query(&[("page", page), ("limit", limit)]);
        }
        self.envelope(builder).await
    }

    /// `GET /msw/users/:id`
    pub async fn get_user(&self, id: u64) -> Result<ApiResponse<ApiUser>, ClientError> {
        let builder = self
            .http
            .request(Method::GET, &Self::path(&format!("/users/{}", id)));
        self.envelope(builder).await
    }

    /// `POST /msw/users`
    pub async fn create_user(
        &self,
        request: &CreateApiUserRequest,
    ) -> Result<ApiResponse<ApiUser>, ClientError> {
        let builder = self
            .http
            .request(Method::POST, &Self::path("/users"))
            .json(request);
        self.envelope(builder).await
    }

    /// `GET /msw/slow`, answers after a simulated delay.
    pub async fn slow_response(&self) -> Result<ApiResponse<Value>, ClientError> {
        self.envelope(self.http.request(Method::GET, &Self::path("/slow")))
            .await
    }

    /// `GET /msw/error`, always a simulated 500.
    pub async fn error_response(&self) -> Result<ApiResponse<Value>, ClientError> {
        self.envelope(self.http.request(Method::GET, &Self::path("/error")))
            .await
    }

    /// `GET /msw/protected`, with `Authorization: Bearer <token>` when given.
    pub async fn protected_resource(
        &self,
        token: Option<&str>,
    ) -> Result<ApiResponse<Value>, ClientError> {
        let mut builder = self.http.request(Method::GET, &Self::path("/protected"));
        if let Some(token) = token {
            builder = builder.header(AUTHORIZATION, format!("Bearer {}", token));
        }
        self.envelope(builder).await
    }
}
