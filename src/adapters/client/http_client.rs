//! Shared reqwest client with interceptor chains.

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Method, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

use super::interceptor::{
    AuthHeaderInterceptor, LoggingInterceptor, RequestIdInterceptor, RequestInterceptor,
    ResponseInterceptor,
};
use crate::adapters::token::{FileTokenStore, InMemoryTokenStore};
use crate::config::AppConfig;
use crate::ports::{ClientError, TokenStore};

/// Per-request timeout used when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Builder for [`HttpClient`].
pub struct HttpClientBuilder {
    base_url: String,
    timeout: Duration,
    token_store: Option<Arc<dyn TokenStore>>,
    request_interceptors: Vec<Arc<dyn RequestInterceptor>>,
    response_interceptors: Vec<Arc<dyn ResponseInterceptor>>,
}

impl HttpClientBuilder {
    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Reads the bearer token from `store` on every request.
    pub fn with_token_store(mut self, store: Arc<dyn TokenStore>) -> Self {
        self.token_store = Some(store);
        self
    }

    /// Appends a request interceptor after the built-in ones.
    pub fn with_request_interceptor(mut self, interceptor: Arc<dyn RequestInterceptor>) -> Self {
        self.request_interceptors.push(interceptor);
        self
    }

    /// Appends a response interceptor after the logging one.
    pub fn with_response_interceptor(mut self, interceptor: Arc<dyn ResponseInterceptor>) -> Self {
        self.response_interceptors.push(interceptor);
        self
    }

    pub fn build(self) -> Result<HttpClient, ClientError> {
        let base_url = self.base_url.trim_end_matches('/').to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ClientError::InvalidUrl(base_url));
        }

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(self.timeout)
            .default_headers(headers)
            .build()?;

        let mut request_interceptors: Vec<Arc<dyn RequestInterceptor>> =
            vec![Arc::new(RequestIdInterceptor)];
        if let Some(store) = &self.token_store {
            request_interceptors.push(Arc::new(AuthHeaderInterceptor::new(Arc::clone(store))));
        }
        request_interceptors.extend(self.request_interceptors);

        let mut response_interceptors: Vec<Arc<dyn ResponseInterceptor>> =
            vec![Arc::new(LoggingInterceptor)];
        response_interceptors.extend(self.response_interceptors);

        Ok(HttpClient {
            client,
            base_url,
            timeout: self.timeout,
            token_store: self.token_store,
            request_interceptors: Arc::new(request_interceptors),
            response_interceptors: Arc::new(response_interceptors),
        })
    }
}

/// JSON HTTP client rooted at a base URL.
///
/// Cheap to clone; clones share the connection pool and interceptors.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    timeout: Duration,
    token_store: Option<Arc<dyn TokenStore>>,
    request_interceptors: Arc<Vec<Arc<dyn RequestInterceptor>>>,
    response_interceptors: Arc<Vec<Arc<dyn ResponseInterceptor>>>,
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("token_store", &self.token_store.is_some())
            .field("request_interceptors", &self.request_interceptors.len())
            .field("response_interceptors", &self.response_interceptors.len())
            .finish()
    }
}

impl HttpClient {
    pub fn builder(base_url: impl Into<String>) -> HttpClientBuilder {
        HttpClientBuilder {
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT,
            token_store: None,
            request_interceptors: Vec::new(),
            response_interceptors: Vec::new(),
        }
    }

    /// Client for the configured endpoint.
    ///
    /// Uses `client.timeout_secs` and reads the bearer token from
    /// `client.token_file` when set, or from a fresh in-memory store.
    pub fn from_config(config: &AppConfig) -> Result<Self, ClientError> {
        let store: Arc<dyn TokenStore> = match &config.client.token_file {
            Some(path) => Arc::new(FileTokenStore::new(path)),
            None => Arc::new(InMemoryTokenStore::new()),
        };
        Self::builder(config.api_base_url())
            .with_timeout(config.client.timeout())
            .with_token_store(store)
            .build()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The store the bearer token is read from, if any.
    pub fn token_store(&self) -> Option<&Arc<dyn TokenStore>> {
        self.token_store.as_ref()
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Absolute URL for `path`, which may or may not start with `/`.
    pub fn url(&self, path: &str) -> String {
        if path.is_empty() {
            return self.base_url.clone();
        }
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Starts a request against `path` relative to the base URL.
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.client.request(method, self.url(path))
    }

    /// Runs the interceptor chains and sends the request, whatever the status.
    pub async fn dispatch(&self, builder: RequestBuilder) -> Result<Response, ClientError> {
        self.send(builder).await.map(|(_, response)| response)
    }

    /// Sends the request and turns non-2xx responses into [`ClientError::Status`].
    pub async fn execute(&self, builder: RequestBuilder) -> Result<Response, ClientError> {
        let (method, response) = self.send(builder).await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let url = response.url().clone();
        let body = body_or_empty(response.text().await, &url);
        let error = ClientError::Status {
            status: status.as_u16(),
            url: url.to_string(),
            body,
        };
        self.notify_error(&method, &url, &error);
        Err(error)
    }

    async fn send(&self, builder: RequestBuilder) -> Result<(Method, Response), ClientError> {
        let mut request = builder.build()?;
        for interceptor in self.request_interceptors.iter() {
            interceptor.intercept(&mut request).await?;
        }

        let method = request.method().clone();
        let url = request.url().clone();

        match self.client.execute(request).await {
            Ok(response) => {
                for interceptor in self.response_interceptors.iter() {
                    interceptor.on_response(&method, &url, response.status());
                }
                Ok((method, response))
            }
            Err(e) => {
                let error = ClientError::Transport(e);
                self.notify_error(&method, &url, &error);
                Err(error)
            }
        }
    }

    fn notify_error(&self, method: &Method, url: &Url, error: &ClientError) {
        for interceptor in self.response_interceptors.iter() {
            interceptor.on_error(method, url, error);
        }
    }

    /// Sends the request and decodes a JSON body from a 2xx response.
    pub async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, ClientError> {
        let response = self.execute(builder).await?;
        decode_json(response).await
    }

    /// Sends the request and discards the body of a 2xx response.
    pub async fn send_empty(&self, builder: RequestBuilder) -> Result<(), ClientError> {
        self.execute(builder).await?;
        Ok(())
    }

    // ════════════════════════════════════════════════════════════════════
    // Ad-hoc helpers
    // ════════════════════════════════════════════════════════════════════

    pub async fn fetch_data<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        self.send_json(self.request(Method::GET, path)).await
    }

    pub async fn post_data<T, B>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send_json(self.request(Method::POST, path).json(body)).await
    }

    pub async fn put_data<T, B>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send_json(self.request(Method::PUT, path).json(body)).await
    }

    pub async fn delete_data<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        self.send_json(self.request(Method::DELETE, path)).await
    }
}

/// Decodes a JSON body regardless of the response status.
pub(crate) async fn decode_json<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let url = response.url().to_string();
    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|e| ClientError::Decode {
        url,
        message: e.to_string(),
    })
}

// A body that cannot be read still leaves the status error intact.
fn body_or_empty<E: std::fmt::Display>(body: Result<String, E>, url: &Url) -> String {
    body.unwrap_or_else(|e| {
        tracing::debug!(url = %url, error = %e, "Failed to read error response body");
        String::new()
    })
}
