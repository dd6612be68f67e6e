//! Generic REST resource client.

use async_trait::async_trait;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::json;
use std::marker::PhantomData;

use super::http_client::HttpClient;
use crate::ports::{ClientError, ResourceApi};

/// CRUD client for the collection at `{base_url}{path}`.
///
/// # Example
///
/// ```ignore
/// let http = HttpClient::builder("http://localhost:3001").build()?;
/// let users: ResourceClient<User> = ResourceClient::new(http, "/users");
/// let alice = users.get("1").await?;
/// ```
pub struct ResourceClient<T> {
    http: HttpClient,
    path: String,
    _resource: PhantomData<fn() -> T>,
}

impl<T> Clone for ResourceClient<T> {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
            path: self.path.clone(),
            _resource: PhantomData,
        }
    }
}

impl<T> std::fmt::Debug for ResourceClient<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResourceClient")
            .field("http", &self.http)
            .field("path", &self.path)
            .finish()
    }
}

impl<T> ResourceClient<T> {
    pub fn new(http: HttpClient, path: impl Into<String>) -> Self {
        let path = path.into();
        let path = format!("/{}", path.trim_matches('/'));
        Self {
            http,
            path,
            _resource: PhantomData,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    fn item_path(&self, id: &str) -> String {
        format!("{}/{}", self.path, id)
    }
}

#[async_trait]
impl<T> ResourceApi<T> for ResourceClient<T>
where
    T: DeserializeOwned + Send + 'static,
{
    async fn list(&self, params: &[(String, String)]) -> Result<Vec<T>, ClientError> {
        let mut builder = self.http.request(Method::GET, &self.path);
        if !params.is_empty() {
            builder = builder.query(params);
        }
        self.http.send_json(builder).await
    }

    async fn get(&self, id: &str) -> Result<T, ClientError> {
        let builder = self.http.request(Method::GET, &self.item_path(id));
        self.http.send_json(builder).await
    }

    async fn create<B>(&self, body: &B) -> Result<T, ClientError>
    where
        B: Serialize + Send + Sync + ?Sized,
    {
        let builder = self.http.request(Method::POST, &self.path).json(body);
        self.http.send_json(builder).await
    }

    async fn update<B>(&self, id: &str, body: &B) -> Result<T, ClientError>
    where
        B: Serialize + Send + Sync + ?Sized,
    {
        let builder = self.http.request(Method::PUT, &self.item_path(id)).json(body);
        self.http.send_json(builder).await
    }

    async fn patch<B>(&self, id: &str, body: &B) -> Result<T, ClientError>
    where
        B: Serialize + Send + Sync + ?Sized,
    {
        let builder = self.http.request(Method::PATCH, &self.item_path(id)).json(body);
        self.http.send_json(builder).await
    }

    async fn delete(&self, id: &str) -> Result<(), ClientError> {
        let builder = self.http.request(Method::DELETE, &self.item_path(id));
        self.http.send_empty(builder).await
    }

    async fn batch_delete(&self, ids: &[String]) -> Result<(), ClientError> {
        let builder = self
            .http
            .request(Method::DELETE, &self.path)
            .json(&json!({ "ids": ids }));
        self.http.send_empty(builder).await
    }

    async fn exists(&self, id: &str) -> bool {
        let builder = self.http.request(Method::HEAD, &self.item_path(id));
        self.http.execute(builder).await.is_ok()
    }
}
