//! HTTP gateway to the research tracking backend
//!
//! The gateway is the only module that performs network I/O. It issues REST
//! calls against a fixed base URL and translates the outcome into the crate
//! error taxonomy: any 2xx response parses as JSON, a non-2xx response
//! becomes [`Error::Request`] with the status code, and anything that never
//! produced a usable response becomes [`Error::Transport`].
//!
//! No retries and no request fencing live here; both belong to the stores.

use std::time::Duration;

use reqwest::{Client as HttpClient, Method, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{Error, Result};

/// Default backend base URL, matching the development server
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";

/// Default request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// REST gateway to the backend
///
/// Cheap to clone; the underlying connection pool is shared.
#[derive(Clone)]
pub struct Gateway {
    http_client: HttpClient,
    base_url: String,
}

impl std::fmt::Debug for Gateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Gateway")
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Builder for creating a [`Gateway`]
#[derive(Default)]
pub struct GatewayBuilder {
    base_url: Option<String>,
    timeout_secs: Option<u64>,
}

impl GatewayBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL (defaults to the local development backend)
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the request timeout
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }

    /// Build the gateway
    pub fn build(self) -> Result<Gateway> {
        let timeout_secs = self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS);

        let http_client = HttpClient::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(Error::Transport)?;

        let base_url = self
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(Gateway {
            http_client,
            base_url: normalize_base_url(base_url),
        })
    }
}

/// Strip a trailing slash so path joins stay predictable.
fn normalize_base_url(mut url: String) -> String {
    while url.ends_with('/') {
        url.pop();
    }
    url
}

impl Gateway {
    /// Create a gateway against the given base URL with default settings
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        GatewayBuilder::new().base_url(base_url).build()
    }

    /// Create a new builder for a gateway
    pub fn builder() -> GatewayBuilder {
        GatewayBuilder::new()
    }

    /// The configured base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for a resource path like `/projects/3`
    fn url(&self, path: &str) -> String {
        debug_assert!(path.starts_with('/'), "resource paths start with '/'");
        format!("{}{}", self.base_url, path)
    }

    /// `GET` a resource and parse the JSON body
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let request = self.http_client.request(Method::GET, self.url(path));
        let response = self.execute(Method::GET, path, request).await?;
        response.json::<T>().await.map_err(Error::Transport)
    }

    /// `POST` a JSON body and parse the JSON response
    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self
            .http_client
            .request(Method::POST, self.url(path))
            .json(body);
        let response = self.execute(Method::POST, path, request).await?;
        response.json::<T>().await.map_err(Error::Transport)
    }

    /// `PUT` a JSON body and parse the JSON response
    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self
            .http_client
            .request(Method::PUT, self.url(path))
            .json(body);
        let response = self.execute(Method::PUT, path, request).await?;
        response.json::<T>().await.map_err(Error::Transport)
    }

    /// `DELETE` a resource; 204/empty bodies count as success
    pub async fn delete(&self, path: &str) -> Result<()> {
        let request = self.http_client.request(Method::DELETE, self.url(path));
        self.execute(Method::DELETE, path, request).await?;
        Ok(())
    }

    async fn execute(
        &self,
        method: Method,
        path: &str,
        request: RequestBuilder,
    ) -> Result<Response> {
        debug!(method = %method, path = %path, "issuing backend request");

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            debug!(method = %method, path = %path, status = status.as_u16(), "backend rejected request");
            return Err(Error::Request {
                status: status.as_u16(),
            });
        }

        Ok(response)
    }
}
