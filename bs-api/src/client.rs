//! HTTP client for the BookStack REST API.
//!
//! Handles token authentication, rate limiting, URL assembly, body encoding,
//! TLS settings and status classification. Endpoint modules add typed
//! methods on top of [`ApiClient::request`].

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method};
use tracing::{debug, warn};

use bs_core::config::ServerConfig;
use bs_core::constants;
use bs_core::error::{BsError, BsResult};

use crate::form::{Blank, Form, FormBody};
use crate::rate_limit::RateLimiter;
use crate::response;

/// HTTP client for one BookStack site.
///
/// Cheap to clone; clones share the connection pool and the rate limiter.
#[derive(Clone)]
pub struct ApiClient {
    inner: Client,
    /// Site URL as configured (e.g. "https://docs.example.com").
    base_url: String,
    token_id: String,
    token_secret: String,
    limiter: Arc<RateLimiter>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("token_id", &self.token_id)
            .field("rate_limit", &self.limiter.per_request())
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Create a new ApiClient from server configuration.
    pub fn new(config: &ServerConfig) -> BsResult<Self> {
        config.validate()?;

        let mut builder = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .connect_timeout(Duration::from_secs(15))
            .user_agent(format!("{}/{}", constants::APP_NAME, constants::APP_VERSION));

        if config.insecure {
            warn!("TLS certificate verification disabled for {}", config.url);
            builder = builder.danger_accept_invalid_certs(true);
        }

        let inner = builder
            .build()
            .map_err(|e| BsError::Http(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            inner,
            base_url: config.url.trim().to_string(),
            token_id: config.token_id.clone(),
            token_secret: config.token_secret.clone(),
            limiter: Arc::new(RateLimiter::new(config.rate_limit)?),
        })
    }

    /// Start building a client.
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::default()
    }

    /// The configured site URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for an API path: `<base>/api/<path>`.
    ///
    /// One trailing slash is trimmed from the base and one leading slash from
    /// the path.
    pub fn url(&self, path: &str) -> String {
        let base = self.base_url.strip_suffix('/').unwrap_or(&self.base_url);
        let path = path.strip_prefix('/').unwrap_or(path);
        format!("{base}{}/{path}", constants::API_PREFIX)
    }

    /// Value of the `Authorization` header.
    fn authorization(&self) -> String {
        format!("Token {}:{}", self.token_id, self.token_secret)
    }

    /// Run one API call and return the buffered success body.
    ///
    /// Waits for a rate-limit slot, encodes `data`, sends the request and
    /// reads the whole response. Non-2xx statuses become errors.
    pub async fn request<F: Form + ?Sized>(
        &self,
        method: Method,
        path: &str,
        data: &F,
    ) -> BsResult<Vec<u8>> {
        self.limiter.take().await;

        let url = self.url(path);
        let body = data.form().await?;
        debug!(
            multipart = body.is_multipart(),
            content_type = body.content_type().as_deref().unwrap_or("-"),
            "{} {}",
            method,
            path
        );

        let mut builder = self
            .inner
            .request(method.clone(), &url)
            .header(AUTHORIZATION, self.authorization());

        builder = match body {
            FormBody::Empty => builder,
            FormBody::Json(bytes) => builder.header(CONTENT_TYPE, constants::mime::JSON).body(bytes),
            // reqwest sets the multipart content type with its boundary
            FormBody::Multipart(m) => builder.multipart(m.form),
        };

        let response = builder.send().await.map_err(Self::classify_error)?;
        let status = response.status().as_u16();

        let raw = response
            .bytes()
            .await
            .map(|b| b.to_vec())
            .map_err(|e| BsError::Http(format!("failed to read response body: {e}")))?;

        Self::check_status(status, raw).inspect_err(|e| {
            warn!("{} {} failed: {}", method, path, e);
        })
    }

    /// GET without a body.
    pub async fn get(&self, path: &str) -> BsResult<Vec<u8>> {
        self.request(Method::GET, path, &Blank).await
    }

    /// POST with the given parameters.
    pub async fn post<F: Form + ?Sized>(&self, path: &str, data: &F) -> BsResult<Vec<u8>> {
        self.request(Method::POST, path, data).await
    }

    /// PUT with the given parameters.
    pub async fn put<F: Form + ?Sized>(&self, path: &str, data: &F) -> BsResult<Vec<u8>> {
        self.request(Method::PUT, path, data).await
    }

    /// DELETE with the given parameters (usually [`Blank`]).
    pub async fn delete<F: Form + ?Sized>(&self, path: &str, data: &F) -> BsResult<Vec<u8>> {
        self.request(Method::DELETE, path, data).await
    }

    /// Whether a status code counts as success (200 through 208).
    pub fn is_success_status(status: u16) -> bool {
        (200..=208).contains(&status)
    }

    /// Pass success bodies through, turn anything else into an error.
    fn check_status(status: u16, raw: Vec<u8>) -> BsResult<Vec<u8>> {
        if Self::is_success_status(status) {
            Ok(raw)
        } else {
            Err(response::parse_failure(status, &raw))
        }
    }

    /// Classify a reqwest error into a BsError variant.
    fn classify_error(e: reqwest::Error) -> BsError {
        if e.is_timeout() {
            BsError::Timeout(e.to_string())
        } else if e.is_connect() {
            BsError::Http(format!("connection failed: {e}"))
        } else {
            BsError::Http(e.to_string())
        }
    }
}

/// Step-by-step construction of an [`ApiClient`].
#[derive(Debug, Clone, Default)]
pub struct ApiClientBuilder {
    config: ServerConfig,
}

impl ApiClientBuilder {
    /// Site URL, e.g. "https://docs.example.com".
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.config.url = url.into();
        self
    }

    /// API token id and secret.
    pub fn token(mut self, id: impl Into<String>, secret: impl Into<String>) -> Self {
        self.config.token_id = id.into();
        self.config.token_secret = secret.into();
        self
    }

    /// Requests per second (default 180).
    pub fn rate_limit(mut self, per_second: u32) -> Self {
        self.config.rate_limit = per_second;
        self
    }

    /// Skip TLS certificate verification.
    pub fn insecure(mut self, insecure: bool) -> Self {
        self.config.insecure = insecure;
        self
    }

    /// Per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
        self
    }

    pub fn build(self) -> BsResult<ApiClient> {
        ApiClient::new(&self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(url: &str) -> ApiClient {
        ApiClient::builder()
            .url(url)
            .token("id", "secret")
            .build()
            .unwrap()
    }

    #[test]
    fn test_url_joins_prefix() {
        let c = client("https://docs.example.com");
        assert_eq!(c.url("/books"), "https://docs.example.com/api/books");
        assert_eq!(c.url("books/1"), "https://docs.example.com/api/books/1");
    }

    #[test]
    fn test_url_trims_one_slash_each_side() {
        let c = client("https://docs.example.com/");
        assert_eq!(c.url("/books"), "https://docs.example.com/api/books");

        let c = client("https://docs.example.com//");
        assert_eq!(c.url("//books"), "https://docs.example.com//api//books");
    }

    #[test]
    fn test_url_keeps_subpath() {
        let c = client("https://example.com/wiki");
        assert_eq!(c.url("/pages?count=1"), "https://example.com/wiki/api/pages?count=1");
    }

    #[test]
    fn test_authorization_header() {
        assert_eq!(client("http://localhost").authorization(), "Token id:secret");
    }

    #[test]
    fn test_status_classification() {
        for status in 200..=208 {
            assert!(ApiClient::is_success_status(status), "{status} should succeed");
        }
        for status in [199, 209, 226, 301, 404, 500] {
            assert!(!ApiClient::is_success_status(status), "{status} should fail");
        }
    }

    #[test]
    fn test_check_status_failure_decodes_envelope() {
        let err = ApiClient::check_status(
            404,
            br#"{"error":{"code":404,"message":"Book not found"}}"#.to_vec(),
        )
        .unwrap_err();
        assert_eq!(err.api_code(), Some(404));
        assert!(err.to_string().contains("Book not found"));
    }

    #[test]
    fn test_builder_validation() {
        assert!(matches!(
            ApiClient::builder().build(),
            Err(BsError::MissingConfig(_))
        ));
        assert!(matches!(
            ApiClient::builder().url("http://localhost").rate_limit(0).build(),
            Err(BsError::Config(_))
        ));
    }

    #[test]
    fn test_builder_timeout_saturates() {
        let builder = ApiClient::builder().timeout(Duration::from_millis(1500));
        assert_eq!(builder.config.timeout_ms, 1500);

        let builder = ApiClient::builder().timeout(Duration::MAX);
        assert_eq!(builder.config.timeout_ms, u64::MAX);
    }

    #[test]
    fn test_builder_insecure() {
        let c = ApiClient::builder()
            .url("https://self-signed.local")
            .insecure(true)
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap();
        assert_eq!(c.base_url(), "https://self-signed.local");
    }
}
