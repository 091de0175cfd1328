//! Transport core shared by every endpoint wrapper.

use std::sync::Arc;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use serde_json::Value;
use tracing::{Span, debug};
use uuid::Uuid;

use crate::config::ClientConfig;
use crate::session::Session;

use super::ApiError;

/// The HTTP header name for request IDs.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Client for the Mangust REST API.
///
/// Wraps `reqwest` with bearer authentication, per-request IDs for log
/// correlation, and uniform non-2xx handling. Endpoint wrappers are
/// defined in per-entity files as further `impl ApiClient` blocks.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http: reqwest::Client,
    base_url: String,
    bearer_token: Option<String>,
}

impl ApiClient {
    /// Create a client authenticated with the configured token, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        Self::build(config, config.access_token().map(String::from))
    }

    /// Create a client authenticated as the session's user.
    ///
    /// The session token takes precedence over any token in the
    /// configuration; the session is the live identity.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn with_session(config: &ClientConfig, session: &Session) -> Result<Self, ApiError> {
        Self::build(config, Some(session.access_token.clone()))
    }

    fn build(config: &ClientConfig, bearer_token: Option<String>) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder().default_headers(headers).build()?;

        Ok(Self {
            inner: Arc::new(ClientInner {
                http,
                base_url: config.api_url.clone(),
                bearer_token,
            }),
        })
    }

    /// Whether this client sends an Authorization header.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.inner.bearer_token.is_some()
    }

    /// GET `path` with query parameters.
    pub(crate) async fn get_json(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<Value, ApiError> {
        let request = self.inner.http.get(self.url(path)).query(query);
        self.execute(request).await
    }

    /// POST `body` to `path`.
    pub(crate) async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        let request = self.inner.http.post(self.url(path)).json(body);
        self.execute(request).await
    }

    /// PUT `body` to `path`.
    pub(crate) async fn put_json(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        let request = self.inner.http.put(self.url(path)).json(body);
        self.execute(request).await
    }

    /// DELETE `path`. The backend answers these with an empty body.
    pub(crate) async fn delete_json(&self, path: &str) -> Result<Value, ApiError> {
        let request = self.inner.http.delete(self.url(path));
        self.execute(request).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.inner.base_url)
    }

    /// Attach auth and a request ID, send, and map the response.
    ///
    /// Non-2xx statuses become [`ApiError::Api`] with the body text
    /// verbatim; empty 2xx bodies (DELETE, 204) become `Value::Null`.
    async fn execute(&self, mut request: reqwest::RequestBuilder) -> Result<Value, ApiError> {
        let request_id = Uuid::new_v4().to_string();
        Span::current().record("request_id", request_id.as_str());
        request = request.header(REQUEST_ID_HEADER, &request_id);

        if let Some(token) = &self.inner.bearer_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ApiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let text = response.text().await?;
        if text.trim().is_empty() {
            debug!(request_id, "empty response body");
            return Ok(Value::Null);
        }
        serde_json::from_str(&text).map_err(|e| ApiError::Parse(e.to_string()))
    }
}
