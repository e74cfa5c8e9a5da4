//! HTTP client adapter for the ordering API.

use std::time::Duration;

use reqwest::{header, Client, Method, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use tracing::{debug, instrument};

use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult};

/// Name of the header carrying the access token. The service expects the
/// raw token value (including its `Bearer ` prefix) without further wrapping.
pub const AUTHORIZATION_HEADER: &str = "authorization";

/// Client for issuing requests against the ordering API
#[derive(Debug, Clone)]
pub struct BurgerApiClient {
    config: ApiConfig,
    client: Client,
}

/// A response as seen by the steps: the status code and the parsed body.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: StatusCode,
    /// Parsed JSON body. Non-JSON bodies are kept as a string, empty ones as null.
    pub body: Value,
}

impl BurgerApiClient {
    /// Creates a new client with the provided configuration
    pub fn new(config: ApiConfig) -> ApiResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }

    /// Creates a client for the given origin with the default timeout
    pub fn with_base_url(base_url: impl Into<String>) -> ApiResult<Self> {
        Self::new(ApiConfig::with_base_url(base_url))
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Issues one request. `Content-Type: application/json` is always sent,
    /// the authorization header only when a token is supplied.
    #[instrument(skip(self, body, token), fields(authorized = token.is_some()))]
    pub async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        token: Option<&str>,
    ) -> ApiResult<ApiResponse> {
        let url = format!("{}{}", self.config.base_url, path);

        let mut request = self
            .client
            .request(method.clone(), &url)
            .header(header::CONTENT_TYPE, "application/json");

        if let Some(token) = token {
            request = request.header(AUTHORIZATION_HEADER, token);
        }

        if let Some(body) = body {
            let payload = serde_json::to_vec(body)?;
            debug!(%method, %url, body = %String::from_utf8_lossy(&payload), "Sending request");
            request = request.body(payload);
        } else {
            debug!(%method, %url, "Sending request");
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;
        let body = parse_body(&text);

        debug!(status = status.as_u16(), %body, "Received response");

        Ok(ApiResponse { status, body })
    }

    pub async fn get(&self, path: &str, token: Option<&str>) -> ApiResult<ApiResponse> {
        self.send::<()>(Method::GET, path, None, token).await
    }

    pub async fn post<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        token: Option<&str>,
    ) -> ApiResult<ApiResponse> {
        self.send(Method::POST, path, Some(body), token).await
    }

    pub async fn patch<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        token: Option<&str>,
    ) -> ApiResult<ApiResponse> {
        self.send(Method::PATCH, path, Some(body), token).await
    }

    pub async fn delete(&self, path: &str, token: Option<&str>) -> ApiResult<ApiResponse> {
        self.send::<()>(Method::DELETE, path, None, token).await
    }
}

fn parse_body(text: &str) -> Value {
    if text.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
}

impl ApiResponse {
    pub fn status_code(&self) -> u16 {
        self.status.as_u16()
    }

    /// Looks up a field by dotted path, e.g. `order.owner.email`.
    pub fn field(&self, path: &str) -> Option<&Value> {
        if path.is_empty() {
            return Some(&self.body);
        }
        let pointer = format!("/{}", path.replace('.', "/"));
        self.body.pointer(&pointer)
    }

    pub fn str_field(&self, path: &str) -> Option<&str> {
        self.field(path).and_then(Value::as_str)
    }

    pub fn access_token(&self) -> Option<&str> {
        self.str_field("accessToken")
    }

    pub fn refresh_token(&self) -> Option<&str> {
        self.str_field("refreshToken")
    }

    /// Decodes the body into a typed value.
    pub fn json<T: DeserializeOwned>(&self) -> ApiResult<T> {
        serde_json::from_value(self.body.clone()).map_err(|e| {
            ApiError::UnexpectedBody(format!(
                "status {} body could not be decoded: {}; body: {}",
                self.status_code(),
                e,
                self.body
            ))
        })
    }
}
