//! Configuration for the API client.

use serde::{Deserialize, Serialize};
use std::env;
use tracing::{debug, info};

use crate::error::{ApiError, ApiResult};

/// Origin of the public Stellar Burgers service.
pub const DEFAULT_BASE_URL: &str = "https://stellarburgers.nomoreparties.site";

/// Environment variable overriding the base URL.
pub const BASE_URL_ENV: &str = "BURGER_API_BASE_URL";

/// Environment variable overriding the request timeout, in seconds.
pub const TIMEOUT_ENV: &str = "BURGER_API_TIMEOUT_SECS";

/// Client configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Origin every endpoint path is appended to
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Timeout in seconds for HTTP requests
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ApiConfig {
    /// Configuration pointing at the given origin with the default timeout.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: trim_base_url(base_url.into()),
            ..Default::default()
        }
    }

    /// Loads the configuration from the environment (and `.env`, if present).
    pub fn from_env() -> ApiResult<Self> {
        dotenv::dotenv().ok();

        let mut config = Self::default();

        if let Ok(base_url) = env::var(BASE_URL_ENV) {
            debug!(%base_url, "Base URL taken from environment");
            config.base_url = trim_base_url(base_url);
        }

        if let Ok(raw) = env::var(TIMEOUT_ENV) {
            config.timeout_secs = raw.trim().parse().map_err(|e| {
                ApiError::Config(format!(
                    "{} must be a number of seconds, got {:?}: {}",
                    TIMEOUT_ENV, raw, e
                ))
            })?;
        }

        if config.base_url.is_empty() {
            return Err(ApiError::Config(format!("{} must not be empty", BASE_URL_ENV)));
        }

        info!(
            base_url = %config.base_url,
            timeout_secs = config.timeout_secs,
            "Loaded API configuration"
        );
        Ok(config)
    }
}

fn trim_base_url(url: String) -> String {
    url.trim().trim_end_matches('/').to_string()
}
