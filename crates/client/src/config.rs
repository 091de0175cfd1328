//! Client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `MANGUST_API_URL` - Backend base URL (default: `http://localhost:8080/api/v1`)
//! - `MANGUST_ACCESS_TOKEN` - Bearer token for unattended use (the CLI
//!   normally obtains one via `login` instead)

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;
use url::Url;

/// Default backend endpoint used by local development setups.
const DEFAULT_API_URL: &str = "http://localhost:8080/api/v1";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Client configuration.
///
/// Implements `Debug` manually to redact the access token.
#[derive(Clone)]
pub struct ClientConfig {
    /// Backend base URL, without a trailing slash.
    pub api_url: String,
    /// Bearer token for unattended use (service accounts, CI).
    pub access_token: Option<SecretString>,
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_url", &self.api_url)
            .field(
                "access_token",
                &self.access_token.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `MANGUST_API_URL` is present but not a
    /// valid absolute URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let api_url = get_env_or_default("MANGUST_API_URL", DEFAULT_API_URL);
        let api_url = validate_api_url(&api_url)?;
        let access_token = get_optional_env("MANGUST_ACCESS_TOKEN").map(SecretString::from);

        Ok(Self {
            api_url,
            access_token,
        })
    }

    /// Build a configuration pointing at `api_url` with no token.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `api_url` is not a valid absolute URL.
    pub fn for_url(api_url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            api_url: validate_api_url(api_url)?,
            access_token: None,
        })
    }

    /// The configured token, when set.
    #[must_use]
    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_ref().map(ExposeSecret::expose_secret)
    }
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Validate the base URL and strip any trailing slash so endpoint paths
/// can be appended verbatim.
fn validate_api_url(raw: &str) -> Result<String, ConfigError> {
    let url = Url::parse(raw)
        .map_err(|e| ConfigError::InvalidEnvVar("MANGUST_API_URL".to_string(), e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidEnvVar(
            "MANGUST_API_URL".to_string(),
            format!("unsupported scheme: {}", url.scheme()),
        ));
    }
    Ok(raw.trim_end_matches('/').to_string())
}
