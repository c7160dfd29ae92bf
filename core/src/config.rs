//! Client configuration.
//!
//! # Design
//! The base URL used to be read from a persisted key-value store at module
//! load; it is now an explicit value constructed once and handed to
//! [`ApiClient::new`](crate::ApiClient::new). Resolution stays the same: a
//! stored override wins, otherwise the hardcoded default endpoint.

/// Endpoint used when no override is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Environment variable holding the persisted base URL override.
pub const BASE_URL_VAR: &str = "TASKS_API_URL";

/// Immutable client configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
}

impl Config {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Resolve the base URL from the `TASKS_API_URL` environment variable,
    /// falling back to [`DEFAULT_BASE_URL`].
    pub fn from_env() -> Self {
        Self::resolve(std::env::var(BASE_URL_VAR).ok())
    }

    fn resolve(stored: Option<String>) -> Self {
        Self {
            base_url: stored.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::resolve(None)
    }
}
