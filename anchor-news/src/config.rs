//! Adapter configuration

use std::time::Duration;

use url::Url;

use crate::error::NewsError;

/// Default per-call timeout for provider requests
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Credentials and endpoint for one provider adapter
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// API key sent with every request
    pub api_key: String,
    /// Scheme and host of the provider API (path segments are added by the adapter)
    pub base_url: Url,
    /// Timeout covering connect, request and body
    pub timeout: Duration,
}

impl ProviderConfig {
    /// Build a config, checking the key and base URL
    pub fn new(api_key: impl Into<String>, base_url: &str) -> Result<Self, NewsError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(NewsError::InvalidConfig("API key is empty".to_string()));
        }

        let base_url = Url::parse(base_url)
            .map_err(|e| NewsError::InvalidConfig(format!("base URL '{}': {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(NewsError::InvalidConfig(format!(
                "base URL '{}' cannot carry a path",
                base_url
            )));
        }

        Ok(Self {
            api_key,
            base_url,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Join `path` onto the base URL, keeping any path prefix the base has
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
