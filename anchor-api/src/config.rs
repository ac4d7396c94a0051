//! Server configuration loaded from the environment
//!
//! Recognized variables:
//! - NEWS_API_KEY / GNEWS_API_KEY: provider credentials (a missing key
//!   leaves that provider unregistered)
//! - NEWS_API_BASE_URL / GNEWS_BASE_URL: provider endpoints
//! - PROVIDER_TIMEOUT_SECS: per-call timeout for provider requests
//! - NEWS_WINDOW_DAYS / NEWS_MAX_RESULTS: feed window and cap
//! - PORT, FRONTEND_URL: listener port and allowed CORS origin

use std::str::FromStr;
use std::time::Duration;

use anchor_core::{AnchorError, AnchorResult};
use anchor_news::config::DEFAULT_TIMEOUT_SECS;
use anchor_news::ProviderConfig;
use anchor_services::NewsServiceConfig;

const DEFAULT_NEWS_API_BASE_URL: &str = "https://newsapi.org";
const DEFAULT_GNEWS_BASE_URL: &str = "https://gnews.io";
const DEFAULT_FRONTEND_URL: &str = "http://localhost:3000";
const DEFAULT_PORT: u16 = 3001;

/// Everything the binary needs to start
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub port: u16,
    /// Origin allowed by CORS (credentials included)
    pub frontend_url: String,
    pub news_api: Option<ProviderConfig>,
    pub gnews: Option<ProviderConfig>,
    pub news: NewsServiceConfig,
}

impl ApiConfig {
    /// Load configuration from process environment variables
    pub fn from_env() -> AnchorResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through `lookup`, treating blank values as unset
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> AnchorResult<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let timeout = Duration::from_secs(parse_or(
            get("PROVIDER_TIMEOUT_SECS"),
            "PROVIDER_TIMEOUT_SECS",
            DEFAULT_TIMEOUT_SECS,
        )?);

        let provider = |key_var: &str, url_var: &str, default_url: &str| {
            get(key_var)
                .map(|api_key| {
                    let base_url = get(url_var).unwrap_or_else(|| default_url.to_string());
                    ProviderConfig::new(api_key, &base_url)
                        .map(|c| c.with_timeout(timeout))
                        .map_err(|e| AnchorError::config(format!("{}: {}", key_var, e)))
                })
                .transpose()
        };

        let news_api = provider("NEWS_API_KEY", "NEWS_API_BASE_URL", DEFAULT_NEWS_API_BASE_URL)?;
        let gnews = provider("GNEWS_API_KEY", "GNEWS_BASE_URL", DEFAULT_GNEWS_BASE_URL)?;

        let defaults = NewsServiceConfig::default();
        let window_days = parse_or(
            get("NEWS_WINDOW_DAYS"),
            "NEWS_WINDOW_DAYS",
            defaults.window.num_days(),
        )?;
        if window_days <= 0 {
            return Err(AnchorError::config("NEWS_WINDOW_DAYS must be positive"));
        }
        let window = chrono::Duration::try_days(window_days).ok_or_else(|| {
            AnchorError::config(format!("NEWS_WINDOW_DAYS={} is out of range", window_days))
        })?;
        let max_results = parse_or(
            get("NEWS_MAX_RESULTS"),
            "NEWS_MAX_RESULTS",
            defaults.max_results,
        )?;

        Ok(Self {
            port: parse_or(get("PORT"), "PORT", DEFAULT_PORT)?,
            frontend_url: get("FRONTEND_URL").unwrap_or_else(|| DEFAULT_FRONTEND_URL.to_string()),
            news_api,
            gnews,
            news: NewsServiceConfig {
                window,
                max_results,
                ..defaults
            },
        })
    }
}

fn parse_or<T: FromStr>(value: Option<String>, key: &str, default: T) -> AnchorResult<T>
where
    T::Err: std::fmt::Display,
{
    match value {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| AnchorError::config(format!("{}='{}': {}", key, raw, e))),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> AnchorResult<ApiConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ApiConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config.port, 3001);
        assert_eq!(config.frontend_url, "http://localhost:3000");
        assert!(config.news_api.is_none());
        assert!(config.gnews.is_none());
        assert_eq!(config.news.window, chrono::Duration::days(7));
        assert_eq!(config.news.max_results, 100);
    }

    #[test]
    fn test_provider_keys_and_overrides() {
        let config = load(&[
            ("NEWS_API_KEY", "abc"),
            ("GNEWS_API_KEY", "def"),
            ("GNEWS_BASE_URL", "http://localhost:9000"),
            ("PROVIDER_TIMEOUT_SECS", "3"),
            ("NEWS_WINDOW_DAYS", "2"),
            ("NEWS_MAX_RESULTS", "25"),
            ("PORT", "8080"),
        ])
        .unwrap();

        let news_api = config.news_api.unwrap();
        assert_eq!(news_api.api_key, "abc");
        assert_eq!(news_api.base_url.as_str(), "https://newsapi.org/");
        assert_eq!(news_api.timeout, Duration::from_secs(3));

        let gnews = config.gnews.unwrap();
        assert_eq!(gnews.base_url.as_str(), "http://localhost:9000/");

        assert_eq!(config.news.window, chrono::Duration::days(2));
        assert_eq!(config.news.max_results, 25);
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn test_large_window_is_accepted() {
        let config = load(&[("NEWS_WINDOW_DAYS", "100000000")]).unwrap();
        assert_eq!(config.news.window, chrono::Duration::days(100_000_000));
    }

    #[test]
    fn test_blank_key_means_unconfigured() {
        let config = load(&[("NEWS_API_KEY", "  ")]).unwrap();
        assert!(config.news_api.is_none());
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(load(&[("PORT", "http")]), Err(AnchorError::Config(_))));
        assert!(matches!(
            load(&[("NEWS_WINDOW_DAYS", "0")]),
            Err(AnchorError::Config(_))
        ));
        assert!(matches!(
            load(&[("NEWS_WINDOW_DAYS", "200000000000000")]),
            Err(AnchorError::Config(_))
        ));
        assert!(matches!(
            load(&[("GNEWS_API_KEY", "k"), ("GNEWS_BASE_URL", "::")]),
            Err(AnchorError::Config(_))
        ));
    }
}
