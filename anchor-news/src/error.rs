//! Error types for the provider adapters

use anchor_core::{Provider, QueryError};
use thiserror::Error;

/// Errors that can occur while fetching from a provider
#[derive(Debug, Error)]
pub enum NewsError {
    /// Query rejected before any request was made
    #[error("Invalid query: {0}")]
    InvalidQuery(#[from] QueryError),

    /// HTTP request failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Provider did not answer within the adapter timeout
    #[error("Request timed out after {0}s")]
    Timeout(u64),

    /// API returned an error response
    #[error("API error (status {status}): {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Error message from API
        message: String,
    },

    /// Failed to parse API response
    #[error("Parse error: {0}")]
    ParseError(String),

    /// No adapter is registered for the provider
    #[error("Provider {0} is not configured")]
    NotConfigured(Provider),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl NewsError {
    /// Classify a transport error, keeping timeouts distinct
    pub(crate) fn from_reqwest(error: reqwest::Error, timeout_secs: u64) -> Self {
        if error.is_timeout() {
            NewsError::Timeout(timeout_secs)
        } else if error.is_decode() {
            NewsError::ParseError(error.to_string())
        } else {
            NewsError::RequestFailed(error.to_string())
        }
    }

    /// Whether the failure came from the network or the provider itself
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            NewsError::RequestFailed(_)
                | NewsError::Timeout(_)
                | NewsError::ApiError { .. }
                | NewsError::ParseError(_)
        )
    }
}
