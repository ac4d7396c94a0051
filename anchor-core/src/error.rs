//! Error types for the aggregator

use thiserror::Error;

/// Workspace-wide error type
///
/// Provider failures never appear here: adapters report them as failed
/// query results and the aggregator absorbs them.
#[derive(Error, Debug)]
pub enum AnchorError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AnchorError {
    pub fn config(msg: impl Into<String>) -> Self {
        AnchorError::Config(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AnchorError::Internal(msg.into())
    }
}

/// Result type alias for aggregator operations
pub type AnchorResult<T> = Result<T, AnchorError>;
