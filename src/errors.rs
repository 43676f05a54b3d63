use chrono::{ DateTime, Utc };
use serde::Serialize;
use thiserror::Error;

use crate::config::ConfigError;

/// Custom error types for the FactWatch client
#[derive(Debug, Error)]
pub enum FactWatchError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP error: {status} - {message}")]
    Http { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("System error: {0}")]
    System(String),
}

/// Result type specific to FactWatch operations
pub type FactWatchResult<T> = Result<T, FactWatchError>;

/// Coarse classification of a failure, kept alongside its message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Network,
    Http,
    Parse,
    Config,
    InvalidInput,
    System,
}

/// A cloneable record of a failure, suitable for storing in state
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorInfo {
    pub kind: ErrorKind,
    pub message: String,
    pub occurred_at: DateTime<Utc>,
}

impl ErrorInfo {
    pub fn from_error(err: &FactWatchError) -> Self {
        Self {
            kind: err.kind(),
            message: err.to_string(),
            occurred_at: Utc::now(),
        }
    }
}

impl FactWatchError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            FactWatchError::Network(_) => ErrorKind::Network,
            FactWatchError::Http { .. } => ErrorKind::Http,
            FactWatchError::Parse(_) => ErrorKind::Parse,
            FactWatchError::Config(_) => ErrorKind::Config,
            FactWatchError::InvalidInput(_) => ErrorKind::InvalidInput,
            FactWatchError::System(_) => ErrorKind::System,
        }
    }
}

/// Recoverable vs. non-recoverable errors
pub trait RecoverableError {
    fn is_recoverable(&self) -> bool;
    fn recovery_strategy(&self) -> Option<String>;
}

impl RecoverableError for FactWatchError {
    fn is_recoverable(&self) -> bool {
        matches!(
            self,
            FactWatchError::Network(_) | FactWatchError::Http { .. } | FactWatchError::Parse(_)
        )
    }

    fn recovery_strategy(&self) -> Option<String> {
        match self {
            FactWatchError::Network(_) =>
                Some("check that the fact-checking service is reachable".to_string()),
            FactWatchError::Http { status, .. } if *status >= 500 =>
                Some("the service reported an internal error; the next tick will retry".to_string()),
            FactWatchError::Http { .. } => Some("check the configured API base URL".to_string()),
            FactWatchError::Parse(_) =>
                Some("the service returned an unexpected payload; check client/server versions".to_string()),
            _ => None,
        }
    }
}
