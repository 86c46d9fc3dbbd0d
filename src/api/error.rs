//! Upstream API error types.

use reqwest::StatusCode;
use thiserror::Error;

/// Result type for upstream API operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors that can occur while calling the market-data API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The API answered with a non-2xx status. The body is not inspected.
    #[error("API error: {status} {status_text}")]
    Status { status: u16, status_text: String },

    /// Network failure, or a response body that is not valid JSON.
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Query parameters could not be URL-encoded.
    #[error("Failed to encode query: {0}")]
    Encode(String),

    /// The HTTP client could not be built from the configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ApiError {
    /// Create a status error from a response status code.
    pub fn status(status: StatusCode) -> Self {
        Self::Status {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
        }
    }

    /// Create an encoding error.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// The HTTP status code, if this error came from a non-2xx response.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
