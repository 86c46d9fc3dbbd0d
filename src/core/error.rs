//! Error types and handling for the MCP server.
//!
//! Only server construction and the JSON rendering used by the HTTP
//! transport can fail at this level; tool failures never leave the registry
//! and transport failures are returned by the transport itself.

use thiserror::Error;

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the MCP server.
#[derive(Debug, Error)]
pub enum Error {
    /// The upstream API client or usage tracker could not be built.
    #[error("API error: {0}")]
    Api(#[from] crate::api::ApiError),

    /// JSON serialization/deserialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;

    #[test]
    fn test_api_error_converts() {
        let err: Error = ApiError::config("bad TLS backend").into();
        assert!(matches!(err, Error::Api(_)));
        assert_eq!(
            err.to_string(),
            "API error: Configuration error: bad TLS backend"
        );
    }
}
