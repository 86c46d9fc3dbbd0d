//! Tool-specific error types.

use thiserror::Error;

use crate::api::ApiError;

/// Result type for tool execution.
pub type ToolResult<T> = Result<T, ToolError>;

/// Errors that can occur during tool operations.
///
/// None of these escape the dispatcher: they are rendered as error-flagged
/// text results.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool is not in the catalogue.
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// Arguments failed validation or coercion.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// The upstream call failed.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// A request body or response could not be (de)serialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ToolError {
    /// Create a new "unknown tool" error.
    pub fn unknown_tool(name: impl Into<String>) -> Self {
        Self::UnknownTool(name.into())
    }

    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_tool_message() {
        let err = ToolError::unknown_tool("get_weather");
        assert_eq!(err.to_string(), "Unknown tool: get_weather");
    }

    #[test]
    fn test_api_error_is_transparent() {
        let err: ToolError = ApiError::status(reqwest::StatusCode::BAD_GATEWAY).into();
        assert_eq!(err.to_string(), "API error: 502 Bad Gateway");
    }
}
