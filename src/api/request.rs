//! Upstream request description.
//!
//! Tools translate their validated arguments into an `UpstreamRequest`; the
//! client then turns it into exactly one HTTP call. Requests are built fresh
//! for every tool call and never reused.

use serde_json::Value;

use super::error::{ApiError, ApiResult};

/// A single call against the market-data API.
#[derive(Debug, Clone, PartialEq)]
pub enum UpstreamRequest {
    /// `GET path?query`.
    Get(GetRequest),

    /// `POST path` with a JSON body.
    Post { path: &'static str, body: Value },
}

/// GET request builder. Query pairs are kept in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct GetRequest {
    path: &'static str,
    query: Vec<(&'static str, String)>,
}

impl GetRequest {
    /// Append a query parameter.
    pub fn query(mut self, key: &'static str, value: impl ToString) -> Self {
        self.query.push((key, value.to_string()));
        self
    }

    /// Append a query parameter only when a non-empty value is present.
    pub fn query_opt(self, key: &'static str, value: Option<impl ToString>) -> Self {
        match value.map(|v| v.to_string()) {
            Some(v) if !v.is_empty() => self.query(key, v),
            _ => self,
        }
    }

    /// Render the path with its URL-encoded query string appended.
    pub fn path_and_query(&self) -> ApiResult<String> {
        if self.query.is_empty() {
            return Ok(self.path.to_string());
        }
        let encoded =
            serde_urlencoded::to_string(&self.query).map_err(|e| ApiError::encode(e.to_string()))?;
        Ok(format!("{}?{}", self.path, encoded))
    }
}

impl From<GetRequest> for UpstreamRequest {
    fn from(request: GetRequest) -> Self {
        Self::Get(request)
    }
}

impl UpstreamRequest {
    /// Start a GET request without query parameters.
    pub fn get(path: &'static str) -> GetRequest {
        GetRequest {
            path,
            query: Vec::new(),
        }
    }

    /// Create a POST request with the given JSON body.
    pub fn post(path: &'static str, body: Value) -> Self {
        Self::Post { path, body }
    }

    /// The request path, without query string.
    pub fn path(&self) -> &'static str {
        match self {
            Self::Get(request) => request.path,
            Self::Post { path, .. } => path,
        }
    }

    /// HTTP method name, for logging.
    pub fn method(&self) -> &'static str {
        match self {
            Self::Get(_) => "GET",
            Self::Post { .. } => "POST",
        }
    }

    /// The path the client resolves against its base URL, query included.
    pub fn path_and_query(&self) -> ApiResult<String> {
        match self {
            Self::Get(request) => request.path_and_query(),
            Self::Post { path, .. } => Ok(path.to_string()),
        }
    }
}
