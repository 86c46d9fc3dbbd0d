//! Recent blocks tool.

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Number;

use crate::api::UpstreamRequest;
use crate::domains::tools::definitions::common::optional_number_or_string;
use crate::domains::tools::{ApiTool, ToolResult};

/// Number of blocks returned when the caller gives no limit.
pub const DEFAULT_LIMIT: u64 = 10;

#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct RecentBlocksParams {
    #[schemars(description = "Number of blocks to return (default: 10)")]
    #[serde(default, deserialize_with = "optional_number_or_string")]
    pub limit: Option<Number>,
}

#[derive(Debug, Clone, Default)]
pub struct RecentBlocksTool;

impl RecentBlocksTool {
    /// Upstream endpoint.
    pub const PATH: &'static str = "/network/blocks";
}

impl ApiTool for RecentBlocksTool {
    const NAME: &'static str = "get_recent_blocks";

    const DESCRIPTION: &'static str = "Get recent Bitcoin blocks";

    type Params = RecentBlocksParams;

    fn upstream_request(params: RecentBlocksParams) -> ToolResult<UpstreamRequest> {
        let limit = params.limit.unwrap_or_else(|| DEFAULT_LIMIT.into());
        Ok(UpstreamRequest::get(Self::PATH).query("limit", limit).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::build_request;
    use serde_json::json;

    fn path_for(args: serde_json::Value) -> String {
        build_request::<RecentBlocksTool>(args.as_object().cloned().unwrap())
            .unwrap()
            .path_and_query()
            .unwrap()
    }

    #[test]
    fn test_default_limit() {
        assert_eq!(path_for(json!({})), "/network/blocks?limit=10");
    }

    #[test]
    fn test_explicit_limit() {
        assert_eq!(path_for(json!({"limit": 25})), "/network/blocks?limit=25");
        assert_eq!(path_for(json!({"limit": "3"})), "/network/blocks?limit=3");
    }
}
