//! Historical difficulty and hashrate tool.

use schemars::JsonSchema;
use serde::Deserialize;

use crate::api::UpstreamRequest;
use crate::domains::tools::definitions::common::optional_string;
use crate::domains::tools::{ApiTool, ToolResult};

#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct DifficultyHistoryParams {
    #[schemars(description = "Start date (YYYY-MM-DD)")]
    #[serde(default, deserialize_with = "optional_string")]
    pub from: Option<String>,

    #[schemars(description = "End date (YYYY-MM-DD)")]
    #[serde(default, deserialize_with = "optional_string")]
    pub to: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct DifficultyHistoryTool;

impl DifficultyHistoryTool {
    /// Upstream endpoint.
    pub const PATH: &'static str = "/difficulty/history";
}

impl ApiTool for DifficultyHistoryTool {
    const NAME: &'static str = "get_difficulty_history";

    const DESCRIPTION: &'static str = "Get historical difficulty and hashrate data";

    type Params = DifficultyHistoryParams;

    fn upstream_request(params: DifficultyHistoryParams) -> ToolResult<UpstreamRequest> {
        Ok(UpstreamRequest::get(Self::PATH)
            .query_opt("from", params.from)
            .query_opt("to", params.to)
            .into())
    }
}
