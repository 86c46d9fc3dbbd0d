//! Network difficulty tool.

use crate::api::UpstreamRequest;
use crate::domains::tools::definitions::common::NoParams;
use crate::domains::tools::{ApiTool, ToolResult};

#[derive(Debug, Clone, Default)]
pub struct DifficultyTool;

impl DifficultyTool {
    /// Upstream endpoint.
    pub const PATH: &'static str = "/market/difficulty";
}

impl ApiTool for DifficultyTool {
    const NAME: &'static str = "get_difficulty";

    const DESCRIPTION: &'static str = "Get current difficulty and next adjustment prediction";

    type Params = NoParams;

    fn upstream_request(_params: NoParams) -> ToolResult<UpstreamRequest> {
        Ok(UpstreamRequest::get(Self::PATH).into())
    }
}
