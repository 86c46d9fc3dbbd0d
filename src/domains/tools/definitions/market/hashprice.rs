//! Hashprice tool.

use crate::api::UpstreamRequest;
use crate::domains::tools::definitions::common::NoParams;
use crate::domains::tools::{ApiTool, ToolResult};

#[derive(Debug, Clone, Default)]
pub struct HashpriceTool;

impl HashpriceTool {
    /// Served by the calculator API, not the market API.
    pub const PATH: &'static str = "/calculator/hashprice";
}

impl ApiTool for HashpriceTool {
    const NAME: &'static str = "get_hashprice";

    const DESCRIPTION: &'static str = "Get current hashprice (mining revenue per PH/day) with detailed breakdown";

    type Params = NoParams;

    fn upstream_request(_params: NoParams) -> ToolResult<UpstreamRequest> {
        Ok(UpstreamRequest::get(Self::PATH).into())
    }
}
