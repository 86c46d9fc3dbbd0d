//! ASIC miner price statistics tool.

use crate::api::UpstreamRequest;
use crate::domains::tools::definitions::common::NoParams;
use crate::domains::tools::{ApiTool, ToolResult};

#[derive(Debug, Clone, Default)]
pub struct AsicPricesTool;

impl AsicPricesTool {
    /// Upstream endpoint.
    pub const PATH: &'static str = "/asic-prices/stats";
}

impl ApiTool for AsicPricesTool {
    const NAME: &'static str = "get_asic_prices";

    const DESCRIPTION: &'static str = "Get ASIC miner price data and efficiency stats";

    type Params = NoParams;

    fn upstream_request(_params: NoParams) -> ToolResult<UpstreamRequest> {
        Ok(UpstreamRequest::get(Self::PATH).into())
    }
}
