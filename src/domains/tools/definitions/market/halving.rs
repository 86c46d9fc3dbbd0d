//! Halving information tool.

use crate::api::UpstreamRequest;
use crate::domains::tools::definitions::common::NoParams;
use crate::domains::tools::{ApiTool, ToolResult};

/// Current subsidy era, next halving estimate and circulating supply.
#[derive(Debug, Clone, Default)]
pub struct HalvingInfoTool;

impl HalvingInfoTool {
    /// Upstream endpoint.
    pub const PATH: &'static str = "/market/halving";
}

impl ApiTool for HalvingInfoTool {
    const NAME: &'static str = "get_halving_info";

    const DESCRIPTION: &'static str = "Get Bitcoin halving information - current era, next halving date, supply stats";

    type Params = NoParams;

    fn upstream_request(_params: NoParams) -> ToolResult<UpstreamRequest> {
        Ok(UpstreamRequest::get(Self::PATH).into())
    }
}
