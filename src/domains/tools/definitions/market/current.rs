//! Current market snapshot tool.

use crate::api::UpstreamRequest;
use crate::domains::tools::definitions::common::NoParams;
use crate::domains::tools::{ApiTool, ToolResult};

/// BTC price, market cap and volume, network difficulty and hashrate, block
/// height, and the current hashprice and fee share of block rewards.
#[derive(Debug, Clone, Default)]
pub struct MarketDataTool;

impl MarketDataTool {
    /// Upstream endpoint.
    pub const PATH: &'static str = "/market/current";
}

impl ApiTool for MarketDataTool {
    const NAME: &'static str = "get_market_data";

    const DESCRIPTION: &'static str = "Get current Bitcoin market and mining data including price, hashprice, difficulty, and network stats";

    type Params = NoParams;

    fn upstream_request(_params: NoParams) -> ToolResult<UpstreamRequest> {
        Ok(UpstreamRequest::get(Self::PATH).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::build_request;
    use serde_json::json;

    #[test]
    fn test_plain_get() {
        let request = build_request::<MarketDataTool>(Default::default()).unwrap();
        assert_eq!(request, UpstreamRequest::from(UpstreamRequest::get("/market/current")));
    }

    #[test]
    fn test_stray_arguments_ignored() {
        let args = json!({"limit": 5}).as_object().cloned().unwrap();
        let request = build_request::<MarketDataTool>(args).unwrap();
        assert_eq!(request.path_and_query().unwrap(), "/market/current");
    }
}
