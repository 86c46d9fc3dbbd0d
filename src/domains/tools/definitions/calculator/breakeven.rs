//! Breakeven BTC price tool.

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Number;

use crate::api::UpstreamRequest;
use crate::domains::tools::definitions::common::number_or_string;
use crate::domains::tools::{ApiTool, ToolResult};

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct BreakevenParams {
    #[schemars(description = "Hashrate in TH/s")]
    #[serde(deserialize_with = "number_or_string")]
    pub hashrate_th: Number,

    #[schemars(description = "Power consumption in watts")]
    #[serde(deserialize_with = "number_or_string")]
    pub power_watts: Number,

    #[schemars(description = "Electricity cost in $/kWh")]
    #[serde(deserialize_with = "number_or_string")]
    pub electricity_cost: Number,
}

#[derive(Debug, Clone, Default)]
pub struct BreakevenTool;

impl BreakevenTool {
    /// Upstream endpoint.
    pub const PATH: &'static str = "/calculator/breakeven";
}

impl ApiTool for BreakevenTool {
    const NAME: &'static str = "calculate_breakeven";

    const DESCRIPTION: &'static str = "Calculate breakeven BTC price for mining operation";

    type Params = BreakevenParams;

    // Unlike profitability, the profile travels as query parameters.
    fn upstream_request(params: BreakevenParams) -> ToolResult<UpstreamRequest> {
        Ok(UpstreamRequest::get(Self::PATH)
            .query("hashrate_th", params.hashrate_th)
            .query("power_watts", params.power_watts)
            .query("electricity_cost", params.electricity_cost)
            .into())
    }
}
