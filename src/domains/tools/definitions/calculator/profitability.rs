//! Mining profitability calculator tool.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Number;

use crate::api::UpstreamRequest;
use crate::domains::tools::definitions::common::{number_or_string, optional_number_or_string};
use crate::domains::tools::{ApiTool, ToolResult};

/// Pool fee applied when the caller gives none, in percent.
pub const DEFAULT_POOL_FEE_PCT: u64 = 2;

/// Projection window applied when the caller gives none, in days.
pub const DEFAULT_DAYS: u64 = 30;

// Only the operating profile is required; fee and window fall back to the
// defaults above.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ProfitabilityParams {
    #[schemars(description = "Hashrate in TH/s")]
    #[serde(deserialize_with = "number_or_string")]
    pub hashrate_th: Number,

    #[schemars(description = "Power consumption in watts")]
    #[serde(deserialize_with = "number_or_string")]
    pub power_watts: Number,

    #[schemars(description = "Electricity cost in $/kWh")]
    #[serde(deserialize_with = "number_or_string")]
    pub electricity_cost: Number,

    #[schemars(description = "BTC price (optional, uses current if not provided)")]
    #[serde(default, deserialize_with = "optional_number_or_string")]
    pub btc_price: Option<Number>,

    #[schemars(description = "Pool fee percentage (default: 2)")]
    #[serde(default, deserialize_with = "optional_number_or_string")]
    pub pool_fee_pct: Option<Number>,

    #[schemars(description = "Number of days to calculate (default: 30)")]
    #[serde(default, deserialize_with = "optional_number_or_string")]
    pub days: Option<Number>,
}

/// JSON body posted upstream. `btc_price` is left out rather than sent as null.
#[derive(Debug, Clone, Serialize)]
struct ProfitabilityBody {
    hashrate_th: Number,
    power_watts: Number,
    electricity_cost: Number,
    #[serde(skip_serializing_if = "Option::is_none")]
    btc_price: Option<Number>,
    pool_fee_pct: Number,
    days: Number,
}

impl From<ProfitabilityParams> for ProfitabilityBody {
    fn from(params: ProfitabilityParams) -> Self {
        Self {
            hashrate_th: params.hashrate_th,
            power_watts: params.power_watts,
            electricity_cost: params.electricity_cost,
            btc_price: params.btc_price,
            pool_fee_pct: params
                .pool_fee_pct
                .unwrap_or_else(|| DEFAULT_POOL_FEE_PCT.into()),
            days: params.days.unwrap_or_else(|| DEFAULT_DAYS.into()),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ProfitabilityTool;

impl ProfitabilityTool {
    /// Upstream endpoint.
    pub const PATH: &'static str = "/calculator/profitability";
}

impl ApiTool for ProfitabilityTool {
    const NAME: &'static str = "calculate_profitability";

    const DESCRIPTION: &'static str =
        "Calculate mining profitability for given hashrate and electricity cost";

    type Params = ProfitabilityParams;

    fn upstream_request(params: ProfitabilityParams) -> ToolResult<UpstreamRequest> {
        let body = serde_json::to_value(ProfitabilityBody::from(params))?;
        Ok(UpstreamRequest::post(Self::PATH, body))
    }
}
