//! Historical Bitcoin price tool.

use std::fmt;

use schemars::JsonSchema;
use serde::de::{self, IntoDeserializer};
use serde::{Deserialize, Deserializer, Serialize};

use crate::api::UpstreamRequest;
use crate::domains::tools::definitions::common::optional_string;
use crate::domains::tools::{ApiTool, ToolResult};

/// Sampling interval of a price series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Daily,
    Weekly,
    Monthly,
}

impl Granularity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct PriceHistoryParams {
    #[schemars(description = "Start date (YYYY-MM-DD)")]
    #[serde(default, deserialize_with = "optional_string")]
    pub from: Option<String>,

    #[schemars(description = "End date (YYYY-MM-DD)")]
    #[serde(default, deserialize_with = "optional_string")]
    pub to: Option<String>,

    // Left to the API when omitted (daily).
    #[schemars(description = "Data granularity (default: daily)")]
    #[serde(default, deserialize_with = "optional_granularity")]
    pub granularity: Option<Granularity>,
}

/// An empty granularity is omitted like the dates; anything else must name a
/// variant.
fn optional_granularity<'de, D>(deserializer: D) -> Result<Option<Granularity>, D::Error>
where
    D: Deserializer<'de>,
{
    match optional_string(deserializer)? {
        None => Ok(None),
        Some(raw) => {
            let raw: de::value::StringDeserializer<D::Error> = raw.into_deserializer();
            Granularity::deserialize(raw).map(Some)
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PriceHistoryTool;

impl PriceHistoryTool {
    /// Upstream endpoint.
    pub const PATH: &'static str = "/price/history";
}

impl ApiTool for PriceHistoryTool {
    const NAME: &'static str = "get_price_history";

    const DESCRIPTION: &'static str = "Get historical Bitcoin prices";

    type Params = PriceHistoryParams;

    fn upstream_request(params: PriceHistoryParams) -> ToolResult<UpstreamRequest> {
        Ok(UpstreamRequest::get(Self::PATH)
            .query_opt("from", params.from)
            .query_opt("to", params.to)
            .query_opt("granularity", params.granularity)
            .into())
    }
}
