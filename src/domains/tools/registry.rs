//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - The fixed tool catalogue, in a stable order
//! - Name-based dispatch for tool calls, shared by every transport
//! - The error-wrapping boundary: no failure leaves `call_tool` as anything
//!   but an error-flagged text result

use std::sync::Arc;

use rmcp::model::{CallToolResult, JsonObject, Tool};
use serde_json::Value;
use tracing::{info, warn};

use super::definitions::common::{error_result, json_result};
use super::definitions::{
    AsicPricesTool, BreakevenTool, DifficultyHistoryTool, DifficultyTool, HalvingInfoTool,
    HashpriceTool, MarketDataTool, MempoolTool, PriceHistoryTool, ProfitabilityTool,
    RecentBlocksTool,
};
use super::error::{ToolError, ToolResult};
use super::handlers::{ApiTool, execute, to_tool};
use crate::api::{MiningApiClient, UsageTracker};

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry - owns the catalogue and dispatches calls to the API client.
///
/// The registry is immutable after construction, so concurrent calls need no
/// locking.
pub struct ToolRegistry {
    client: Arc<MiningApiClient>,
    tracker: UsageTracker,
}

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new(client: Arc<MiningApiClient>, tracker: UsageTracker) -> Self {
        Self { client, tracker }
    }

    /// Get all tool names, in catalogue order.
    pub fn tool_names() -> Vec<&'static str> {
        vec![
            MarketDataTool::NAME,
            HashpriceTool::NAME,
            DifficultyTool::NAME,
            HalvingInfoTool::NAME,
            PriceHistoryTool::NAME,
            DifficultyHistoryTool::NAME,
            ProfitabilityTool::NAME,
            BreakevenTool::NAME,
            MempoolTool::NAME,
            RecentBlocksTool::NAME,
            AsicPricesTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata).
    ///
    /// This is the single source of truth for all available tools.
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            to_tool::<MarketDataTool>(),
            to_tool::<HashpriceTool>(),
            to_tool::<DifficultyTool>(),
            to_tool::<HalvingInfoTool>(),
            to_tool::<PriceHistoryTool>(),
            to_tool::<DifficultyHistoryTool>(),
            to_tool::<ProfitabilityTool>(),
            to_tool::<BreakevenTool>(),
            to_tool::<MempoolTool>(),
            to_tool::<RecentBlocksTool>(),
            to_tool::<AsicPricesTool>(),
        ]
    }

    /// Handle a tool call.
    ///
    /// Reports usage, dispatches, and wraps the outcome as a single text
    /// content block: pretty-printed JSON on success, `Error: <message>` with
    /// `isError` set on failure.
    pub async fn call_tool(&self, name: &str, arguments: Option<JsonObject>) -> CallToolResult {
        self.tracker.track(name);

        match self.dispatch(name, arguments.unwrap_or_default()).await {
            Ok(value) => {
                info!("Tool {} completed", name);
                json_result(&value)
            }
            Err(e) => error_result(&format!("Error: {}", e)),
        }
    }

    /// Resolve a tool by name and execute it.
    pub async fn dispatch(&self, name: &str, arguments: JsonObject) -> ToolResult<Value> {
        let client = self.client.as_ref();
        match name {
            MarketDataTool::NAME => execute::<MarketDataTool>(client, arguments).await,
            HashpriceTool::NAME => execute::<HashpriceTool>(client, arguments).await,
            DifficultyTool::NAME => execute::<DifficultyTool>(client, arguments).await,
            HalvingInfoTool::NAME => execute::<HalvingInfoTool>(client, arguments).await,
            PriceHistoryTool::NAME => execute::<PriceHistoryTool>(client, arguments).await,
            DifficultyHistoryTool::NAME => {
                execute::<DifficultyHistoryTool>(client, arguments).await
            }
            ProfitabilityTool::NAME => execute::<ProfitabilityTool>(client, arguments).await,
            BreakevenTool::NAME => execute::<BreakevenTool>(client, arguments).await,
            MempoolTool::NAME => execute::<MempoolTool>(client, arguments).await,
            RecentBlocksTool::NAME => execute::<RecentBlocksTool>(client, arguments).await,
            AsicPricesTool::NAME => execute::<AsicPricesTool>(client, arguments).await,
            _ => {
                warn!("Unknown tool requested: {}", name);
                Err(ToolError::unknown_tool(name))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::ApiConfig;
    use rmcp::model::RawContent;
    use std::collections::HashSet;

    fn test_registry() -> ToolRegistry {
        let client = MiningApiClient::new(&ApiConfig {
            base_url: "http://127.0.0.1:1".to_string(),
            api_key: None,
        })
        .unwrap();
        let tracker = UsageTracker::new(None, "test").unwrap();
        ToolRegistry::new(Arc::new(client), tracker)
    }

    fn schema_of(name: &str) -> serde_json::Map<String, Value> {
        ToolRegistry::get_all_tools()
            .into_iter()
            .find(|t| t.name == name)
            .map(|t| (*t.input_schema).clone())
            .unwrap()
    }

    fn property_names(schema: &serde_json::Map<String, Value>) -> HashSet<String> {
        schema
            .get("properties")
            .and_then(|p| p.as_object())
            .map(|p| p.keys().cloned().collect())
            .unwrap_or_default()
    }

    fn required_names(schema: &serde_json::Map<String, Value>) -> HashSet<String> {
        schema
            .get("required")
            .and_then(|r| r.as_array())
            .map(|r| {
                r.iter()
                    .filter_map(|v| v.as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default()
    }

    fn set(names: &[&str]) -> HashSet<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_catalogue_has_eleven_unique_tools() {
        let tools = ToolRegistry::get_all_tools();
        assert_eq!(tools.len(), 11);

        let names: HashSet<_> = tools.iter().map(|t| t.name.to_string()).collect();
        assert_eq!(names.len(), 11);

        for tool in &tools {
            assert!(tool.description.is_some(), "{} has no description", tool.name);
        }
    }

    #[test]
    fn test_catalogue_order_is_stable() {
        let listed: Vec<String> = ToolRegistry::get_all_tools()
            .iter()
            .map(|t| t.name.to_string())
            .collect();
        assert_eq!(listed, ToolRegistry::tool_names());
        assert_eq!(listed[0], "get_market_data");
        assert_eq!(listed[10], "get_asic_prices");
    }

    #[test]
    fn test_parameterless_schemas() {
        for name in [
            "get_market_data",
            "get_hashprice",
            "get_difficulty",
            "get_halving_info",
            "get_mempool",
            "get_asic_prices",
        ] {
            let schema = schema_of(name);
            assert_eq!(schema.get("type"), Some(&Value::from("object")), "{}", name);
            assert_eq!(
                schema.get("properties"),
                Some(&Value::Object(Default::default())),
                "{}",
                name
            );
            assert!(required_names(&schema).is_empty(), "{} has required", name);
            assert!(schema.get("description").is_none(), "{} has description", name);
        }
    }

    #[test]
    fn test_history_schemas() {
        let price = schema_of("get_price_history");
        assert_eq!(property_names(&price), set(&["from", "to", "granularity"]));
        assert!(required_names(&price).is_empty());

        assert!(price.get("description").is_none());

        let difficulty = schema_of("get_difficulty_history");
        assert_eq!(property_names(&difficulty), set(&["from", "to"]));
        assert!(required_names(&difficulty).is_empty());
    }

    #[test]
    fn test_calculator_schemas() {
        let profitability = schema_of("calculate_profitability");
        assert_eq!(
            property_names(&profitability),
            set(&[
                "hashrate_th",
                "power_watts",
                "electricity_cost",
                "btc_price",
                "pool_fee_pct",
                "days"
            ])
        );
        assert_eq!(
            required_names(&profitability),
            set(&["hashrate_th", "power_watts", "electricity_cost"])
        );

        let breakeven = schema_of("calculate_breakeven");
        assert_eq!(
            property_names(&breakeven),
            set(&["hashrate_th", "power_watts", "electricity_cost"])
        );
        assert_eq!(
            required_names(&breakeven),
            set(&["hashrate_th", "power_watts", "electricity_cost"])
        );
    }

    #[test]
    fn test_recent_blocks_schema() {
        let schema = schema_of("get_recent_blocks");
        assert_eq!(property_names(&schema), set(&["limit"]));
        assert!(required_names(&schema).is_empty());
    }

    #[tokio::test]
    async fn test_unknown_tool_is_error_result() {
        let registry = test_registry();
        let result = registry.call_tool("get_weather", None).await;
        assert_eq!(result.is_error, Some(true));
        assert_eq!(result.content.len(), 1);
        if let RawContent::Text(text) = &result.content[0].raw {
            assert_eq!(text.text, "Error: Unknown tool: get_weather");
        } else {
            panic!("Expected text content");
        }
    }

    #[tokio::test]
    async fn test_invalid_arguments_are_error_result() {
        let registry = test_registry();
        let result = registry
            .call_tool("calculate_breakeven", Some(JsonObject::new()))
            .await;
        assert_eq!(result.is_error, Some(true));
        if let RawContent::Text(text) = &result.content[0].raw {
            assert!(text.text.starts_with("Error: Invalid arguments"));
            assert!(text.text.contains("hashrate_th"));
        } else {
            panic!("Expected text content");
        }
    }

    #[tokio::test]
    async fn test_network_failure_is_error_result() {
        let registry = test_registry();
        let result = registry.call_tool("get_mempool", None).await;
        assert_eq!(result.is_error, Some(true));
        if let RawContent::Text(text) = &result.content[0].raw {
            assert!(text.text.starts_with("Error: Request failed"));
        } else {
            panic!("Expected text content");
        }
    }
}
