//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by delegating to the tool registry.
//!
//! `list_tools` and `call_tool` are implemented by hand rather than through a
//! routed `ToolRouter`: every failure, including an unknown tool name or bad
//! arguments, must come back as an error-flagged result and never as a
//! protocol-level error.

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, model::*, service::RequestContext,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::config::Config;
use super::error::Result;
use crate::api::{MiningApiClient, UsageTracker};
use crate::domains::tools::ToolRegistry;

/// The main MCP server handler.
///
/// Cloning is cheap; all clones share the same configuration and registry.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Tool catalogue and dispatcher.
    registry: Arc<ToolRegistry>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    pub fn new(config: Config) -> Result<Self> {
        let config = Arc::new(config);

        let client = Arc::new(MiningApiClient::new(&config.api)?);
        let tracker = UsageTracker::from_config(&config)?;

        info!(
            "Upstream API: {} (usage tracking {})",
            client.base_url(),
            if tracker.is_enabled() { "on" } else { "off" }
        );

        Ok(Self {
            registry: Arc::new(ToolRegistry::new(client, tracker)),
            config,
        })
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the tool registry.
    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Instructions sent to clients on initialization.
    pub fn instructions(&self) -> &'static str {
        "Startmining MCP server. Provides Bitcoin mining market data: price, hashprice, \
         difficulty, halving, mempool, recent blocks, ASIC prices, and profitability and \
         breakeven calculators."
    }

    // ========================================================================
    // HTTP Transport Support Methods
    // ========================================================================

    /// List all available tools (for HTTP transport).
    pub fn list_tools(&self) -> Vec<serde_json::Value> {
        ToolRegistry::get_all_tools()
            .into_iter()
            .map(|t| {
                serde_json::json!({
                    "name": t.name,
                    "description": t.description,
                    "inputSchema": t.input_schema
                })
            })
            .collect()
    }

    /// Call a tool by name (for HTTP transport).
    ///
    /// The result is always a `CallToolResult` object; failures are flagged
    /// with `isError` inside it.
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: Option<JsonObject>,
    ) -> Result<serde_json::Value> {
        let result = self.registry.call_tool(name, arguments).await;
        Ok(serde_json::to_value(result)?)
    }
}

impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(self.instructions().to_string()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: self.name().to_string(),
                version: self.version().to_string(),
                ..Implementation::from_build_env()
            },
            ..Default::default()
        }
    }

    #[instrument(skip(self, _request, _context))]
    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListToolsResult, McpError> {
        info!("Listing tools");
        Ok(ListToolsResult {
            tools: ToolRegistry::get_all_tools(),
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, request, _context), fields(tool = %request.name))]
    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<CallToolResult, McpError> {
        info!("Calling tool: {}", request.name);
        Ok(self.registry.call_tool(&request.name, request.arguments).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_server() -> McpServer {
        let mut config = Config::default();
        config.analytics.enabled = false;
        McpServer::new(config).unwrap()
    }

    #[test]
    fn test_server_info_advertises_tools() {
        let server = test_server();
        let info = server.get_info();
        assert!(info.capabilities.tools.is_some());
        assert!(info.capabilities.resources.is_none());
        assert_eq!(info.server_info.name, "startmining-mcp");
        assert_eq!(info.server_info.version, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_list_tools_json_shape() {
        let server = test_server();
        let tools = server.list_tools();
        assert_eq!(tools.len(), 11);
        for tool in tools {
            assert!(tool["name"].is_string());
            assert!(tool["description"].is_string());
            assert_eq!(tool["inputSchema"]["type"], "object");
        }
    }

    #[tokio::test]
    async fn test_call_tool_json_unknown() {
        let server = test_server();
        let value = server.call_tool("nope", None).await.unwrap();
        assert_eq!(value["isError"], true);
        assert_eq!(value["content"][0]["type"], "text");
        assert_eq!(value["content"][0]["text"], "Error: Unknown tool: nope");
    }
}
