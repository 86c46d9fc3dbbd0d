//! Tool handler contract.
//!
//! Every catalogue entry is a unit struct implementing [`ApiTool`]: it names
//! itself, describes its parameters through a `schemars` type and maps
//! validated parameters to exactly one [`UpstreamRequest`]. The generic
//! functions below do the rest (argument parsing, metadata, execution), so a
//! tool file only holds what differs between tools.

use rmcp::{
    handler::server::tool::cached_schema_for_type,
    model::{JsonObject, Tool},
};
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use super::error::{ToolError, ToolResult};
use crate::api::{MiningApiClient, UpstreamRequest};

/// A tool backed by a single upstream API call.
pub trait ApiTool {
    /// Tool name as registered in MCP.
    const NAME: &'static str;

    /// Tool description shown to clients.
    const DESCRIPTION: &'static str;

    /// Typed, validated arguments.
    type Params: DeserializeOwned + JsonSchema + 'static;

    /// Build the upstream request for validated arguments, applying defaults.
    fn upstream_request(params: Self::Params) -> ToolResult<UpstreamRequest>;
}

/// Coerce the raw argument bag into the tool's parameter struct.
pub fn parse_params<T: ApiTool>(arguments: JsonObject) -> ToolResult<T::Params> {
    serde_json::from_value(Value::Object(arguments))
        .map_err(|e| ToolError::invalid_arguments(e.to_string()))
}

/// Create the Tool model (metadata) for a tool.
pub fn to_tool<T: ApiTool>() -> Tool {
    Tool {
        name: T::NAME.into(),
        description: Some(T::DESCRIPTION.into()),
        input_schema: cached_schema_for_type::<T::Params>(),
        annotations: None,
        output_schema: None,
        icons: None,
        meta: None,
        title: None,
    }
}

/// Build the upstream request for a raw argument bag.
pub fn build_request<T: ApiTool>(arguments: JsonObject) -> ToolResult<UpstreamRequest> {
    T::upstream_request(parse_params::<T>(arguments)?)
}

/// Validate arguments, call the API and return its JSON response.
pub async fn execute<T: ApiTool>(
    client: &MiningApiClient,
    arguments: JsonObject,
) -> ToolResult<Value> {
    let request = build_request::<T>(arguments)?;
    debug!(
        tool = T::NAME,
        method = request.method(),
        path = request.path(),
        "Calling upstream API"
    );
    Ok(client.send(&request).await?)
}
