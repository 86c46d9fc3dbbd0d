//! Tools domain module.
//!
//! This module handles all tool-related functionality for the MCP server.
//! Every tool maps one call onto one request against the Startmining
//! market-data API.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `handlers.rs` - The `ApiTool` contract and generic execution helpers
//! - `registry.rs` - Tool catalogue and name-based dispatch
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` implementing `ApiTool`
//! 2. Export it in the area's `mod.rs` and in `definitions/mod.rs`
//! 3. Add it to `tool_names()`, `get_all_tools()` and `dispatch()` in `registry.rs`

pub mod definitions;
mod error;
mod handlers;
mod registry;

pub use error::{ToolError, ToolResult};
pub use handlers::{ApiTool, build_request, execute, parse_params, to_tool};
pub use registry::ToolRegistry;
