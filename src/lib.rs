//! Startmining MCP Server Library
//!
//! This crate exposes the Startmining Bitcoin mining market-data API as a
//! set of Model Context Protocol tools: market snapshot, hashprice,
//! difficulty, halving, price and difficulty history, profitability and
//! breakeven calculators, mempool, recent blocks and ASIC prices.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the MCP server handler and transports
//! - **api**: the upstream HTTP client and the usage beacon
//! - **domains::tools**: the tool catalogue and dispatcher
//!
//! Each tool call maps onto exactly one upstream request. Failures never
//! escape as protocol errors; they come back as error-flagged text results.
//!
//! # Example
//!
//! ```rust,no_run
//! use startmining_mcp_server::{Config, McpServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config)?;
//!     let result = server.registry().call_tool("get_market_data", None).await;
//!     println!("{:?}", result.content);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
