//! Tool definitions module.
//!
//! This module exports all available tool definitions, grouped by area.
//! Each tool is defined in its own file for better maintainability.

pub mod calculator;
pub mod common;
pub mod history;
pub mod market;
pub mod network;

pub use calculator::{BreakevenParams, BreakevenTool, ProfitabilityParams, ProfitabilityTool};
pub use history::{
    DifficultyHistoryParams, DifficultyHistoryTool, Granularity, PriceHistoryParams,
    PriceHistoryTool,
};
pub use market::{AsicPricesTool, DifficultyTool, HalvingInfoTool, HashpriceTool, MarketDataTool};
pub use network::{MempoolTool, RecentBlocksParams, RecentBlocksTool};
