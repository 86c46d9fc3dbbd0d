//! Market snapshot tools.
//!
//! Parameterless reads of the current market state:
//! - `current`: BTC price, network and mining stats
//! - `hashprice`: revenue per PH/day with breakdown
//! - `difficulty`: current difficulty and next adjustment
//! - `halving`: halving era, next halving date and supply
//! - `asic_prices`: ASIC miner prices and efficiency

pub mod asic_prices;
pub mod current;
pub mod difficulty;
pub mod halving;
pub mod hashprice;

pub use asic_prices::AsicPricesTool;
pub use current::MarketDataTool;
pub use difficulty::DifficultyTool;
pub use halving::HalvingInfoTool;
pub use hashprice::HashpriceTool;
