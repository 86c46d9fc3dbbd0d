//! Historical series tools.

pub mod difficulty;
pub mod price;

pub use difficulty::{DifficultyHistoryParams, DifficultyHistoryTool};
pub use price::{Granularity, PriceHistoryParams, PriceHistoryTool};
