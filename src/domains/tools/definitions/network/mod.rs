//! Bitcoin network tools.

pub mod blocks;
pub mod mempool;

pub use blocks::{RecentBlocksParams, RecentBlocksTool};
pub use mempool::MempoolTool;
