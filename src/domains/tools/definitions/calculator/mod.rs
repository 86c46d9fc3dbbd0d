//! Mining economics tools.
//!
//! Both tools only forward the hardware/energy profile; all math happens
//! upstream.

pub mod breakeven;
pub mod profitability;

pub use breakeven::{BreakevenParams, BreakevenTool};
pub use profitability::{ProfitabilityParams, ProfitabilityTool};
