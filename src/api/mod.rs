//! Upstream market-data API layer.
//!
//! This module owns everything that talks to the Startmining HTTP API:
//!
//! - `client.rs` - `MiningApiClient`, sends one request against the base URL with the key
//! - `request.rs` - `UpstreamRequest` and its `GetRequest` builder, built by tools per call
//! - `tracker.rs` - `UsageTracker`, the fire-and-forget usage beacon
//! - `error.rs` - API error types

mod client;
mod error;
mod request;
mod tracker;

pub use client::MiningApiClient;
pub use error::{ApiError, ApiResult};
pub use request::{GetRequest, UpstreamRequest};
pub use tracker::{UsageEvent, UsageTracker};
