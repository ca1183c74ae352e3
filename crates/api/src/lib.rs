//! Swap API
//!
//! Axum routes, handlers and middleware for the swap quote aggregator.

pub mod handlers;
pub mod rate_limit;
pub mod router;
pub mod security;
pub mod state;

pub use rate_limit::{apply_rate_limit, MemoryRateLimiter};
pub use router::create_router;
pub use state::AppState;

#[cfg(feature = "openapi")]
pub mod openapi;
