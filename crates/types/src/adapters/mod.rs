//! Collaborator contracts: routing, bridging and token metadata

pub mod errors;
pub mod models;
pub mod traits;

pub use errors::AdapterError;
pub use models::{BridgeQuoteRequest, RouteQuote, RouteRequest};
pub use traits::{BridgeAdapter, LiquidityRouter, TokenRegistry};

/// Result type for adapter operations
pub type AdapterResult<T> = Result<T, AdapterError>;
