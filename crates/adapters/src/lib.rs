//! Swap Adapters
//!
//! HTTP-backed collaborators (liquidity router, bridges) and the built-in token list.

pub mod client_cache;
pub mod factory;
mod http;
pub mod http_bridge;
pub mod http_router;
pub mod token_list;

pub use client_cache::{AuthConfig, ClientCache, ClientConfig};
pub use factory::AdapterFactory;
pub use http_bridge::HttpBridgeAdapter;
pub use http_router::HttpRouterAdapter;
pub use swap_types::{AdapterError, AdapterResult, BridgeAdapter, LiquidityRouter, TokenRegistry};
pub use token_list::StaticTokenRegistry;
