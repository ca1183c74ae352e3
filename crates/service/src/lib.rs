//! Swap Service
//!
//! Request validation, token resolution, bridge discovery and quote assembly.

pub mod bridge_registry;
pub mod discovery;
pub mod envelope;
pub mod quote;
pub mod resolver;
pub mod validator;

pub use bridge_registry::BridgeRegistry;
pub use discovery::{BridgeDiscoveryEngine, DiscoveredRoute};
pub use quote::{QuoteService, QuoteServiceTrait};
pub use resolver::TokenResolver;
pub use validator::QuoteValidator;
