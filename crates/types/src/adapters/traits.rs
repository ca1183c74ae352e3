//! Collaborator traits implemented by router, bridge and token-list adapters

use async_trait::async_trait;
use std::fmt::Debug;

use super::{AdapterResult, BridgeQuoteRequest, RouteQuote, RouteRequest};
use crate::bridges::BridgeType;
use crate::networks::NetworkId;
use crate::tokens::{TokenAddress, TokenMetadata};

/// Pricing and routing backend for same-chain swaps
#[async_trait]
pub trait LiquidityRouter: Send + Sync + Debug {
	/// Identifier used in logs and health output
	fn id(&self) -> &str;

	async fn quote(&self, request: &RouteRequest) -> AdapterResult<RouteQuote>;

	async fn health_check(&self) -> AdapterResult<bool> {
		Ok(true)
	}
}

/// One cross-chain bridge backend
///
/// Implementations answer with a priced route or a failure; they must not
/// retry internally since the discovery engine owns the timeout budget.
#[async_trait]
pub trait BridgeAdapter: Send + Sync + Debug {
	fn bridge_type(&self) -> BridgeType;

	async fn quote(&self, request: &BridgeQuoteRequest) -> AdapterResult<RouteQuote>;
}

/// Token metadata lookup
///
/// `Ok(None)` means the token is unknown on that network; `Err` is reserved
/// for transport failures.
#[async_trait]
pub trait TokenRegistry: Send + Sync {
	async fn lookup(
		&self,
		network: NetworkId,
		address: &TokenAddress,
	) -> AdapterResult<Option<TokenMetadata>>;
}
