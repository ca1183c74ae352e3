//! Mock collaborators for demos and testing
//!
//! Deterministic stand-ins for the liquidity router and bridge backends so the
//! service can run end to end without any upstream.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use swap_types::{
	AdapterError, AdapterResult, BridgeAdapter, BridgeQuoteRequest, BridgeType, FeeEntry,
	LiquidityRouter, RouteQuote, RouteRequest, TokenAddress, TokenAmount,
};

/// Router contract returned in mock quotes
pub const MOCK_ROUTER_ADDRESS: TokenAddress = TokenAddress::from_bytes([0x11; 20]);

/// Bridge contract returned in mock bridge quotes
pub const MOCK_BRIDGE_ADDRESS: TokenAddress = TokenAddress::from_bytes([0x22; 20]);

/// Sell amounts above this fail with insufficient liquidity
pub const MOCK_LIQUIDITY_CEILING: u128 = 1_000_000_000_000_000_000_000_000; // 10^24

/// Output ratio in parts per thousand (0.3% pool fee)
const MOCK_RATE_PER_MILLE: u128 = 997;

const MOCK_GAS_LIMIT: u64 = 180_000;

fn mock_amount_out(sell_amount: TokenAmount) -> TokenAmount {
	TokenAmount::new(sell_amount.value() * MOCK_RATE_PER_MILLE / 1000)
}

/// Liquidity router pricing every pair at a fixed rate
///
/// Amounts so small that the rate rounds them to zero come back as a zero
/// output, which the service reports as "sell amount too low".
#[derive(Debug, Clone)]
pub struct MockLiquidityRouter {
	id: String,
	liquidity_ceiling: u128,
	healthy: bool,
}

impl MockLiquidityRouter {
	pub fn new() -> Self {
		Self {
			id: "mock-router".to_string(),
			liquidity_ceiling: MOCK_LIQUIDITY_CEILING,
			healthy: true,
		}
	}

	pub fn with_liquidity_ceiling(mut self, ceiling: u128) -> Self {
		self.liquidity_ceiling = ceiling;
		self
	}

	/// Router whose health probe reports it as down
	pub fn unhealthy() -> Self {
		Self {
			healthy: false,
			..Self::new()
		}
	}
}

impl Default for MockLiquidityRouter {
	fn default() -> Self {
		Self::new()
	}
}

#[async_trait]
impl LiquidityRouter for MockLiquidityRouter {
	fn id(&self) -> &str {
		&self.id
	}

	async fn quote(&self, request: &RouteRequest) -> AdapterResult<RouteQuote> {
		if request.sell_amount.value() > self.liquidity_ceiling {
			return Err(AdapterError::InsufficientLiquidity {
				reason: format!("pool depth exceeded on {}", request.network),
			});
		}

		Ok(RouteQuote {
			amount_out: mock_amount_out(request.sell_amount),
			target_address: MOCK_ROUTER_ADDRESS,
			fees: vec![FeeEntry::new("gas", TokenAmount::new(MOCK_GAS_LIMIT as u128))],
			gas_limit: MOCK_GAS_LIMIT,
			estimated_duration_secs: None,
		})
	}

	async fn health_check(&self) -> AdapterResult<bool> {
		Ok(self.healthy)
	}
}

/// What a [`MockBridge`] answers with
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockBridgeBehavior {
	/// Priced route at the mock rate
	Quote,
	/// Priced route after sleeping
	DelayedQuote { delay_ms: u64 },
	/// Route with a zero output amount
	ZeroOutput,
	InsufficientLiquidity,
	/// Destination token unknown to the bridge
	UnsupportedToToken,
	/// Upstream failure unrelated to the request
	Unavailable,
}

/// Bridge backend with scripted behavior and a call counter
#[derive(Debug, Clone)]
pub struct MockBridge {
	bridge_type: BridgeType,
	behavior: MockBridgeBehavior,
	calls: Arc<AtomicUsize>,
}

impl MockBridge {
	pub fn new(bridge_type: BridgeType, behavior: MockBridgeBehavior) -> Self {
		Self {
			bridge_type,
			behavior,
			calls: Arc::new(AtomicUsize::new(0)),
		}
	}

	pub fn quoting(bridge_type: BridgeType) -> Self {
		Self::new(bridge_type, MockBridgeBehavior::Quote)
	}

	pub fn failing(bridge_type: BridgeType) -> Self {
		Self::new(bridge_type, MockBridgeBehavior::Unavailable)
	}

	/// Number of quote calls received so far, shared across clones
	pub fn calls(&self) -> usize {
		self.calls.load(Ordering::SeqCst)
	}
}

#[async_trait]
impl BridgeAdapter for MockBridge {
	fn bridge_type(&self) -> BridgeType {
		self.bridge_type
	}

	async fn quote(&self, request: &BridgeQuoteRequest) -> AdapterResult<RouteQuote> {
		self.calls.fetch_add(1, Ordering::SeqCst);

		let amount_out = match &self.behavior {
			MockBridgeBehavior::Quote => mock_amount_out(request.sell_amount),
			MockBridgeBehavior::DelayedQuote { delay_ms } => {
				tokio::time::sleep(std::time::Duration::from_millis(*delay_ms)).await;
				mock_amount_out(request.sell_amount)
			},
			MockBridgeBehavior::ZeroOutput => TokenAmount::ZERO,
			MockBridgeBehavior::InsufficientLiquidity => {
				return Err(AdapterError::InsufficientLiquidity {
					reason: format!("{} pool too shallow", self.bridge_type.name()),
				});
			},
			MockBridgeBehavior::UnsupportedToToken => {
				return Err(AdapterError::TokenNotSupported {
					address: request.to_token,
				});
			},
			MockBridgeBehavior::Unavailable => {
				return Err(AdapterError::Upstream {
					code: "503".to_string(),
					message: format!("{} relayer unavailable", self.bridge_type.name()),
				});
			},
		};

		Ok(RouteQuote {
			amount_out,
			target_address: MOCK_BRIDGE_ADDRESS,
			fees: vec![FeeEntry::new(
				"bridge",
				TokenAmount::new(request.sell_amount.value() / 1000),
			)],
			gas_limit: MOCK_GAS_LIMIT * 2,
			estimated_duration_secs: Some(120),
		})
	}
}
