//! Bridge discovery for cross-chain quotes
//!
//! Probes candidate bridges and returns the lowest-index viable route.
//! Probes run with bounded fan-out; results are consumed in candidate order so
//! completion order never changes the winner. Once the winner is known the
//! remaining in-flight probes are dropped.

use std::pin::pin;
use std::time::Instant;

use futures::stream::{self, StreamExt};
use swap_config::{DiscoveryStrategy, Settings};
use swap_types::{
	BridgeProbeResult, BridgeQuoteRequest, BridgeType, CrossChainQuoteRequest, ProbeFailure,
	ProbeOutcome, QuoteError, QuoteResult, RouteQuote,
};
use tokio::time::{timeout, Duration};
use tracing::{debug, info, warn};

use crate::bridge_registry::BridgeRegistry;

/// Winning bridge and the probes that ran before it was picked
#[derive(Debug, Clone)]
pub struct DiscoveredRoute {
	pub bridge_type: BridgeType,
	pub index: usize,
	pub quote: RouteQuote,
	pub diagnostics: Vec<BridgeProbeResult>,
}

pub struct BridgeDiscoveryEngine {
	registry: BridgeRegistry,
	strategy: DiscoveryStrategy,
	max_concurrency: usize,
	per_bridge_timeout_ms: u64,
	default_order: Vec<BridgeType>,
}

impl BridgeDiscoveryEngine {
	pub fn new(registry: BridgeRegistry, default_order: Vec<BridgeType>) -> Self {
		let defaults = Settings::default();
		Self {
			registry,
			strategy: defaults.discovery.strategy,
			max_concurrency: defaults.discovery.max_concurrency,
			per_bridge_timeout_ms: defaults.timeouts.per_bridge_ms,
			default_order,
		}
	}

	pub fn from_settings(registry: BridgeRegistry, settings: &Settings) -> Self {
		Self::new(registry, settings.discovery.bridge_order())
			.with_strategy(settings.discovery.strategy)
			.with_max_concurrency(settings.discovery.max_concurrency)
			.with_per_bridge_timeout_ms(settings.timeouts.per_bridge_ms)
	}

	pub fn with_strategy(mut self, strategy: DiscoveryStrategy) -> Self {
		self.strategy = strategy;
		self
	}

	pub fn with_max_concurrency(mut self, max_concurrency: usize) -> Self {
		self.max_concurrency = max_concurrency.max(1);
		self
	}

	pub fn with_per_bridge_timeout_ms(mut self, timeout_ms: u64) -> Self {
		self.per_bridge_timeout_ms = timeout_ms;
		self
	}

	pub fn registered_bridges(&self) -> Vec<BridgeType> {
		self.registry.registered_types()
	}

	/// Caller-supplied bridges in caller order, otherwise the default order
	pub fn candidates(&self, request: &CrossChainQuoteRequest) -> Vec<BridgeType> {
		if request.bridge_types.is_empty() {
			self.default_order.clone()
		} else {
			request.bridge_types.clone()
		}
	}

	fn fan_out(&self) -> usize {
		match self.strategy {
			DiscoveryStrategy::Sequential => 1,
			DiscoveryStrategy::Concurrent => self.max_concurrency.max(1),
		}
	}

	/// Find the first viable bridge for `request`
	pub async fn discover(&self, request: &CrossChainQuoteRequest) -> QuoteResult<DiscoveredRoute> {
		if request.from_network == request.to_network {
			return Err(QuoteError::IntermediaryTokenNotRecognized);
		}

		let candidates = self.candidates(request);
		let bridge_request = &BridgeQuoteRequest::from(request);
		info!(
			from = %request.from_network,
			to = %request.to_network,
			candidates = candidates.len(),
			strategy = ?self.strategy,
			"Starting bridge discovery"
		);

		let mut probes = pin!(stream::iter(candidates.iter().copied().enumerate())
			.map(|(index, bridge_type)| self.probe(index, bridge_type, bridge_request))
			.buffered(self.fan_out()));

		let mut diagnostics = Vec::with_capacity(candidates.len());
		while let Some(result) = probes.next().await {
			if let ProbeOutcome::Success(quote) = &result.outcome {
				info!(
					bridge = %result.bridge_type,
					index = result.index,
					amount_out = %quote.amount_out,
					elapsed_ms = result.elapsed_ms,
					"Selected bridge"
				);
				let (bridge_type, index, quote) = (result.bridge_type, result.index, quote.clone());
				diagnostics.push(result);
				return Ok(DiscoveredRoute {
					bridge_type,
					index,
					quote,
					diagnostics,
				});
			}
			diagnostics.push(result);
		}

		let attempts = diagnostics.len();
		let cause = most_specific_failure(&diagnostics).unwrap_or(ProbeFailure::Downstream {
			reason: "no bridge candidates".to_string(),
		});
		warn!(attempts, cause = %cause, "No viable bridge found");
		Err(QuoteError::AllBridgesFailed { cause, attempts })
	}

	async fn probe(
		&self,
		index: usize,
		bridge_type: BridgeType,
		request: &BridgeQuoteRequest,
	) -> BridgeProbeResult {
		let start = Instant::now();
		let outcome = match self.registry.get(bridge_type) {
			None => ProbeOutcome::Failure(ProbeFailure::NotRegistered),
			Some(adapter) => {
				let budget = Duration::from_millis(self.per_bridge_timeout_ms);
				match timeout(budget, adapter.quote(request)).await {
					Ok(Ok(quote)) if quote.amount_out.is_zero() => {
						ProbeOutcome::Failure(ProbeFailure::ZeroAmountOut)
					},
					Ok(Ok(quote)) => ProbeOutcome::Success(quote),
					Ok(Err(e)) => ProbeOutcome::Failure(ProbeFailure::from_adapter_error(
						&e,
						&request.from_token,
						&request.to_token,
					)),
					Err(_) => ProbeOutcome::Failure(ProbeFailure::Timeout {
						timeout_ms: self.per_bridge_timeout_ms,
					}),
				}
			},
		};
		let elapsed_ms = start.elapsed().as_millis() as u64;

		if let ProbeOutcome::Failure(failure) = &outcome {
			debug!(bridge = %bridge_type, index, elapsed_ms, reason = %failure, "Bridge not viable");
		} else {
			debug!(bridge = %bridge_type, index, elapsed_ms, "Bridge returned a quote");
		}

		BridgeProbeResult {
			bridge_type,
			index,
			outcome,
			elapsed_ms,
		}
	}
}

/// Highest specificity wins; equal specificity goes to the lowest index
fn most_specific_failure(results: &[BridgeProbeResult]) -> Option<ProbeFailure> {
	results
		.iter()
		.filter_map(|r| r.failure().map(|f| (r.index, f)))
		.max_by(|(ia, a), (ib, b)| {
			a.specificity()
				.cmp(&b.specificity())
				.then_with(|| ib.cmp(ia))
		})
		.map(|(_, failure)| failure.clone())
}

#[cfg(test)]
mod tests {
	use super::*;
	use async_trait::async_trait;
	use std::sync::atomic::{AtomicUsize, Ordering};
	use std::sync::Arc;
	use swap_types::{
		AdapterError, AdapterResult, BridgeAdapter, NetworkId, TokenAddress, TokenAmount, TokenSide,
	};

	#[derive(Debug, Clone, Copy)]
	enum Script {
		Quote { amount: u128, delay_ms: u64 },
		InsufficientLiquidity,
		UnknownToToken,
		Downstream,
	}

	#[derive(Debug)]
	struct ScriptedBridge {
		bridge_type: BridgeType,
		script: Script,
		calls: AtomicUsize,
	}

	impl ScriptedBridge {
		fn new(bridge_type: BridgeType, script: Script) -> Arc<Self> {
			Arc::new(Self {
				bridge_type,
				script,
				calls: AtomicUsize::new(0),
			})
		}

		fn calls(&self) -> usize {
			self.calls.load(Ordering::SeqCst)
		}
	}

	#[async_trait]
	impl BridgeAdapter for ScriptedBridge {
		fn bridge_type(&self) -> BridgeType {
			self.bridge_type
		}

		async fn quote(&self, request: &BridgeQuoteRequest) -> AdapterResult<RouteQuote> {
			self.calls.fetch_add(1, Ordering::SeqCst);
			match self.script {
				Script::Quote { amount, delay_ms } => {
					tokio::time::sleep(Duration::from_millis(delay_ms)).await;
					Ok(RouteQuote {
						amount_out: TokenAmount::new(amount),
						target_address: TokenAddress::NATIVE,
						fees: vec![],
						gas_limit: 200_000,
						estimated_duration_secs: Some(60),
					})
				},
				Script::InsufficientLiquidity => Err(AdapterError::InsufficientLiquidity {
					reason: "pool drained".to_string(),
				}),
				Script::UnknownToToken => Err(AdapterError::TokenNotSupported {
					address: request.to_token,
				}),
				Script::Downstream => Err(AdapterError::Upstream {
					code: "BRIDGE_DOWN".to_string(),
					message: "maintenance".to_string(),
				}),
			}
		}
	}

	fn quote(amount: u128) -> Script {
		Script::Quote {
			amount,
			delay_ms: 0,
		}
	}

	fn request(bridge_types: Vec<BridgeType>) -> CrossChainQuoteRequest {
		let mut request = CrossChainQuoteRequest::new(
			NetworkId::Arbitrum,
			NetworkId::Optimism,
			"0x82af49447d8a07e3bd95bd0d56f35241523fbab1".parse().unwrap(),
			"0x4200000000000000000000000000000000000006".parse().unwrap(),
			TokenAmount::new(1_000_000_000_000_000_000),
		);
		request.bridge_types = bridge_types;
		request
	}

	fn engine(bridges: Vec<Arc<ScriptedBridge>>) -> BridgeDiscoveryEngine {
		let registry = bridges
			.into_iter()
			.map(|b| b as Arc<dyn BridgeAdapter>)
			.collect();
		BridgeDiscoveryEngine::new(
			registry,
			vec![
				BridgeType::Cctp,
				BridgeType::Stargate,
				BridgeType::Wormhole,
				BridgeType::Celer,
				BridgeType::Symbiosis,
			],
		)
	}

	#[tokio::test]
	async fn test_lowest_index_wins_regardless_of_completion_order() {
		let slow = ScriptedBridge::new(
			BridgeType::Cctp,
			Script::Quote {
				amount: 1,
				delay_ms: 100,
			},
		);
		let fast = ScriptedBridge::new(BridgeType::Stargate, quote(2));
		let engine = engine(vec![slow, fast]).with_strategy(DiscoveryStrategy::Concurrent);

		let route = engine.discover(&request(vec![])).await.unwrap();
		assert_eq!(route.bridge_type, BridgeType::Cctp);
		assert_eq!(route.index, 0);
		assert_eq!(route.quote.amount_out, TokenAmount::new(1));
	}

	#[tokio::test]
	async fn test_caller_order_is_respected() {
		let cctp = ScriptedBridge::new(BridgeType::Cctp, quote(10));
		let celer = ScriptedBridge::new(BridgeType::Celer, quote(20));
		let engine = engine(vec![cctp, celer]);

		let route = engine
			.discover(&request(vec![BridgeType::Celer, BridgeType::Cctp]))
			.await
			.unwrap();
		assert_eq!(route.bridge_type, BridgeType::Celer);
	}

	#[tokio::test]
	async fn test_sequential_stops_at_first_success() {
		let failing = ScriptedBridge::new(BridgeType::Cctp, Script::Downstream);
		let winner = ScriptedBridge::new(BridgeType::Stargate, quote(5));
		let untouched = ScriptedBridge::new(BridgeType::Wormhole, quote(7));
		let engine = engine(vec![failing.clone(), winner.clone(), untouched.clone()])
			.with_strategy(DiscoveryStrategy::Sequential);

		let route = engine.discover(&request(vec![])).await.unwrap();
		assert_eq!(route.bridge_type, BridgeType::Stargate);
		assert_eq!(route.diagnostics.len(), 2);
		assert!(!route.diagnostics[0].is_viable());
		assert_eq!(failing.calls(), 1);
		assert_eq!(winner.calls(), 1);
		assert_eq!(untouched.calls(), 0);
	}

	#[tokio::test]
	async fn test_non_viable_probes_fall_through() {
		let zero = ScriptedBridge::new(BridgeType::Cctp, quote(0));
		let slow = ScriptedBridge::new(
			BridgeType::Stargate,
			Script::Quote {
				amount: 9,
				delay_ms: 500,
			},
		);
		let good = ScriptedBridge::new(BridgeType::Celer, quote(3));
		// Wormhole has no adapter
		let engine = engine(vec![zero, slow, good]).with_per_bridge_timeout_ms(50);

		let route = engine.discover(&request(vec![])).await.unwrap();
		assert_eq!(route.bridge_type, BridgeType::Celer);

		let failures: Vec<ProbeFailure> = route
			.diagnostics
			.iter()
			.filter_map(|r| r.failure().cloned())
			.collect();
		assert_eq!(
			failures,
			vec![
				ProbeFailure::ZeroAmountOut,
				ProbeFailure::Timeout { timeout_ms: 50 },
				ProbeFailure::NotRegistered,
			]
		);
	}

	#[tokio::test]
	async fn test_all_failed_reports_most_specific_cause() {
		let engine = engine(vec![
			ScriptedBridge::new(BridgeType::Cctp, Script::Downstream),
			ScriptedBridge::new(BridgeType::Stargate, Script::InsufficientLiquidity),
			ScriptedBridge::new(BridgeType::Wormhole, Script::UnknownToToken),
			ScriptedBridge::new(BridgeType::Celer, Script::InsufficientLiquidity),
		]);

		for _ in 0..3 {
			let err = engine.discover(&request(vec![])).await.unwrap_err();
			match err {
				QuoteError::AllBridgesFailed { cause, attempts } => {
					assert_eq!(cause, ProbeFailure::TokenNotFound(TokenSide::To));
					assert_eq!(attempts, 5);
				},
				other => panic!("unexpected error: {:?}", other),
			}
		}
	}

	#[tokio::test]
	async fn test_only_unregistered_bridges_is_downstream_failure() {
		let engine = engine(vec![]);
		let err = engine
			.discover(&request(vec![BridgeType::Stargate]))
			.await
			.unwrap_err();
		assert!(matches!(
			err,
			QuoteError::AllBridgesFailed {
				cause: ProbeFailure::NotRegistered,
				attempts: 1
			}
		));
	}

	#[tokio::test]
	async fn test_same_network_never_probes() {
		let bridge = ScriptedBridge::new(BridgeType::Cctp, quote(1));
		let engine = engine(vec![bridge.clone()]);
		let mut same_chain = request(vec![]);
		same_chain.to_network = NetworkId::Arbitrum;

		let err = engine.discover(&same_chain).await.unwrap_err();
		assert!(matches!(err, QuoteError::IntermediaryTokenNotRecognized));
		assert_eq!(bridge.calls(), 0);
	}

	#[test]
	fn test_tie_break_prefers_lowest_index() {
		let results = vec![
			BridgeProbeResult {
				bridge_type: BridgeType::Celer,
				index: 0,
				outcome: ProbeOutcome::Failure(ProbeFailure::Downstream {
					reason: "first".to_string(),
				}),
				elapsed_ms: 1,
			},
			BridgeProbeResult {
				bridge_type: BridgeType::Wormhole,
				index: 1,
				outcome: ProbeOutcome::Failure(ProbeFailure::Downstream {
					reason: "second".to_string(),
				}),
				elapsed_ms: 1,
			},
		];
		assert_eq!(
			most_specific_failure(&results),
			Some(ProbeFailure::Downstream {
				reason: "first".to_string()
			})
		);
	}
}
