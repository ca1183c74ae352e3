//! Quote orchestration
//!
//! Validates raw parameters, resolves both tokens, asks the liquidity router
//! (same chain) or the discovery engine (cross chain) for a route and wraps the
//! result into the response envelope.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use swap_types::{
	AdapterError, BridgeType, CrossChainQuoteRequest, FeeEntry, LiquidityRouter, QuoteError,
	QuoteRequest, QuoteResponse, QuoteResult, RawQuoteParams, ResourceEstimate, RouteQuote,
	RouteRequest, TokenAmount, TokenSide, TypedData,
};
use tokio::time::{timeout, Duration};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::discovery::BridgeDiscoveryEngine;
use crate::envelope::{cross_chain_typed_data, swap_typed_data};
use crate::resolver::TokenResolver;
use crate::validator::QuoteValidator;

/// Quote operations as seen by the HTTP layer
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuoteServiceTrait: Send + Sync {
	/// Same-chain quote from raw query parameters
	async fn quote(&self, params: &RawQuoteParams) -> QuoteResult<QuoteResponse>;

	/// Cross-chain quote from raw query parameters
	async fn quote_cross_chain(&self, params: &RawQuoteParams) -> QuoteResult<QuoteResponse>;

	/// Whether the liquidity router answers its health probe
	async fn router_healthy(&self) -> bool;

	fn router_id(&self) -> String;

	fn registered_bridges(&self) -> Vec<BridgeType>;
}

pub struct QuoteService {
	validator: QuoteValidator,
	resolver: TokenResolver,
	router: Arc<dyn LiquidityRouter>,
	discovery: BridgeDiscoveryEngine,
	router_timeout_ms: u64,
}

impl QuoteService {
	pub fn new(
		validator: QuoteValidator,
		resolver: TokenResolver,
		router: Arc<dyn LiquidityRouter>,
		discovery: BridgeDiscoveryEngine,
	) -> Self {
		Self {
			validator,
			resolver,
			router,
			discovery,
			router_timeout_ms: swap_types::constants::limits::DEFAULT_ROUTER_TIMEOUT_MS,
		}
	}

	pub fn with_router_timeout_ms(mut self, timeout_ms: u64) -> Self {
		self.router_timeout_ms = timeout_ms;
		self
	}

	/// Same-chain quote for an already validated request
	pub async fn get_quote(&self, request: &QuoteRequest) -> QuoteResult<QuoteResponse> {
		let from = self
			.resolver
			.resolve(request.network, &request.from_token, TokenSide::From)
			.await?;
		let to = self
			.resolver
			.resolve(request.network, &request.to_token, TokenSide::To)
			.await?;
		debug!(
			network = %request.network,
			from = %from.symbol,
			to = %to.symbol,
			sell_amount = %request.sell_amount,
			"Routing same-chain quote"
		);

		let route_request = RouteRequest::from(request);
		let budget = Duration::from_millis(self.router_timeout_ms);
		let quote = match timeout(budget, self.router.quote(&route_request)).await {
			Ok(Ok(quote)) => quote,
			Ok(Err(e)) => {
				warn!(router = %self.router.id(), error = %e, "Liquidity router failed");
				return Err(map_router_error(e, request));
			},
			Err(_) => {
				warn!(
					router = %self.router.id(),
					timeout_ms = self.router_timeout_ms,
					"Liquidity router timed out"
				);
				return Err(QuoteError::TransactionFailed {
					reason: format!("router timed out after {}ms", self.router_timeout_ms),
				});
			},
		};

		if quote.amount_out.is_zero() {
			return Err(QuoteError::AmountTooLow);
		}

		let typed_data = swap_typed_data(request, &quote, Utc::now());
		let mut response = build_response(quote, typed_data, None);
		if let Some(affiliate) = &request.affiliate {
			response.fees.push(FeeEntry::new(
				"affiliate",
				ppm_of(request.sell_amount, affiliate.fee_ppm()),
			));
		}

		info!(
			quote_id = %response.id,
			network = %request.network,
			amount_out = %response.amount_out,
			"Same-chain quote ready"
		);
		Ok(response)
	}

	/// Cross-chain quote for an already validated request
	pub async fn get_cross_chain_quote(
		&self,
		request: &CrossChainQuoteRequest,
	) -> QuoteResult<QuoteResponse> {
		if request.from_network == request.to_network {
			return Err(QuoteError::IntermediaryTokenNotRecognized);
		}

		self.resolver
			.resolve(request.from_network, &request.from_token, TokenSide::From)
			.await?;
		self.resolver
			.resolve(request.to_network, &request.to_token, TokenSide::To)
			.await?;

		let route = self.discovery.discover(request).await?;
		let typed_data = cross_chain_typed_data(request, route.bridge_type, &route.quote, Utc::now());
		let response = build_response(route.quote, typed_data, Some(route.bridge_type));

		info!(
			quote_id = %response.id,
			from = %request.from_network,
			to = %request.to_network,
			bridge = %route.bridge_type,
			probes = route.diagnostics.len(),
			"Cross-chain quote ready"
		);
		Ok(response)
	}
}

#[async_trait]
impl QuoteServiceTrait for QuoteService {
	async fn quote(&self, params: &RawQuoteParams) -> QuoteResult<QuoteResponse> {
		let request = self.validator.validate_quote(params)?;
		self.get_quote(&request).await
	}

	async fn quote_cross_chain(&self, params: &RawQuoteParams) -> QuoteResult<QuoteResponse> {
		let request = self.validator.validate_cross_chain(params)?;
		self.get_cross_chain_quote(&request).await
	}

	async fn router_healthy(&self) -> bool {
		match self.router.health_check().await {
			Ok(healthy) => healthy,
			Err(e) => {
				warn!(router = %self.router.id(), error = %e, "Router health check failed");
				false
			},
		}
	}

	fn router_id(&self) -> String {
		self.router.id().to_string()
	}

	fn registered_bridges(&self) -> Vec<BridgeType> {
		self.discovery.registered_bridges()
	}
}

fn build_response(
	quote: RouteQuote,
	typed_data: TypedData,
	bridge_type: Option<BridgeType>,
) -> QuoteResponse {
	QuoteResponse {
		id: Uuid::new_v4().to_string(),
		amount_out: quote.amount_out,
		target_address: quote.target_address,
		fees: quote.fees,
		resource_estimate: ResourceEstimate {
			gas_limit: quote.gas_limit.to_string(),
		},
		typed_data,
		bridge_type,
	}
}

/// `amount * ppm / 1_000_000`, rounded down
fn ppm_of(amount: TokenAmount, ppm: u32) -> TokenAmount {
	let ppm = u128::from(ppm);
	let value = amount.value();
	TokenAmount::new(value / 1_000_000 * ppm + value % 1_000_000 * ppm / 1_000_000)
}

fn map_router_error(error: AdapterError, request: &QuoteRequest) -> QuoteError {
	match error {
		AdapterError::InsufficientLiquidity { reason } => QuoteError::InsufficientLiquidity { reason },
		AdapterError::AmountTooLow => QuoteError::AmountTooLow,
		AdapterError::TokenNotSupported { address } if address == request.from_token => {
			QuoteError::TokenNotFound {
				side: TokenSide::From,
				address,
			}
		},
		AdapterError::TokenNotSupported { address } if address == request.to_token => {
			QuoteError::TokenNotFound {
				side: TokenSide::To,
				address,
			}
		},
		AdapterError::TokenNotSupported { .. } => QuoteError::IntermediaryTokenNotRecognized,
		AdapterError::UnsupportedRoute { .. } => QuoteError::IntermediaryTokenNotRecognized,
		AdapterError::HttpError(e) => QuoteError::internal(format!("router unreachable: {}", e)),
		AdapterError::ConfigError { reason } => QuoteError::internal(reason),
		other => QuoteError::TransactionFailed {
			reason: other.to_string(),
		},
	}
}
