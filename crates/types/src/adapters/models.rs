//! Request and result contracts exchanged with collaborator adapters

use serde::{Deserialize, Serialize};

use crate::models::TokenAmount;
use crate::networks::NetworkId;
use crate::quotes::{CrossChainQuoteRequest, FeeEntry, LiquiditySource, QuoteRequest};
use crate::tokens::TokenAddress;

/// Same-chain routing request handed to the liquidity router
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteRequest {
	pub network: NetworkId,
	pub chain_id: u64,
	pub from_token: TokenAddress,
	pub to_token: TokenAddress,
	pub sell_amount: TokenAmount,
	pub slippage_bps: u32,
	pub gasless: bool,
	pub enable_rfq: bool,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub from_address: Option<TokenAddress>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub to_address: Option<TokenAddress>,
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub liquidity_sources: Vec<LiquiditySource>,
}

impl From<&QuoteRequest> for RouteRequest {
	fn from(request: &QuoteRequest) -> Self {
		Self {
			network: request.network,
			chain_id: request.network.chain_id(),
			from_token: request.from_token,
			to_token: request.to_token,
			sell_amount: request.sell_amount,
			slippage_bps: request.slippage.bps(),
			gasless: request.gasless,
			enable_rfq: request.enable_rfq,
			from_address: request.from_address,
			to_address: request.to_address,
			liquidity_sources: request.liquidity_sources.clone(),
		}
	}
}

/// Cross-chain quote request handed to one bridge backend
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BridgeQuoteRequest {
	pub from_network: NetworkId,
	pub from_chain_id: u64,
	pub to_network: NetworkId,
	pub to_chain_id: u64,
	pub from_token: TokenAddress,
	pub to_token: TokenAddress,
	pub sell_amount: TokenAmount,
	pub slippage_in_bps: u32,
	pub slippage_out_bps: u32,
	pub gasless: bool,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub from_address: Option<TokenAddress>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub to_address: Option<TokenAddress>,
}

impl From<&CrossChainQuoteRequest> for BridgeQuoteRequest {
	fn from(request: &CrossChainQuoteRequest) -> Self {
		Self {
			from_network: request.from_network,
			from_chain_id: request.from_network.chain_id(),
			to_network: request.to_network,
			to_chain_id: request.to_network.chain_id(),
			from_token: request.from_token,
			to_token: request.to_token,
			sell_amount: request.sell_amount,
			slippage_in_bps: request.slippage_in.bps(),
			slippage_out_bps: request.slippage_out.bps(),
			gasless: request.gasless,
			from_address: request.from_address,
			to_address: request.to_address,
		}
	}
}

/// Priced route returned by a router or bridge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteQuote {
	pub amount_out: TokenAmount,
	/// Contract the caller should submit the transaction to
	pub target_address: TokenAddress,
	#[serde(default)]
	pub fees: Vec<FeeEntry>,
	pub gas_limit: u64,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub estimated_duration_secs: Option<u64>,
}
