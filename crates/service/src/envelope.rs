//! Typed payload attached to every quote
//!
//! EIP-712 style structure the caller signs to authorize the swap. Missing
//! sender, recipient or affiliate render as the zero address.

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, Utc};
use serde_json::{json, Map, Value};
use swap_types::constants::limits::QUOTE_DEADLINE_SECONDS;
use swap_types::{
	BridgeType, CrossChainQuoteRequest, QuoteRequest, RouteQuote, TokenAddress, TypedData,
	TypedDomain, TypedField,
};

pub const DOMAIN_NAME: &str = "Swap Aggregator";
pub const DOMAIN_VERSION: &str = "1";
pub const SWAP_PRIMARY_TYPE: &str = "Swap";
pub const CROSS_CHAIN_PRIMARY_TYPE: &str = "CrossChainSwap";

/// Accumulates the primary type declaration and message side by side
struct MessageBuilder {
	fields: Vec<TypedField>,
	message: Map<String, Value>,
}

impl MessageBuilder {
	fn new() -> Self {
		Self {
			fields: Vec::new(),
			message: Map::new(),
		}
	}

	fn field(mut self, name: &str, kind: &str, value: Value) -> Self {
		self.fields.push(TypedField::new(name, kind));
		self.message.insert(name.to_string(), value);
		self
	}

	fn address(self, name: &str, address: Option<TokenAddress>) -> Self {
		let address = address.unwrap_or(TokenAddress::NATIVE);
		self.field(name, "address", json!(address.to_hex()))
	}

	fn build(self, primary_type: &str, domain: TypedDomain) -> TypedData {
		let mut types = BTreeMap::new();
		types.insert(
			"EIP712Domain".to_string(),
			vec![
				TypedField::new("name", "string"),
				TypedField::new("version", "string"),
				TypedField::new("chainId", "uint256"),
				TypedField::new("verifyingContract", "address"),
			],
		);
		types.insert(primary_type.to_string(), self.fields);

		TypedData {
			types,
			primary_type: primary_type.to_string(),
			domain,
			message: self.message,
		}
	}
}

fn domain(chain_id: u64, verifying_contract: TokenAddress) -> TypedDomain {
	TypedDomain {
		name: DOMAIN_NAME.to_string(),
		version: DOMAIN_VERSION.to_string(),
		chain_id,
		verifying_contract,
	}
}

fn deadline(now: DateTime<Utc>) -> i64 {
	(now + Duration::seconds(QUOTE_DEADLINE_SECONDS)).timestamp()
}

/// Payload for a same-chain swap
pub fn swap_typed_data(request: &QuoteRequest, quote: &RouteQuote, now: DateTime<Utc>) -> TypedData {
	let amount_out_min = quote.amount_out.less_bps(request.slippage.bps());
	let affiliate_fee = request.affiliate.map(|a| a.fee_ppm()).unwrap_or(0);

	MessageBuilder::new()
		.address("router", Some(quote.target_address))
		.address("sender", request.from_address)
		.address("recipient", request.to_address)
		.address("fromAsset", Some(request.from_token))
		.address("toAsset", Some(request.to_token))
		.field("amountIn", "uint256", json!(request.sell_amount.to_string()))
		.field("amountOutMin", "uint256", json!(amount_out_min.to_string()))
		.address("affiliate", request.affiliate.map(|a| a.address))
		.field("affiliateFee", "uint32", json!(affiliate_fee))
		.field("gasless", "bool", json!(request.gasless))
		.field("deadline", "uint256", json!(deadline(now)))
		.build(
			SWAP_PRIMARY_TYPE,
			domain(request.network.chain_id(), quote.target_address),
		)
}

/// Payload for a bridged swap, signed on the source chain
pub fn cross_chain_typed_data(
	request: &CrossChainQuoteRequest,
	bridge_type: BridgeType,
	quote: &RouteQuote,
	now: DateTime<Utc>,
) -> TypedData {
	let amount_in_min = request.sell_amount.less_bps(request.slippage_in.bps());
	let amount_out_min = quote.amount_out.less_bps(request.slippage_out.bps());

	MessageBuilder::new()
		.address("router", Some(quote.target_address))
		.address("sender", request.from_address)
		.address("recipient", request.to_address)
		.address("fromAsset", Some(request.from_token))
		.address("toAsset", Some(request.to_token))
		.field("toChainId", "uint256", json!(request.to_network.chain_id()))
		.field("bridgeType", "uint8", json!(bridge_type.code()))
		.field("amountIn", "uint256", json!(request.sell_amount.to_string()))
		.field("amountInMin", "uint256", json!(amount_in_min.to_string()))
		.field("amountOutMin", "uint256", json!(amount_out_min.to_string()))
		// quote-in takes no affiliate parameters
		.address("affiliate", None)
		.field("affiliateFee", "uint32", json!(0))
		.field("gasless", "bool", json!(request.gasless))
		.field("deadline", "uint256", json!(deadline(now)))
		.build(
			CROSS_CHAIN_PRIMARY_TYPE,
			domain(request.from_network.chain_id(), quote.target_address),
		)
}
