//! Request validation for both quote operations
//!
//! Turns raw query parameters into typed requests. Rules run in a fixed
//! order and the first violation is returned.

use std::collections::HashSet;
use std::hash::Hash;
use std::str::FromStr;

use swap_config::LimitSettings;
use swap_types::constants::limits::{DEFAULT_ENABLE_RFQ, DEFAULT_GASLESS};
use swap_types::models::AmountParseError;
use swap_types::{
	Affiliate, BridgeType, CrossChainQuoteRequest, LiquiditySource, NetworkId, QuoteError,
	QuoteRequest, QuoteResult, QuoteValidationError, QuoteValidationResult, RawQuoteParams,
	Slippage, TokenAddress, TokenAmount,
};

/// Validates quote parameters against the configured limits
#[derive(Debug, Clone)]
pub struct QuoteValidator {
	max_sell_amount: TokenAmount,
	max_affiliate_fee_percentage: f64,
}

impl QuoteValidator {
	pub fn new(max_sell_amount: TokenAmount, max_affiliate_fee_percentage: f64) -> Self {
		Self {
			max_sell_amount,
			max_affiliate_fee_percentage,
		}
	}

	pub fn from_limits(limits: &LimitSettings) -> Self {
		Self::new(limits.max_sell_amount, limits.max_affiliate_fee_percentage)
	}

	/// Validate a same-chain quote request
	pub fn validate_quote(&self, params: &RawQuoteParams) -> QuoteResult<QuoteRequest> {
		let network = required(params, "network")?;
		let from_token = required(params, "fromTokenAddress")?;
		let to_token = required(params, "toTokenAddress")?;
		let sell_amount = required(params, "sellAmount")?;

		let network: NetworkId = network.parse()?;

		let from_token = parse_address(from_token, "fromTokenAddress")?;
		let to_token = parse_address(to_token, "toTokenAddress")?;
		let from_address = optional_address(params, "fromAddress")?;
		let to_address = optional_address(params, "toAddress")?;

		let sell_amount = self.parse_sell_amount(sell_amount)?;
		let slippage = parse_slippage(params, "slippage")?;
		let gasless = parse_bool(params, "gasless", DEFAULT_GASLESS)?;
		let enable_rfq = parse_bool(params, "enableRFQ", DEFAULT_ENABLE_RFQ)?;
		let affiliate = self.parse_affiliate(params)?;
		let liquidity_sources = parse_unique_list::<LiquiditySource>(params, "liquiditySources")?;

		Ok(QuoteRequest {
			network,
			from_token,
			to_token,
			sell_amount,
			slippage,
			gasless,
			from_address,
			to_address,
			affiliate,
			enable_rfq,
			liquidity_sources,
		})
	}

	/// Validate a cross-chain quote request
	pub fn validate_cross_chain(
		&self,
		params: &RawQuoteParams,
	) -> QuoteResult<CrossChainQuoteRequest> {
		let from_network = required(params, "fromNetwork")?;
		let to_network = required(params, "toNetwork")?;
		let from_token = required(params, "fromTokenAddress")?;
		let to_token = required(params, "toTokenAddress")?;
		let sell_amount = required(params, "sellAmount")?;

		let from_network: NetworkId = from_network.parse()?;
		let to_network: NetworkId = to_network.parse()?;

		let from_token = parse_address(from_token, "fromTokenAddress")?;
		let to_token = parse_address(to_token, "toTokenAddress")?;
		let from_address = optional_address(params, "fromAddress")?;
		let to_address = optional_address(params, "toAddress")?;

		let sell_amount = self.parse_sell_amount(sell_amount)?;
		let slippage_in = parse_slippage(params, "slippageIn")?;
		let slippage_out = parse_slippage(params, "slippageOut")?;
		let gasless = parse_bool(params, "gasless", DEFAULT_GASLESS)?;
		let bridge_types = parse_unique_list::<BridgeType>(params, "bridgeTypes")?;

		if from_network == to_network {
			return Err(QuoteError::IntermediaryTokenNotRecognized);
		}

		Ok(CrossChainQuoteRequest {
			from_network,
			to_network,
			from_token,
			to_token,
			sell_amount,
			slippage_in,
			slippage_out,
			gasless,
			from_address,
			to_address,
			bridge_types,
		})
	}

	fn parse_sell_amount(&self, value: &str) -> QuoteValidationResult<TokenAmount> {
		const FIELD: &str = "sellAmount";
		let amount = value.parse::<TokenAmount>().map_err(|e| match e {
			AmountParseError::Overflow => QuoteValidationError::AmountTooLarge {
				field: FIELD,
				max: self.max_sell_amount.value(),
			},
			AmountParseError::Empty | AmountParseError::NotAnInteger => {
				QuoteValidationError::InvalidAmount { field: FIELD }
			},
		})?;

		if amount.is_zero() {
			return Err(QuoteValidationError::ZeroAmount { field: FIELD });
		}
		if amount > self.max_sell_amount {
			return Err(QuoteValidationError::AmountTooLarge {
				field: FIELD,
				max: self.max_sell_amount.value(),
			});
		}
		Ok(amount)
	}

	fn parse_affiliate(&self, params: &RawQuoteParams) -> QuoteValidationResult<Option<Affiliate>> {
		let (address, fee) = match (
			params.get("affiliateAddress"),
			params.get("affiliateFeeInPercentage"),
		) {
			(None, None) => return Ok(None),
			(Some(address), Some(fee)) => (address, fee),
			_ => return Err(QuoteValidationError::IncompleteAffiliate),
		};

		let address = parse_address(address, "affiliateAddress")?;
		let invalid_fee = QuoteValidationError::InvalidAffiliateFee {
			max: self.max_affiliate_fee_percentage,
		};
		let fee_percentage = fee.parse::<f64>().map_err(|_| invalid_fee.clone())?;
		if !fee_percentage.is_finite()
			|| fee_percentage < 0.0
			|| fee_percentage > self.max_affiliate_fee_percentage
		{
			return Err(invalid_fee);
		}

		Ok(Some(Affiliate {
			address,
			fee_percentage,
		}))
	}
}

impl Default for QuoteValidator {
	fn default() -> Self {
		Self::from_limits(&LimitSettings::default())
	}
}

fn required<'a>(params: &'a RawQuoteParams, field: &'static str) -> QuoteValidationResult<&'a str> {
	params
		.get(field)
		.ok_or(QuoteValidationError::MissingRequiredField { field })
}

fn parse_address(value: &str, field: &'static str) -> QuoteValidationResult<TokenAddress> {
	value
		.parse()
		.map_err(|_| QuoteValidationError::InvalidAddress { field })
}

fn optional_address(
	params: &RawQuoteParams,
	field: &'static str,
) -> QuoteValidationResult<Option<TokenAddress>> {
	params
		.get(field)
		.map(|value| parse_address(value, field))
		.transpose()
}

fn parse_slippage(params: &RawQuoteParams, field: &'static str) -> QuoteValidationResult<Slippage> {
	let Some(value) = params.get(field) else {
		return Ok(Slippage::default());
	};
	value
		.parse::<f64>()
		.ok()
		.and_then(Slippage::from_percentage)
		.ok_or(QuoteValidationError::InvalidSlippage { field })
}

fn parse_bool(
	params: &RawQuoteParams,
	field: &'static str,
	default: bool,
) -> QuoteValidationResult<bool> {
	match params.get(field) {
		None => Ok(default),
		Some("true") => Ok(true),
		Some("false") => Ok(false),
		Some(_) => Err(QuoteValidationError::InvalidBoolean { field }),
	}
}

/// Repeated list parameter; blank entries are ignored
fn parse_unique_list<T>(params: &RawQuoteParams, field: &'static str) -> QuoteValidationResult<Vec<T>>
where
	T: FromStr + Eq + Hash + Copy,
{
	let mut seen = HashSet::new();
	let mut items = Vec::new();
	for value in params.get_all(field).filter(|v| !v.is_empty()) {
		let item = value
			.parse::<T>()
			.map_err(|_| QuoteValidationError::UnrecognizedElement {
				field,
				value: value.to_string(),
			})?;
		if !seen.insert(item) {
			return Err(QuoteValidationError::DuplicateElements { field });
		}
		items.push(item);
	}
	Ok(items)
}
