//! Raw and validated quote request models

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::bridges::BridgeType;
use crate::constants::limits::{DEFAULT_ENABLE_RFQ, DEFAULT_GASLESS, DEFAULT_SLIPPAGE_PERCENTAGE};
use crate::models::TokenAmount;
use crate::networks::NetworkId;
use crate::tokens::TokenAddress;

/// Untyped query parameters in arrival order
///
/// Repeated keys are kept, which is how list parameters such as
/// `liquiditySources` and `bridgeTypes` arrive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawQuoteParams {
	pairs: Vec<(String, String)>,
}

impl RawQuoteParams {
	pub fn new(pairs: Vec<(String, String)>) -> Self {
		Self { pairs }
	}

	/// Append a parameter
	pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.pairs.push((key.into(), value.into()));
		self
	}

	/// First value for `key`; an empty value counts as absent
	pub fn get(&self, key: &str) -> Option<&str> {
		self.pairs
			.iter()
			.find(|(k, _)| k == key)
			.map(|(_, v)| v.as_str())
			.filter(|v| !v.is_empty())
	}

	/// Every value supplied for `key`, blanks included
	pub fn get_all<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a str> + 'a {
		self.pairs
			.iter()
			.filter(move |(k, _)| k == key)
			.map(|(_, v)| v.as_str())
	}
}

impl From<Vec<(String, String)>> for RawQuoteParams {
	fn from(pairs: Vec<(String, String)>) -> Self {
		Self::new(pairs)
	}
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RawQuoteParams {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		Self::new(
			iter.into_iter()
				.map(|(k, v)| (k.into(), v.into()))
				.collect(),
		)
	}
}

const MAX_SLIPPAGE_BPS: f64 = 9_999.0;

/// Slippage tolerance in percent, within `[0, 100)`
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Slippage(f64);

impl Slippage {
	/// Returns `None` when outside `[0, 100)` or not finite
	pub fn from_percentage(value: f64) -> Option<Self> {
		(value.is_finite() && (0.0..100.0).contains(&value)).then_some(Self(value))
	}

	pub fn percentage(&self) -> f64 {
		self.0
	}

	/// Basis points, rounded to nearest and capped below 100%
	pub fn bps(&self) -> u32 {
		(self.0 * 100.0).round().min(MAX_SLIPPAGE_BPS) as u32
	}
}

impl Default for Slippage {
	fn default() -> Self {
		Self(DEFAULT_SLIPPAGE_PERCENTAGE)
	}
}

/// Affiliate address and fee, always supplied together
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Affiliate {
	pub address: TokenAddress,
	/// Fee in percent of the sell amount
	pub fee_percentage: f64,
}

impl Affiliate {
	/// Fee in parts per million, as encoded in the typed payload
	pub fn fee_ppm(&self) -> u32 {
		(self.fee_percentage * 10_000.0).round() as u32
	}
}

/// DEX liquidity source that a same-chain quote may be restricted to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LiquiditySource {
	UniswapV2,
	UniswapV3,
	Sushi,
	Curve,
	BalancerV2,
	Pancakeswap,
	Camelot,
	Velodrome,
	Quickswap,
	TraderJoe,
}

/// Error returned for an unknown liquidity source identifier
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized liquidity source '{0}'")]
pub struct UnknownLiquiditySource(pub String);

impl LiquiditySource {
	pub fn all() -> &'static [LiquiditySource] {
		const ALL: &[LiquiditySource] = &[
			LiquiditySource::UniswapV2,
			LiquiditySource::UniswapV3,
			LiquiditySource::Sushi,
			LiquiditySource::Curve,
			LiquiditySource::BalancerV2,
			LiquiditySource::Pancakeswap,
			LiquiditySource::Camelot,
			LiquiditySource::Velodrome,
			LiquiditySource::Quickswap,
			LiquiditySource::TraderJoe,
		];
		ALL
	}

	pub const fn as_str(&self) -> &'static str {
		match self {
			LiquiditySource::UniswapV2 => "uniswap-v2",
			LiquiditySource::UniswapV3 => "uniswap-v3",
			LiquiditySource::Sushi => "sushi",
			LiquiditySource::Curve => "curve",
			LiquiditySource::BalancerV2 => "balancer-v2",
			LiquiditySource::Pancakeswap => "pancakeswap",
			LiquiditySource::Camelot => "camelot",
			LiquiditySource::Velodrome => "velodrome",
			LiquiditySource::Quickswap => "quickswap",
			LiquiditySource::TraderJoe => "trader-joe",
		}
	}
}

impl FromStr for LiquiditySource {
	type Err = UnknownLiquiditySource;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		LiquiditySource::all()
			.iter()
			.copied()
			.find(|source| source.as_str() == s)
			.ok_or_else(|| UnknownLiquiditySource(s.to_string()))
	}
}

impl fmt::Display for LiquiditySource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Validated same-chain quote request
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteRequest {
	pub network: NetworkId,
	pub from_token: TokenAddress,
	pub to_token: TokenAddress,
	pub sell_amount: TokenAmount,
	pub slippage: Slippage,
	pub gasless: bool,
	pub from_address: Option<TokenAddress>,
	pub to_address: Option<TokenAddress>,
	pub affiliate: Option<Affiliate>,
	pub enable_rfq: bool,
	/// Empty means no restriction
	pub liquidity_sources: Vec<LiquiditySource>,
}

impl QuoteRequest {
	/// Request with default options, mostly useful for tests and internal callers
	pub fn new(
		network: NetworkId,
		from_token: TokenAddress,
		to_token: TokenAddress,
		sell_amount: TokenAmount,
	) -> Self {
		Self {
			network,
			from_token,
			to_token,
			sell_amount,
			slippage: Slippage::default(),
			gasless: DEFAULT_GASLESS,
			from_address: None,
			to_address: None,
			affiliate: None,
			enable_rfq: DEFAULT_ENABLE_RFQ,
			liquidity_sources: Vec::new(),
		}
	}
}

/// Validated cross-chain quote request; `from_network != to_network`
#[derive(Debug, Clone, PartialEq)]
pub struct CrossChainQuoteRequest {
	pub from_network: NetworkId,
	pub to_network: NetworkId,
	pub from_token: TokenAddress,
	pub to_token: TokenAddress,
	pub sell_amount: TokenAmount,
	pub slippage_in: Slippage,
	pub slippage_out: Slippage,
	pub gasless: bool,
	pub from_address: Option<TokenAddress>,
	pub to_address: Option<TokenAddress>,
	/// Caller-chosen bridges in priority order; empty means the configured default
	pub bridge_types: Vec<BridgeType>,
}

impl CrossChainQuoteRequest {
	pub fn new(
		from_network: NetworkId,
		to_network: NetworkId,
		from_token: TokenAddress,
		to_token: TokenAddress,
		sell_amount: TokenAmount,
	) -> Self {
		Self {
			from_network,
			to_network,
			from_token,
			to_token,
			sell_amount,
			slippage_in: Slippage::default(),
			slippage_out: Slippage::default(),
			gasless: DEFAULT_GASLESS,
			from_address: None,
			to_address: None,
			bridge_types: Vec::new(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_raw_params_treat_empty_as_absent() {
		let params = RawQuoteParams::default()
			.with("network", "")
			.with("sellAmount", "100");
		assert_eq!(params.get("network"), None);
		assert_eq!(params.get("sellAmount"), Some("100"));
		assert_eq!(params.get("missing"), None);
	}

	#[test]
	fn test_raw_params_keep_repeated_keys() {
		let params: RawQuoteParams = vec![
			("liquiditySources", "uniswap-v3"),
			("network", "arbitrum"),
			("liquiditySources", "sushi"),
		]
		.into_iter()
		.collect();
		let sources: Vec<&str> = params.get_all("liquiditySources").collect();
		assert_eq!(sources, vec!["uniswap-v3", "sushi"]);
	}

	#[test]
	fn test_slippage_bounds() {
		assert!(Slippage::from_percentage(0.0).is_some());
		assert!(Slippage::from_percentage(99.99).is_some());
		assert!(Slippage::from_percentage(100.0).is_none());
		assert!(Slippage::from_percentage(-0.1).is_none());
		assert!(Slippage::from_percentage(f64::NAN).is_none());
		assert_eq!(Slippage::from_percentage(0.5).unwrap().bps(), 50);
		assert_eq!(Slippage::default().percentage(), 0.5);
	}

	#[test]
	fn test_slippage_near_hundred_keeps_some_output() {
		let slippage = Slippage::from_percentage(99.995).unwrap();
		assert_eq!(slippage.bps(), 9_999);
		assert_eq!(Slippage::from_percentage(0.29).unwrap().bps(), 29);
		assert_eq!(
			TokenAmount::new(1_000_000).less_bps(slippage.bps()),
			TokenAmount::new(100)
		);
	}

	#[test]
	fn test_affiliate_fee_encoding() {
		let affiliate = Affiliate {
			address: TokenAddress::NATIVE,
			fee_percentage: 0.01,
		};
		assert_eq!(affiliate.fee_ppm(), 100);

		let affiliate = Affiliate {
			fee_percentage: 10.0,
			..affiliate
		};
		assert_eq!(affiliate.fee_ppm(), 100_000);
	}

	#[test]
	fn test_liquidity_source_identifiers() {
		for source in LiquiditySource::all() {
			assert_eq!(source.as_str().parse::<LiquiditySource>().unwrap(), *source);
			assert_eq!(
				serde_json::to_string(source).unwrap(),
				format!("\"{}\"", source.as_str())
			);
		}
		assert!("invalidsource".parse::<LiquiditySource>().is_err());
		assert!("Sushi".parse::<LiquiditySource>().is_err());
	}
}
