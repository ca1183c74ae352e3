//! Query fixtures for the quote endpoints

#![allow(dead_code)]

pub const ARBITRUM_WETH: &str = "0x82af49447d8a07e3bd95bd0d56f35241523fbab1";
pub const ARBITRUM_USDC: &str = "0xaf88d065e77c8cc2239327c5edb3a432268e5831";
pub const ARBITRUM_USDT: &str = "0xFd086bC7CD5C481DCC9C85ebE478A1C0b69FCbb9";
pub const ARBITRUM_ARB: &str = "0x912CE59144191C1204E64559FE8253a0e49E6548";
pub const ARBITRUM_WBTC: &str = "0x2f2a2543B76A4166549F7aaB2e75Bef0aefC5B0f";
pub const ETHEREUM_WETH: &str = "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2";
pub const ETHEREUM_USDC: &str = "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48";
pub const POLYGON_USDC_E: &str = "0x2791Bca1f2de4661ED88A30C99A7a9449Aa84174";
pub const OPTIMISM_WETH: &str = "0x4200000000000000000000000000000000000006";
pub const OPTIMISM_USDC: &str = "0x0b2C639c533813f4Aa9D7837CAf62653d097Ff85";
pub const WALLET: &str = "0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045";
pub const UNKNOWN_TOKEN: &str = "0x1234567890123456789012345678901234567890";

pub const ONE_ETHER: &str = "1000000000000000000";

pub type Query = Vec<(&'static str, String)>;

pub struct ApiFixtures;

impl ApiFixtures {
	/// 1 WETH to USDC on Arbitrum
	pub fn valid_quote_query() -> Query {
		vec![
			("network", "arbitrum".to_string()),
			("fromTokenAddress", ARBITRUM_WETH.to_string()),
			("toTokenAddress", ARBITRUM_USDC.to_string()),
			("sellAmount", ONE_ETHER.to_string()),
		]
	}

	/// 1 WETH on Arbitrum to WETH on Ethereum
	pub fn valid_quote_in_query() -> Query {
		vec![
			("fromNetwork", "arbitrum".to_string()),
			("toNetwork", "ethereum".to_string()),
			("fromTokenAddress", ARBITRUM_WETH.to_string()),
			("toTokenAddress", ETHEREUM_WETH.to_string()),
			("sellAmount", ONE_ETHER.to_string()),
		]
	}

	/// Replace `key` (or append it) in `query`
	pub fn with(mut query: Query, key: &'static str, value: &str) -> Query {
		query.retain(|(k, _)| *k != key);
		query.push((key, value.to_string()));
		query
	}

	/// Append another value for `key`, keeping existing ones
	pub fn append(mut query: Query, key: &'static str, value: &str) -> Query {
		query.push((key, value.to_string()));
		query
	}

	pub fn without(mut query: Query, key: &'static str) -> Query {
		query.retain(|(k, _)| *k != key);
		query
	}
}

/// Assert status and error code of an error body
pub async fn assert_error(resp: reqwest::Response, status: u16, code: u64) -> serde_json::Value {
	assert_eq!(resp.status().as_u16(), status);
	let body: serde_json::Value = resp.json().await.unwrap();
	assert_eq!(body["code"], code, "unexpected body: {}", body);
	assert!(body["error"].is_string());
	assert!(body["message"].is_string());
	assert!(body["timestamp"].is_number());
	body
}
