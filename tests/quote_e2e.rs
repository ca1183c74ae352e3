//! Same-chain quote E2E tests
//!
//! Exercises `GET /aggregator/quote` against the mock liquidity router.

mod mocks;

use crate::mocks::api_fixtures::*;
use crate::mocks::TestServer;
use reqwest::Client;

async fn get_quote(server: &TestServer, query: &Query) -> reqwest::Response {
	Client::new()
		.get(server.url("/aggregator/quote"))
		.query(query)
		.send()
		.await
		.unwrap()
}

#[tokio::test]
async fn test_quote_valid_request() {
	let server = TestServer::spawn().await.expect("Failed to start test server");

	let resp = get_quote(&server, &ApiFixtures::valid_quote_query()).await;
	assert_eq!(resp.status().as_u16(), 200);

	let body: serde_json::Value = resp.json().await.unwrap();
	assert!(body["id"].is_string());
	// 0.3% mock pool fee
	assert_eq!(body["amountOut"], "997000000000000000");
	assert!(body["targetAddress"].as_str().unwrap().starts_with("0x"));
	assert!(body["fees"].is_array());
	assert_eq!(body["resourceEstimate"]["gasLimit"], "180000");
	assert!(body.get("bridgeType").is_none());

	let typed = &body["typedData"];
	assert_eq!(typed["primaryType"], "Swap");
	assert_eq!(typed["domain"]["chainId"], 42161);
	assert_eq!(typed["message"]["fromAsset"], ARBITRUM_WETH);
	assert_eq!(typed["message"]["toAsset"], ARBITRUM_USDC);
	assert_eq!(typed["message"]["amountIn"], ONE_ETHER);
	// 0.5% default slippage on the output
	assert_eq!(typed["message"]["amountOutMin"], "992015000000000000");

	server.abort();
}

#[tokio::test]
async fn test_quote_trailing_slash_route() {
	let server = TestServer::spawn().await.expect("Failed to start test server");

	let resp = Client::new()
		.get(server.url("/aggregator/quote/"))
		.query(&ApiFixtures::valid_quote_query())
		.send()
		.await
		.unwrap();
	assert_eq!(resp.status().as_u16(), 200);

	server.abort();
}

#[tokio::test]
async fn test_quote_on_other_networks() {
	let server = TestServer::spawn().await.expect("Failed to start test server");

	for (network, from, to) in [
		("ethereum", ETHEREUM_WETH, ETHEREUM_USDC),
		("arbitrum", ARBITRUM_ARB, ARBITRUM_USDT),
		("arbitrum", ARBITRUM_WBTC, ARBITRUM_USDC),
	] {
		let query = vec![
			("network", network.to_string()),
			("fromTokenAddress", from.to_string()),
			("toTokenAddress", to.to_string()),
			("sellAmount", "100000000".to_string()),
		];
		let resp = get_quote(&server, &query).await;
		assert_eq!(resp.status().as_u16(), 200, "{} {} -> {}", network, from, to);
	}

	server.abort();
}

#[tokio::test]
async fn test_quote_missing_parameters() {
	let server = TestServer::spawn().await.expect("Failed to start test server");

	for field in ["network", "fromTokenAddress", "toTokenAddress", "sellAmount"] {
		let query = ApiFixtures::without(ApiFixtures::valid_quote_query(), field);
		let body = assert_error(get_quote(&server, &query).await, 400, 1001).await;
		assert_eq!(
			body["message"],
			format!("Wrong parameters: {} is required", field)
		);
	}

	server.abort();
}

#[tokio::test]
async fn test_quote_invalid_amounts() {
	let server = TestServer::spawn().await.expect("Failed to start test server");

	for amount in ["0", "-5", "1.5", "abc"] {
		let query = ApiFixtures::with(ApiFixtures::valid_quote_query(), "sellAmount", amount);
		assert_error(get_quote(&server, &query).await, 400, 1001).await;
	}

	server.abort();
}

#[tokio::test]
async fn test_quote_amount_too_low() {
	let server = TestServer::spawn().await.expect("Failed to start test server");

	// The mock rate rounds a single base unit down to nothing
	let query = ApiFixtures::with(ApiFixtures::valid_quote_query(), "sellAmount", "1");
	assert_error(get_quote(&server, &query).await, 400, 2010).await;

	server.abort();
}

#[tokio::test]
async fn test_quote_insufficient_liquidity() {
	let server = TestServer::spawn().await.expect("Failed to start test server");

	// Above the mock pool depth, below the configured sell ceiling
	let query = ApiFixtures::with(
		ApiFixtures::valid_quote_query(),
		"sellAmount",
		"100000000000000000000000000",
	);
	assert_error(get_quote(&server, &query).await, 400, 2011).await;

	server.abort();
}

#[tokio::test]
async fn test_quote_unknown_tokens() {
	let server = TestServer::spawn().await.expect("Failed to start test server");

	let query = ApiFixtures::with(
		ApiFixtures::valid_quote_query(),
		"fromTokenAddress",
		UNKNOWN_TOKEN,
	);
	assert_error(get_quote(&server, &query).await, 404, 2002).await;

	let query = ApiFixtures::with(ApiFixtures::valid_quote_query(), "toTokenAddress", UNKNOWN_TOKEN);
	assert_error(get_quote(&server, &query).await, 404, 2003).await;

	// Arbitrum tokens are not listed on Metis
	let query = ApiFixtures::with(ApiFixtures::valid_quote_query(), "network", "metis");
	assert_error(get_quote(&server, &query).await, 404, 2002).await;

	server.abort();
}

#[tokio::test]
async fn test_quote_identical_tokens_are_accepted() {
	let server = TestServer::spawn().await.expect("Failed to start test server");

	let query = ApiFixtures::with(ApiFixtures::valid_quote_query(), "toTokenAddress", ARBITRUM_WETH);
	assert_eq!(get_quote(&server, &query).await.status().as_u16(), 200);

	server.abort();
}

#[tokio::test]
async fn test_quote_native_token() {
	let server = TestServer::spawn().await.expect("Failed to start test server");

	let query = ApiFixtures::with(
		ApiFixtures::valid_quote_query(),
		"fromTokenAddress",
		"0x0000000000000000000000000000000000000000",
	);
	assert_eq!(get_quote(&server, &query).await.status().as_u16(), 200);

	server.abort();
}

#[tokio::test]
async fn test_quote_network_is_case_sensitive() {
	let server = TestServer::spawn().await.expect("Failed to start test server");

	// TODO: unknown networks should be rejected with 400 WRONG_PARAMETERS
	// instead of surfacing as an internal error.
	let query = ApiFixtures::with(ApiFixtures::valid_quote_query(), "network", "ARBITRUM");
	assert_error(get_quote(&server, &query).await, 500, 5000).await;

	let query = ApiFixtures::with(ApiFixtures::valid_quote_query(), "network", "solana");
	assert_error(get_quote(&server, &query).await, 500, 5000).await;

	server.abort();
}

#[tokio::test]
async fn test_quote_whitespace_is_not_trimmed() {
	let server = TestServer::spawn().await.expect("Failed to start test server");

	// TODO: same as above, padded network names should map to 400.
	let query = ApiFixtures::with(ApiFixtures::valid_quote_query(), "network", " arbitrum ");
	let query = ApiFixtures::with(query, "fromTokenAddress", &format!(" {} ", ARBITRUM_WETH));
	assert_error(get_quote(&server, &query).await, 500, 5000).await;

	// A padded address alone is a parameter error
	let query = ApiFixtures::with(
		ApiFixtures::valid_quote_query(),
		"fromTokenAddress",
		&format!(" {}", ARBITRUM_WETH),
	);
	assert_error(get_quote(&server, &query).await, 400, 1001).await;

	server.abort();
}

#[tokio::test]
async fn test_quote_slippage_bounds() {
	let server = TestServer::spawn().await.expect("Failed to start test server");

	for slippage in ["0", "0.1", "99.9"] {
		let query = ApiFixtures::with(ApiFixtures::valid_quote_query(), "slippage", slippage);
		assert_eq!(
			get_quote(&server, &query).await.status().as_u16(),
			200,
			"slippage {}",
			slippage
		);
	}
	for slippage in ["100", "150", "-1", "abc"] {
		let query = ApiFixtures::with(ApiFixtures::valid_quote_query(), "slippage", slippage);
		assert_error(get_quote(&server, &query).await, 400, 1001).await;
	}

	server.abort();
}

#[tokio::test]
async fn test_quote_liquidity_sources() {
	let server = TestServer::spawn().await.expect("Failed to start test server");

	let query = ApiFixtures::append(ApiFixtures::valid_quote_query(), "liquiditySources", "");
	assert_eq!(get_quote(&server, &query).await.status().as_u16(), 200);

	let query = ApiFixtures::append(
		ApiFixtures::append(ApiFixtures::valid_quote_query(), "liquiditySources", "uniswap-v3"),
		"liquiditySources",
		"camelot",
	);
	assert_eq!(get_quote(&server, &query).await.status().as_u16(), 200);

	let query = ApiFixtures::append(
		ApiFixtures::append(ApiFixtures::valid_quote_query(), "liquiditySources", "curve"),
		"liquiditySources",
		"curve",
	);
	let body = assert_error(get_quote(&server, &query).await, 400, 1001).await;
	assert_eq!(
		body["message"],
		"Wrong parameters: All liquiditySources's elements must be unique"
	);

	let query = ApiFixtures::append(ApiFixtures::valid_quote_query(), "liquiditySources", "dodo");
	assert_error(get_quote(&server, &query).await, 400, 1001).await;

	server.abort();
}

#[tokio::test]
async fn test_quote_affiliate_pairing() {
	let server = TestServer::spawn().await.expect("Failed to start test server");

	let with_address =
		ApiFixtures::with(ApiFixtures::valid_quote_query(), "affiliateAddress", WALLET);
	assert_error(get_quote(&server, &with_address).await, 400, 1001).await;

	let with_fee = ApiFixtures::with(
		ApiFixtures::valid_quote_query(),
		"affiliateFeeInPercentage",
		"1",
	);
	assert_error(get_quote(&server, &with_fee).await, 400, 1001).await;

	let both = ApiFixtures::with(with_address, "affiliateFeeInPercentage", "1");
	let resp = get_quote(&server, &both).await;
	assert_eq!(resp.status().as_u16(), 200);
	let body: serde_json::Value = resp.json().await.unwrap();
	let affiliate_fee = body["fees"]
		.as_array()
		.unwrap()
		.iter()
		.find(|fee| fee["type"] == "affiliate")
		.cloned()
		.expect("affiliate fee entry");
	// 1% of 1 ether
	assert_eq!(affiliate_fee["value"], "10000000000000000");

	server.abort();
}

#[tokio::test]
async fn test_quote_boolean_flags() {
	let server = TestServer::spawn().await.expect("Failed to start test server");

	let query = ApiFixtures::with(ApiFixtures::valid_quote_query(), "gasless", "true");
	let query = ApiFixtures::with(query, "enableRFQ", "false");
	assert_eq!(get_quote(&server, &query).await.status().as_u16(), 200);

	let query = ApiFixtures::with(ApiFixtures::valid_quote_query(), "gasless", "yes");
	assert_error(get_quote(&server, &query).await, 400, 1001).await;

	server.abort();
}

#[tokio::test]
async fn test_quote_response_headers() {
	let server = TestServer::spawn().await.expect("Failed to start test server");

	let resp = get_quote(&server, &ApiFixtures::valid_quote_query()).await;
	assert_eq!(resp.headers()["cache-control"], "no-store");
	assert_eq!(resp.headers()["x-content-type-options"], "nosniff");
	assert!(resp.headers().contains_key("x-request-id"));

	server.abort();
}

#[tokio::test]
async fn test_quote_echoes_addresses_into_typed_data() {
	let server = TestServer::spawn().await.expect("Failed to start test server");

	let query = ApiFixtures::with(ApiFixtures::valid_quote_query(), "fromAddress", WALLET);
	let query = ApiFixtures::with(query, "toAddress", &WALLET.to_uppercase().replace("0X", "0x"));
	let resp = get_quote(&server, &query).await;
	assert_eq!(resp.status().as_u16(), 200);

	let body: serde_json::Value = resp.json().await.unwrap();
	let typed = &body["typedData"];
	assert_eq!(typed["domain"]["name"], "Swap Aggregator");
	assert_eq!(typed["domain"]["version"], "1");
	assert!(typed["types"]["EIP712Domain"].is_array());
	assert!(typed["types"]["Swap"].is_array());
	assert_eq!(typed["message"]["router"], body["targetAddress"]);
	assert_eq!(typed["message"]["sender"], WALLET.to_lowercase());
	assert_eq!(typed["message"]["recipient"], WALLET.to_lowercase());
	assert_eq!(
		typed["message"]["affiliate"],
		"0x0000000000000000000000000000000000000000"
	);

	server.abort();
}
