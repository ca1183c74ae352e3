//! Health endpoint E2E tests

mod mocks;

use std::sync::Arc;

use crate::mocks::TestServer;
use reqwest::Client;
use swap_aggregator::mocks::{MockBridge, MockLiquidityRouter};
use swap_aggregator::{AggregatorBuilder, BridgeType};

#[tokio::test]
async fn test_health_endpoint() {
	let server = TestServer::spawn_with_bridges(vec![
		MockBridge::quoting(BridgeType::Symbiosis),
		MockBridge::quoting(BridgeType::Wormhole),
	])
	.await
	.expect("Failed to start test server");

	let resp = Client::new()
		.get(server.url("/health"))
		.send()
		.await
		.unwrap();

	assert!(resp.status().is_success());
	let body: serde_json::Value = resp.json().await.unwrap();
	assert_eq!(body["status"], "healthy");
	assert_eq!(body["router"]["id"], "mock-router");
	assert_eq!(body["router"]["healthy"], true);
	assert_eq!(body["bridges"], serde_json::json!([0, 4]));
	assert!(body["version"].is_string());

	server.abort();
}

#[tokio::test]
async fn test_health_degraded_when_router_down() {
	let builder = AggregatorBuilder::new().with_router(Arc::new(MockLiquidityRouter::unhealthy()));
	let server = TestServer::spawn_with_builder(builder)
		.await
		.expect("Failed to start test server");

	let resp = Client::new()
		.get(server.url("/health/"))
		.send()
		.await
		.unwrap();

	assert!(resp.status().is_success());
	let body: serde_json::Value = resp.json().await.unwrap();
	assert_eq!(body["status"], "degraded");
	assert_eq!(body["router"]["healthy"], false);

	server.abort();
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
	let server = TestServer::spawn().await.expect("Failed to start test server");

	let resp = Client::new()
		.get(server.url("/v1/quotes"))
		.send()
		.await
		.unwrap();
	assert_eq!(resp.status().as_u16(), 404);

	server.abort();
}
