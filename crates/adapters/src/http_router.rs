//! Liquidity router backed by an HTTP pricing upstream
//!
//! `POST {endpoint}/quote` with a [`RouteRequest`] body, answered by a [`RouteQuote`].

use async_trait::async_trait;
use std::collections::HashMap;
use swap_config::RouterSettings;
use swap_types::{AdapterError, AdapterResult, LiquidityRouter, RouteQuote, RouteRequest};
use tracing::debug;

use crate::client_cache::{AuthConfig, ClientCache, ClientConfig};
use crate::http::{build_url, post_json};

#[derive(Debug)]
pub struct HttpRouterAdapter {
	id: String,
	endpoint: String,
	timeout_ms: u64,
	client_config: ClientConfig,
	auth: AuthConfig,
	cache: ClientCache,
}

impl HttpRouterAdapter {
	pub fn new(id: &str, endpoint: &str, timeout_ms: u64, cache: ClientCache) -> Self {
		Self {
			id: id.to_string(),
			endpoint: endpoint.to_string(),
			timeout_ms,
			client_config: ClientConfig::new(id, endpoint, timeout_ms),
			auth: AuthConfig::None,
			cache,
		}
	}

	pub fn with_auth(mut self, auth: AuthConfig) -> Self {
		self.auth = auth;
		self
	}

	pub fn with_headers(mut self, headers: HashMap<String, String>) -> Self {
		self.client_config = self.client_config.with_headers(headers);
		self
	}

	/// Build from the `[router]` settings section
	pub fn from_settings(
		settings: &RouterSettings,
		timeout_ms: u64,
		cache: ClientCache,
	) -> AdapterResult<Self> {
		let api_key = settings
			.resolve_api_key()
			.map_err(|e| AdapterError::ConfigError {
				reason: e.to_string(),
			})?;

		let mut adapter = Self::new(&settings.id, &settings.endpoint, timeout_ms, cache)
			.with_auth(AuthConfig::api_key(api_key));
		if let Some(headers) = &settings.headers {
			adapter = adapter.with_headers(headers.clone());
		}
		Ok(adapter)
	}
}

#[async_trait]
impl LiquidityRouter for HttpRouterAdapter {
	fn id(&self) -> &str {
		&self.id
	}

	async fn quote(&self, request: &RouteRequest) -> AdapterResult<RouteQuote> {
		debug!(
			router = %self.id,
			network = %request.network,
			sell_amount = %request.sell_amount,
			"Requesting route from liquidity router"
		);

		let url = build_url(&self.endpoint, "quote")?;
		let client = self
			.cache
			.get_client_with_auth(&self.client_config, &self.auth)?;
		post_json(&client, url, request, self.timeout_ms).await
	}

	async fn health_check(&self) -> AdapterResult<bool> {
		let url = build_url(&self.endpoint, "health")?;
		let client = self
			.cache
			.get_client_with_auth(&self.client_config, &self.auth)?;
		let response = client.get(url).send().await?;
		Ok(response.status().is_success())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use swap_types::{NetworkId, TokenAddress, TokenAmount};

	fn request() -> RouteRequest {
		RouteRequest {
			network: NetworkId::Arbitrum,
			chain_id: 42161,
			from_token: TokenAddress::NATIVE,
			to_token: "0xaf88d065e77c8cc2239327c5edb3a432268e5831".parse().unwrap(),
			sell_amount: TokenAmount::new(1_000_000_000_000_000),
			slippage_bps: 50,
			gasless: false,
			enable_rfq: false,
			from_address: None,
			to_address: None,
			liquidity_sources: vec![],
		}
	}

	#[test]
	fn test_from_settings_resolves_plain_key() {
		let settings = RouterSettings {
			id: "primary".to_string(),
			endpoint: "http://localhost:7000".to_string(),
			api_key: Some(swap_config::ConfigurableValue::from_plain("k")),
			headers: None,
		};
		let adapter = HttpRouterAdapter::from_settings(&settings, 1_000, ClientCache::new()).unwrap();
		assert_eq!(adapter.id(), "primary");
		assert!(matches!(adapter.auth, AuthConfig::ApiKey { .. }));
	}

	#[test]
	fn test_from_settings_fails_on_missing_env_key() {
		let settings = RouterSettings {
			id: "primary".to_string(),
			endpoint: "http://localhost:7000".to_string(),
			api_key: Some(swap_config::ConfigurableValue::from_env(
				"SWAP_TEST_ROUTER_KEY_MISSING",
			)),
			headers: None,
		};
		let err = HttpRouterAdapter::from_settings(&settings, 1_000, ClientCache::new()).unwrap_err();
		assert!(matches!(err, AdapterError::ConfigError { .. }));
	}

	#[tokio::test]
	async fn test_unreachable_upstream_is_transport_error() {
		// Port 9 (discard) is not expected to run an HTTP server
		let adapter = HttpRouterAdapter::new("primary", "http://127.0.0.1:9", 500, ClientCache::new());
		let err = adapter.quote(&request()).await.unwrap_err();
		assert!(err.is_transport());
	}
}
