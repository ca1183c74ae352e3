//! Bridge backend reached over HTTP
//!
//! Every bridge upstream exposes `POST {endpoint}/quote` taking a
//! [`BridgeQuoteRequest`] and answering with a [`RouteQuote`].

use async_trait::async_trait;
use swap_config::BridgeSettings;
use swap_types::{
	AdapterError, AdapterResult, BridgeAdapter, BridgeQuoteRequest, BridgeType, RouteQuote,
};
use tracing::debug;

use crate::client_cache::{AuthConfig, ClientCache, ClientConfig};
use crate::http::{build_url, post_json};

#[derive(Debug)]
pub struct HttpBridgeAdapter {
	name: String,
	bridge_type: BridgeType,
	endpoint: String,
	timeout_ms: u64,
	client_config: ClientConfig,
	auth: AuthConfig,
	cache: ClientCache,
}

impl HttpBridgeAdapter {
	pub fn new(
		name: &str,
		bridge_type: BridgeType,
		endpoint: &str,
		timeout_ms: u64,
		cache: ClientCache,
	) -> Self {
		Self {
			name: name.to_string(),
			bridge_type,
			endpoint: endpoint.to_string(),
			timeout_ms,
			client_config: ClientConfig::new(name, endpoint, timeout_ms),
			auth: AuthConfig::None,
			cache,
		}
	}

	pub fn with_auth(mut self, auth: AuthConfig) -> Self {
		self.auth = auth;
		self
	}

	pub fn from_settings(
		name: &str,
		settings: &BridgeSettings,
		timeout_ms: u64,
		cache: ClientCache,
	) -> AdapterResult<Self> {
		let bridge_type =
			BridgeType::from_code(settings.bridge_type).ok_or_else(|| AdapterError::ConfigError {
				reason: format!("bridge '{}' has unknown type {}", name, settings.bridge_type),
			})?;
		let api_key = settings
			.resolve_api_key()
			.map_err(|e| AdapterError::ConfigError {
				reason: e.to_string(),
			})?;

		Ok(
			Self::new(name, bridge_type, &settings.endpoint, timeout_ms, cache)
				.with_auth(AuthConfig::api_key(api_key)),
		)
	}

	pub fn name(&self) -> &str {
		&self.name
	}
}

#[async_trait]
impl BridgeAdapter for HttpBridgeAdapter {
	fn bridge_type(&self) -> BridgeType {
		self.bridge_type
	}

	async fn quote(&self, request: &BridgeQuoteRequest) -> AdapterResult<RouteQuote> {
		debug!(
			bridge = %self.bridge_type,
			from = %request.from_network,
			to = %request.to_network,
			"Requesting bridge quote"
		);

		let url = build_url(&self.endpoint, "quote")?;
		let client = self
			.cache
			.get_client_with_auth(&self.client_config, &self.auth)?;
		post_json(&client, url, request, self.timeout_ms).await
	}
}
