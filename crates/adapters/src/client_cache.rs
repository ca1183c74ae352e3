//! HTTP client cache shared by the upstream adapters
//!
//! Keeps one pooled `reqwest::Client` per upstream configuration, recreated after a TTL.

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use reqwest::{Client, ClientBuilder};
use std::sync::Arc;
use std::time::{Duration, Instant};
use swap_types::{AdapterError, AdapterResult, SecretString};
use tracing::{debug, warn};

const USER_AGENT: &str = "Swap-Aggregator/1.0";

/// Everything that makes two upstream clients different
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClientConfig {
	pub base_url: String,
	/// Upstream identifier (router id or bridge name), keeps clients apart per upstream
	pub upstream_id: String,
	/// Whole-request timeout applied by the client
	pub request_timeout_ms: u64,
	pub max_idle_per_host: usize,
	pub keep_alive_timeout_ms: u64,
	pub headers: Vec<(String, String)>,
}

impl ClientConfig {
	pub fn new(upstream_id: &str, base_url: &str, request_timeout_ms: u64) -> Self {
		Self {
			base_url: base_url.to_string(),
			upstream_id: upstream_id.to_string(),
			request_timeout_ms,
			max_idle_per_host: 10,
			keep_alive_timeout_ms: 90_000,
			headers: vec![
				("User-Agent".to_string(), USER_AGENT.to_string()),
				("Accept".to_string(), "application/json".to_string()),
			],
		}
	}

	pub fn with_headers<I>(mut self, headers: I) -> Self
	where
		I: IntoIterator<Item = (String, String)>,
	{
		self.headers.extend(headers);
		self
	}
}

/// Authentication applied through default headers
#[derive(Debug, Clone)]
pub enum AuthConfig {
	None,
	Bearer { token: SecretString },
	ApiKey { header: String, key: SecretString },
}

impl AuthConfig {
	/// `X-API-Key` header auth when a key is configured
	pub fn api_key(key: Option<SecretString>) -> Self {
		match key {
			Some(key) => Self::ApiKey {
				header: "X-API-Key".to_string(),
				key,
			},
			None => Self::None,
		}
	}

	fn apply(&self, config: &mut ClientConfig) {
		match self {
			AuthConfig::None => {},
			AuthConfig::Bearer { token } => config.headers.push((
				"Authorization".to_string(),
				format!("Bearer {}", token.expose_secret()),
			)),
			AuthConfig::ApiKey { header, key } => config
				.headers
				.push((header.clone(), key.expose_secret().to_string())),
		}
	}
}

#[derive(Debug, Clone)]
struct CachedClient {
	client: Arc<Client>,
	created_at: Instant,
}

impl CachedClient {
	fn new(client: Client) -> Self {
		Self {
			client: Arc::new(client),
			created_at: Instant::now(),
		}
	}

	fn is_expired(&self, ttl: Duration) -> bool {
		self.created_at.elapsed() > ttl
	}
}

/// Thread-safe cache of HTTP clients with TTL
#[derive(Clone, Debug)]
pub struct ClientCache {
	clients: Arc<DashMap<ClientConfig, CachedClient>>,
	ttl: Duration,
}

impl ClientCache {
	/// Cache with a 30-minute TTL
	pub fn new() -> Self {
		Self::with_ttl(Duration::from_secs(30 * 60))
	}

	pub fn with_ttl(ttl: Duration) -> Self {
		Self {
			clients: Arc::new(DashMap::new()),
			ttl,
		}
	}

	/// Get or create the client for `config`
	pub fn get_client(&self, config: &ClientConfig) -> AdapterResult<Arc<Client>> {
		self.clients.remove_if(config, |_, cached| {
			let expired = cached.is_expired(self.ttl);
			if expired {
				warn!(
					"Client cache expired for {} (age: {:?}), will create new client",
					config.base_url,
					cached.created_at.elapsed()
				);
			}
			expired
		});

		if let Some(cached) = self.clients.get(config) {
			return Ok(cached.client.clone());
		}

		debug!("Creating new client for {}", config.base_url);
		let cached = CachedClient::new(Self::build_client(config)?);

		// Another task may have inserted meanwhile; keep whichever landed first
		match self.clients.entry(config.clone()) {
			Entry::Occupied(entry) => Ok(entry.get().client.clone()),
			Entry::Vacant(entry) => {
				let client = cached.client.clone();
				entry.insert(cached);
				Ok(client)
			},
		}
	}

	pub fn get_client_with_auth(
		&self,
		config: &ClientConfig,
		auth: &AuthConfig,
	) -> AdapterResult<Arc<Client>> {
		let mut config = config.clone();
		auth.apply(&mut config);
		self.get_client(&config)
	}

	fn build_client(config: &ClientConfig) -> AdapterResult<Client> {
		let mut header_map = reqwest::header::HeaderMap::new();
		for (key, value) in &config.headers {
			if let (Ok(name), Ok(value)) = (
				reqwest::header::HeaderName::from_bytes(key.as_bytes()),
				reqwest::header::HeaderValue::from_str(value),
			) {
				header_map.insert(name, value);
			}
		}

		ClientBuilder::new()
			.pool_max_idle_per_host(config.max_idle_per_host)
			.pool_idle_timeout(Duration::from_millis(config.keep_alive_timeout_ms))
			.tcp_keepalive(Duration::from_secs(60))
			.timeout(Duration::from_millis(config.request_timeout_ms))
			.default_headers(header_map)
			.build()
			.map_err(AdapterError::HttpError)
	}

	/// Drop expired clients, returning how many were removed
	pub fn cleanup_expired(&self) -> usize {
		let before = self.clients.len();
		self.clients.retain(|_, cached| !cached.is_expired(self.ttl));
		let removed = before.saturating_sub(self.clients.len());
		if removed > 0 {
			debug!("Cleaned up {} expired clients from cache", removed);
		}
		removed
	}

	pub fn len(&self) -> usize {
		self.clients.len()
	}

	pub fn is_empty(&self) -> bool {
		self.clients.is_empty()
	}

	pub fn ttl(&self) -> Duration {
		self.ttl
	}
}

impl Default for ClientCache {
	fn default() -> Self {
		Self::new()
	}
}
