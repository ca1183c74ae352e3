//! Configuration settings structures

use crate::{configurable_value::ConfigurableValue, ConfigurableValueError};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use swap_types::constants::limits::{
	DEFAULT_BRIDGE_ORDER, DEFAULT_MAX_CONCURRENCY, DEFAULT_MAX_SELL_AMOUNT,
	DEFAULT_PER_BRIDGE_TIMEOUT_MS, DEFAULT_RATE_LIMIT_REQUESTS_PER_MINUTE,
	DEFAULT_REQUEST_TIMEOUT_MS, DEFAULT_ROUTER_TIMEOUT_MS, MAX_AFFILIATE_FEE_PERCENTAGE,
	MAX_UPSTREAM_TIMEOUT_MS, MIN_UPSTREAM_TIMEOUT_MS,
};
use swap_types::{BridgeType, NetworkId, SecretString, TokenAddress, TokenAmount};
use thiserror::Error;

/// Main application settings
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Settings {
	pub server: ServerSettings,
	pub timeouts: TimeoutSettings,
	pub discovery: DiscoverySettings,
	pub limits: LimitSettings,
	/// Liquidity router upstream; without it the builder needs an injected router
	pub router: Option<RouterSettings>,
	/// Bridge upstreams keyed by a free-form name
	pub bridges: HashMap<String, BridgeSettings>,
	/// Extra token list entries on top of the built-in list
	pub tokens: Vec<TokenListEntry>,
	pub environment: EnvironmentSettings,
	pub logging: LoggingSettings,
}

/// Server configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ServerSettings {
	pub host: String,
	pub port: u16,
}

impl Default for ServerSettings {
	fn default() -> Self {
		Self {
			host: "0.0.0.0".to_string(),
			port: 3000,
		}
	}
}

/// Timeout configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct TimeoutSettings {
	/// Budget for a single bridge probe
	pub per_bridge_ms: u64,
	/// Budget for a single liquidity router call
	pub router_ms: u64,
	/// Request timeout for outbound HTTP clients
	pub request_ms: u64,
}

impl Default for TimeoutSettings {
	fn default() -> Self {
		Self {
			per_bridge_ms: DEFAULT_PER_BRIDGE_TIMEOUT_MS,
			router_ms: DEFAULT_ROUTER_TIMEOUT_MS,
			request_ms: DEFAULT_REQUEST_TIMEOUT_MS,
		}
	}
}

/// How bridge candidates are probed
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DiscoveryStrategy {
	/// One bridge at a time, stopping at the first viable route
	Sequential,
	/// Bounded fan-out, reduced by candidate index
	Concurrent,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct DiscoverySettings {
	pub strategy: DiscoveryStrategy,
	pub max_concurrency: usize,
	/// Bridge type codes tried when the request does not name any
	pub default_bridge_order: Vec<u8>,
}

impl Default for DiscoverySettings {
	fn default() -> Self {
		Self {
			strategy: DiscoveryStrategy::Concurrent,
			max_concurrency: DEFAULT_MAX_CONCURRENCY,
			default_bridge_order: DEFAULT_BRIDGE_ORDER.to_vec(),
		}
	}
}

impl DiscoverySettings {
	/// Default order as bridge types; unknown codes are skipped
	pub fn bridge_order(&self) -> Vec<BridgeType> {
		self.default_bridge_order
			.iter()
			.filter_map(|code| BridgeType::from_code(*code))
			.collect()
	}
}

/// Request limits
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct LimitSettings {
	/// Largest accepted `sellAmount`, as a decimal string
	pub max_sell_amount: TokenAmount,
	pub max_affiliate_fee_percentage: f64,
}

impl Default for LimitSettings {
	fn default() -> Self {
		Self {
			max_sell_amount: TokenAmount::new(DEFAULT_MAX_SELL_AMOUNT),
			max_affiliate_fee_percentage: MAX_AFFILIATE_FEE_PERCENTAGE,
		}
	}
}

/// Liquidity router upstream
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct RouterSettings {
	pub id: String,
	pub endpoint: String,
	pub api_key: Option<ConfigurableValue>,
	pub headers: Option<HashMap<String, String>>,
}

impl RouterSettings {
	pub fn resolve_api_key(&self) -> Result<Option<SecretString>, ConfigurableValueError> {
		self.api_key
			.as_ref()
			.map(ConfigurableValue::resolve_for_secret)
			.transpose()
	}
}

/// One bridge upstream
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct BridgeSettings {
	/// Wire code of the bridge (0 Wormhole, 1 Stargate, 2 Celer, 3 CCTP, 4 Symbiosis)
	pub bridge_type: u8,
	pub endpoint: String,
	#[serde(default = "default_enabled")]
	pub enabled: bool,
	pub api_key: Option<ConfigurableValue>,
}

fn default_enabled() -> bool {
	true
}

impl BridgeSettings {
	pub fn resolve_api_key(&self) -> Result<Option<SecretString>, ConfigurableValueError> {
		self.api_key
			.as_ref()
			.map(ConfigurableValue::resolve_for_secret)
			.transpose()
	}
}

/// Token list entry from configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TokenListEntry {
	pub network: String,
	pub address: String,
	pub symbol: String,
	pub decimals: u8,
}

/// Environment-specific settings
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct EnvironmentSettings {
	pub profile: EnvironmentProfile,
	pub debug: bool,
	pub rate_limiting: RateLimitSettings,
}

impl Default for EnvironmentSettings {
	fn default() -> Self {
		Self {
			profile: EnvironmentProfile::Development,
			debug: true,
			rate_limiting: RateLimitSettings::default(),
		}
	}
}

/// Environment profiles
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum EnvironmentProfile {
	Development,
	Staging,
	Production,
}

/// Rate limiting configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct RateLimitSettings {
	pub enabled: bool,
	pub requests_per_minute: u32,
}

impl Default for RateLimitSettings {
	fn default() -> Self {
		Self {
			enabled: false,
			requests_per_minute: DEFAULT_RATE_LIMIT_REQUESTS_PER_MINUTE,
		}
	}
}

/// Logging configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingSettings {
	pub level: String,
	pub format: LogFormat,
	pub structured: bool,
}

impl Default for LoggingSettings {
	fn default() -> Self {
		Self {
			level: "info".to_string(),
			format: LogFormat::Pretty,
			structured: false,
		}
	}
}

/// Log format options
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
	Json,
	Pretty,
	Compact,
}

/// Inconsistent configuration detected by [`Settings::validate`]
#[derive(Debug, Error, PartialEq)]
pub enum ConfigValidationError {
	#[error("{field} must be between {min}ms and {max}ms, got {value}ms")]
	TimeoutOutOfRange {
		field: &'static str,
		value: u64,
		min: u64,
		max: u64,
	},

	#[error("discovery.max_concurrency must be at least 1")]
	ZeroConcurrency,

	#[error("discovery.default_bridge_order must not be empty")]
	EmptyBridgeOrder,

	#[error("Unknown bridge type {code} in {context}")]
	UnknownBridgeType { code: u8, context: String },

	#[error("Bridge type {code} is configured more than once")]
	DuplicateBridge { code: u8 },

	#[error("Endpoint for {name} must not be empty")]
	EmptyEndpoint { name: String },

	#[error("limits.max_sell_amount must be greater than 0")]
	ZeroMaxSellAmount,

	#[error("limits.max_affiliate_fee_percentage must be a non-negative number, got {value}")]
	InvalidAffiliateFeeLimit { value: f64 },

	#[error("Invalid token list entry #{index}: {reason}")]
	InvalidTokenEntry { index: usize, reason: String },
}

impl Settings {
	/// Get server bind address
	pub fn bind_address(&self) -> String {
		format!("{}:{}", self.server.host, self.server.port)
	}

	/// Enabled bridge entries only
	pub fn enabled_bridges(&self) -> HashMap<String, BridgeSettings> {
		self.bridges
			.iter()
			.filter(|(_, config)| config.enabled)
			.map(|(k, v)| (k.clone(), v.clone()))
			.collect()
	}

	/// Check if running in production
	pub fn is_production(&self) -> bool {
		self.environment.profile == EnvironmentProfile::Production
	}

	/// Check if debug mode is enabled
	pub fn is_debug(&self) -> bool {
		self.environment.debug && !self.is_production()
	}

	/// Reject configuration the service cannot run with
	pub fn validate(&self) -> Result<(), ConfigValidationError> {
		for (field, value) in [
			("timeouts.per_bridge_ms", self.timeouts.per_bridge_ms),
			("timeouts.router_ms", self.timeouts.router_ms),
			("timeouts.request_ms", self.timeouts.request_ms),
		] {
			if !(MIN_UPSTREAM_TIMEOUT_MS..=MAX_UPSTREAM_TIMEOUT_MS).contains(&value) {
				return Err(ConfigValidationError::TimeoutOutOfRange {
					field,
					value,
					min: MIN_UPSTREAM_TIMEOUT_MS,
					max: MAX_UPSTREAM_TIMEOUT_MS,
				});
			}
		}

		if self.discovery.max_concurrency == 0 {
			return Err(ConfigValidationError::ZeroConcurrency);
		}
		if self.discovery.default_bridge_order.is_empty() {
			return Err(ConfigValidationError::EmptyBridgeOrder);
		}
		for code in &self.discovery.default_bridge_order {
			if BridgeType::from_code(*code).is_none() {
				return Err(ConfigValidationError::UnknownBridgeType {
					code: *code,
					context: "discovery.default_bridge_order".to_string(),
				});
			}
		}

		if self.limits.max_sell_amount.is_zero() {
			return Err(ConfigValidationError::ZeroMaxSellAmount);
		}
		let fee_limit = self.limits.max_affiliate_fee_percentage;
		if !fee_limit.is_finite() || fee_limit < 0.0 {
			return Err(ConfigValidationError::InvalidAffiliateFeeLimit { value: fee_limit });
		}

		if let Some(router) = &self.router {
			if router.endpoint.trim().is_empty() {
				return Err(ConfigValidationError::EmptyEndpoint {
					name: format!("router '{}'", router.id),
				});
			}
		}

		let mut seen = HashSet::new();
		let mut names: Vec<&String> = self.bridges.keys().collect();
		names.sort();
		for name in names {
			let bridge = &self.bridges[name];
			if BridgeType::from_code(bridge.bridge_type).is_none() {
				return Err(ConfigValidationError::UnknownBridgeType {
					code: bridge.bridge_type,
					context: format!("bridges.{}", name),
				});
			}
			if bridge.enabled && !seen.insert(bridge.bridge_type) {
				return Err(ConfigValidationError::DuplicateBridge {
					code: bridge.bridge_type,
				});
			}
			if bridge.endpoint.trim().is_empty() {
				return Err(ConfigValidationError::EmptyEndpoint {
					name: format!("bridge '{}'", name),
				});
			}
		}

		for (index, entry) in self.tokens.iter().enumerate() {
			let invalid = |reason: String| ConfigValidationError::InvalidTokenEntry { index, reason };
			entry
				.network
				.parse::<NetworkId>()
				.map_err(|e| invalid(e.to_string()))?;
			entry
				.address
				.parse::<TokenAddress>()
				.map_err(|e| invalid(e.to_string()))?;
		}

		Ok(())
	}
}
