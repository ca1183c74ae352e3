//! Swap Aggregator Library
//!
//! Multi-chain swap quote service: validates quote requests, resolves tokens,
//! prices same-chain swaps through a liquidity router and discovers a bridge
//! for cross-chain swaps.

// Core domain types - the most commonly used types
pub use swap_types::{
	chrono,
	// External dependencies for convenience
	serde_json,
	AdapterError,
	AdapterResult,
	BridgeAdapter,
	BridgeQuoteRequest,
	BridgeType,
	CrossChainQuoteRequest,
	ErrorCode,
	ErrorInfo,
	LiquidityRouter,
	NetworkId,
	// Error types
	QuoteError,
	QuoteRequest,
	QuoteResponse,
	RawQuoteParams,
	RouteQuote,
	RouteRequest,
	TokenAddress,
	TokenAmount,
	TokenMetadata,
	TokenRegistry,
};

// Service layer
pub use swap_service::{
	BridgeDiscoveryEngine, BridgeRegistry, QuoteService, QuoteServiceTrait, QuoteValidator,
	TokenResolver,
};

// API layer
pub use swap_api::{apply_rate_limit, create_router, AppState, MemoryRateLimiter};

// Adapters
pub use swap_adapters::{AdapterFactory, HttpBridgeAdapter, HttpRouterAdapter, StaticTokenRegistry};

// Config
pub use swap_config::{load_config, log_service_info, log_startup_complete, Settings};

// Module aliases
pub mod models {
	pub use swap_types::*;
}

pub mod config {
	pub use swap_config::*;
}

pub mod adapters {
	pub use swap_adapters::*;
}

pub mod api {
	pub use swap_api::*;
}

pub mod service {
	pub use swap_service::*;
}

pub mod mocks;

use std::net::SocketAddr;
use std::sync::Arc;
use swap_config::{log_configuration_summary, log_service_shutdown};
use tracing::{info, warn};

// Re-export external dependencies for embedders
pub use async_trait;
pub use reqwest;

/// Builder pattern for configuring the aggregator
#[derive(Default)]
pub struct AggregatorBuilder {
	settings: Option<Settings>,
	router: Option<Arc<dyn LiquidityRouter>>,
	bridges: Vec<Arc<dyn BridgeAdapter>>,
	token_registry: Option<Arc<dyn TokenRegistry>>,
}

impl AggregatorBuilder {
	/// Create a new aggregator builder with default settings
	pub fn new() -> Self {
		Self::default()
	}

	/// Create aggregator builder from configuration
	pub fn from_config(settings: Settings) -> Self {
		Self::new().with_settings(settings)
	}

	/// Set custom settings
	pub fn with_settings(mut self, settings: Settings) -> Self {
		self.settings = Some(settings);
		self
	}

	/// Get the current settings
	pub fn settings(&self) -> Option<&Settings> {
		self.settings.as_ref()
	}

	/// Use this liquidity router instead of the configured `[router]`
	pub fn with_router(mut self, router: Arc<dyn LiquidityRouter>) -> Self {
		self.router = Some(router);
		self
	}

	/// Register a bridge adapter; it replaces a configured bridge of the same type
	pub fn with_bridge(mut self, bridge: Arc<dyn BridgeAdapter>) -> Self {
		self.bridges.push(bridge);
		self
	}

	/// Use this token registry instead of the built-in token list
	pub fn with_token_registry(mut self, registry: Arc<dyn TokenRegistry>) -> Self {
		self.token_registry = Some(registry);
		self
	}

	/// Initialize tracing with configuration-based settings
	fn init_tracing_from_settings(settings: &Settings) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
		use swap_config::LogFormat;

		// Create env filter using config level or environment variable
		let log_level = &settings.logging.level;
		let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
			.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

		match settings.logging.format {
			LogFormat::Json => {
				let subscriber = tracing_subscriber::fmt().json().with_env_filter(env_filter);

				if settings.logging.structured {
					subscriber.with_target(true).with_thread_ids(true).try_init()?;
				} else {
					subscriber.try_init()?;
				}
			},
			LogFormat::Pretty => {
				let subscriber = tracing_subscriber::fmt()
					.pretty()
					.with_env_filter(env_filter);

				if settings.logging.structured {
					subscriber.with_target(true).with_thread_ids(true).try_init()?;
				} else {
					subscriber.try_init()?;
				}
			},
			LogFormat::Compact => {
				let subscriber = tracing_subscriber::fmt()
					.compact()
					.with_env_filter(env_filter);

				if settings.logging.structured {
					subscriber.with_target(true).with_thread_ids(true).try_init()?;
				} else {
					subscriber.try_init()?;
				}
			},
		}

		info!(
			"Logging configuration applied: level={}, format={:?}, structured={}",
			settings.logging.level, settings.logging.format, settings.logging.structured
		);

		Ok(())
	}

	/// Wire every component and return the configured router with state
	pub async fn start(self) -> Result<(axum::Router, AppState), Box<dyn std::error::Error>> {
		let settings = self.settings.unwrap_or_default();
		settings
			.validate()
			.map_err(|e| format!("Invalid configuration: {}", e))?;

		let factory = AdapterFactory::default();

		let router = match self.router {
			Some(router) => router,
			None => factory
				.router(&settings)
				.map_err(|e| format!("Failed to create liquidity router: {}", e))?
				.ok_or("No liquidity router configured: set [router] or call with_router()")?,
		};

		let token_registry: Arc<dyn TokenRegistry> = match self.token_registry {
			Some(registry) => registry,
			None => Arc::new(
				factory
					.token_registry(&settings)
					.map_err(|e| format!("Failed to load token list: {}", e))?,
			),
		};

		let mut bridge_registry: BridgeRegistry = factory
			.bridges(&settings)
			.map_err(|e| format!("Failed to create bridge adapters: {}", e))?
			.into_iter()
			.collect();
		for bridge in self.bridges {
			bridge_registry.register(bridge);
		}
		if bridge_registry.is_empty() {
			warn!("No bridges registered; cross-chain quotes will fail");
		}

		info!(
			router = router.id(),
			bridges = bridge_registry.len(),
			"Successfully initialized quote collaborators"
		);

		let discovery = BridgeDiscoveryEngine::from_settings(bridge_registry, &settings);
		let quote_service = QuoteService::new(
			QuoteValidator::from_limits(&settings.limits),
			TokenResolver::new(token_registry),
			router,
			discovery,
		)
		.with_router_timeout_ms(settings.timeouts.router_ms);

		let app_state = AppState::new(Arc::new(quote_service) as Arc<dyn QuoteServiceTrait>);
		let mut app = create_router().with_state(app_state.clone());

		let rate_cfg = &settings.environment.rate_limiting;
		if rate_cfg.enabled {
			info!(
				requests_per_minute = rate_cfg.requests_per_minute,
				"Rate limiting enabled"
			);
			app = apply_rate_limit(
				app,
				Arc::new(MemoryRateLimiter::new(rate_cfg.requests_per_minute)),
			);
		}

		Ok((app, app_state))
	}

	/// Start the complete server with all defaults and setup
	/// This method handles everything needed to run the server, including:
	/// - Loading .env file
	/// - Loading configuration with defaults
	/// - Initializing tracing
	/// - Binding and serving the application until Ctrl+C
	pub async fn start_server(mut self) -> Result<(), Box<dyn std::error::Error>> {
		// Load .env file if it exists
		dotenvy::dotenv().ok();

		let using_provided_settings = self.settings.is_some();
		let settings = match self.settings.take() {
			Some(settings) => settings,
			None => load_config().unwrap_or_default(),
		};

		Self::init_tracing_from_settings(&settings).map_err(|e| -> Box<dyn std::error::Error> { e })?;

		log_service_info();
		info!(
			"Using configuration: loaded from {}",
			if using_provided_settings {
				"provided settings"
			} else {
				"config file or defaults"
			}
		);
		log_configuration_summary(&settings);

		let bind_addr = settings.bind_address();
		let addr: SocketAddr = bind_addr
			.parse()
			.map_err(|e| format!("Invalid bind address '{}': {}", bind_addr, e))?;

		self.settings = Some(settings);
		let (app, _) = self.start().await?;

		let listener = tokio::net::TcpListener::bind(addr).await?;

		log_startup_complete(&bind_addr);
		info!("API endpoints available:");
		info!("  GET  /health");
		info!("  GET  /aggregator/quote");
		info!("  GET  /aggregator/quote-in");
		if cfg!(feature = "openapi") {
			info!("  GET  /swagger-ui");
			info!("  GET  /api-docs/openapi.json");
		}

		axum::serve(listener, app)
			.with_graceful_shutdown(shutdown_signal())
			.await?;

		log_service_shutdown();
		Ok(())
	}
}

async fn shutdown_signal() {
	if let Err(e) = tokio::signal::ctrl_c().await {
		warn!("Failed to listen for shutdown signal: {}", e);
		std::future::pending::<()>().await;
	}
}
