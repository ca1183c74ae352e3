//! Builds collaborator adapters from settings

use std::sync::Arc;
use swap_config::Settings;
use swap_types::{AdapterResult, BridgeAdapter, LiquidityRouter};
use tracing::info;

use crate::client_cache::ClientCache;
use crate::http_bridge::HttpBridgeAdapter;
use crate::http_router::HttpRouterAdapter;
use crate::token_list::StaticTokenRegistry;

/// Factory for the HTTP-backed collaborators declared in configuration
pub struct AdapterFactory {
	cache: ClientCache,
}

impl AdapterFactory {
	pub fn new(cache: ClientCache) -> Self {
		Self { cache }
	}

	/// Router from `[router]`, if configured
	pub fn router(&self, settings: &Settings) -> AdapterResult<Option<Arc<dyn LiquidityRouter>>> {
		let Some(router_settings) = &settings.router else {
			return Ok(None);
		};
		let router = HttpRouterAdapter::from_settings(
			router_settings,
			settings.timeouts.router_ms,
			self.cache.clone(),
		)?;
		Ok(Some(Arc::new(router)))
	}

	/// Enabled bridges from `[bridges.*]`, ordered by bridge type
	pub fn bridges(&self, settings: &Settings) -> AdapterResult<Vec<Arc<dyn BridgeAdapter>>> {
		let mut entries: Vec<_> = settings
			.bridges
			.iter()
			.filter(|(_, bridge)| bridge.enabled)
			.collect();
		entries.sort_by_key(|(_, bridge)| bridge.bridge_type);

		let mut adapters: Vec<Arc<dyn BridgeAdapter>> = Vec::with_capacity(entries.len());
		for (name, bridge) in entries {
			let adapter = HttpBridgeAdapter::from_settings(
				name,
				bridge,
				settings.timeouts.per_bridge_ms,
				self.cache.clone(),
			)?;
			info!(bridge = %name, bridge_type = %adapter.bridge_type(), "Created HTTP bridge adapter");
			adapters.push(Arc::new(adapter));
		}
		Ok(adapters)
	}

	/// Built-in token list plus `[[tokens]]` entries
	pub fn token_registry(&self, settings: &Settings) -> AdapterResult<StaticTokenRegistry> {
		StaticTokenRegistry::from_entries(&settings.tokens)
	}
}

impl Default for AdapterFactory {
	fn default() -> Self {
		Self::new(ClientCache::new())
	}
}
