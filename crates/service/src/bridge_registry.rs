//! Bridge adapter registry keyed by bridge type

use std::collections::HashMap;
use std::sync::Arc;

use swap_types::{BridgeAdapter, BridgeType};
use tracing::warn;

/// At most one adapter per bridge type
#[derive(Default, Clone)]
pub struct BridgeRegistry {
	adapters: HashMap<BridgeType, Arc<dyn BridgeAdapter>>,
}

impl BridgeRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	/// Register an adapter under its own bridge type, replacing any previous one
	pub fn register(&mut self, adapter: Arc<dyn BridgeAdapter>) {
		let bridge_type = adapter.bridge_type();
		if self.adapters.insert(bridge_type, adapter).is_some() {
			warn!(bridge = %bridge_type, "Replacing previously registered bridge adapter");
		}
	}

	pub fn with_adapter(mut self, adapter: Arc<dyn BridgeAdapter>) -> Self {
		self.register(adapter);
		self
	}

	pub fn get(&self, bridge_type: BridgeType) -> Option<Arc<dyn BridgeAdapter>> {
		self.adapters.get(&bridge_type).cloned()
	}

	/// Registered bridge types in ascending code order
	pub fn registered_types(&self) -> Vec<BridgeType> {
		let mut types: Vec<BridgeType> = self.adapters.keys().copied().collect();
		types.sort();
		types
	}

	pub fn len(&self) -> usize {
		self.adapters.len()
	}

	pub fn is_empty(&self) -> bool {
		self.adapters.is_empty()
	}
}

impl FromIterator<Arc<dyn BridgeAdapter>> for BridgeRegistry {
	fn from_iter<I: IntoIterator<Item = Arc<dyn BridgeAdapter>>>(iter: I) -> Self {
		let mut registry = Self::new();
		for adapter in iter {
			registry.register(adapter);
		}
		registry
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use async_trait::async_trait;
	use swap_types::{AdapterError, AdapterResult, BridgeQuoteRequest, RouteQuote};

	#[derive(Debug)]
	struct NamedBridge(BridgeType, &'static str);

	#[async_trait]
	impl BridgeAdapter for NamedBridge {
		fn bridge_type(&self) -> BridgeType {
			self.0
		}

		async fn quote(&self, _request: &BridgeQuoteRequest) -> AdapterResult<RouteQuote> {
			Err(AdapterError::UnsupportedRoute {
				reason: self.1.to_string(),
			})
		}
	}

	#[test]
	fn test_registered_types_are_sorted() {
		let registry: BridgeRegistry = vec![
			Arc::new(NamedBridge(BridgeType::Symbiosis, "s")) as Arc<dyn BridgeAdapter>,
			Arc::new(NamedBridge(BridgeType::Wormhole, "w")),
			Arc::new(NamedBridge(BridgeType::Cctp, "c")),
		]
		.into_iter()
		.collect();

		assert_eq!(
			registry.registered_types(),
			vec![BridgeType::Wormhole, BridgeType::Cctp, BridgeType::Symbiosis]
		);
		assert!(registry.get(BridgeType::Stargate).is_none());
	}

	#[test]
	fn test_register_replaces_same_type() {
		let registry = BridgeRegistry::new()
			.with_adapter(Arc::new(NamedBridge(BridgeType::Celer, "first")))
			.with_adapter(Arc::new(NamedBridge(BridgeType::Celer, "second")));
		assert_eq!(registry.len(), 1);
		assert!(format!("{:?}", registry.get(BridgeType::Celer).unwrap()).contains("second"));
	}
}
