//! Swap Configuration
//!
//! Configuration management and startup utilities for the swap quote aggregator.

pub mod configurable_value;
pub mod loader;
pub mod settings;
pub mod startup_logger;

pub use configurable_value::{ConfigurableValue, ConfigurableValueError, ValueType};
pub use loader::{load_config, load_config_from, ConfigLoadError};
pub use settings::{
	BridgeSettings, ConfigValidationError, DiscoverySettings, DiscoveryStrategy,
	EnvironmentProfile, EnvironmentSettings, LimitSettings, LogFormat, LoggingSettings,
	RateLimitSettings, RouterSettings, ServerSettings, Settings, TimeoutSettings, TokenListEntry,
};
pub use startup_logger::{
	log_configuration_summary, log_service_info, log_service_shutdown, log_startup_complete,
};
