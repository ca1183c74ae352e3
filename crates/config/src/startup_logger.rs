//! Service startup logging for the swap aggregator

use std::env;
use tracing::{info, warn};

use crate::Settings;

/// Logs service information at startup
pub fn log_service_info() {
	// Use the root package name and version, not the current crate
	let service_name = "swap-aggregator";
	let service_version = env!("CARGO_PKG_VERSION");

	info!("=== Swap Aggregator Service Starting ===");
	info!("🚀 Service: {} v{}", service_name, service_version);
	info!("💻 Platform: {} ({})", env::consts::OS, env::consts::ARCH);

	if let Ok(cwd) = env::current_dir() {
		info!("📁 Working Directory: {}", cwd.display());
	}

	if let Ok(rust_log) = env::var("RUST_LOG") {
		info!("🔧 Log Level: {}", rust_log);
	}

	info!(
		"🕒 Started at: {}",
		chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
	);
}

/// Logs the routing and discovery configuration the service will run with
pub fn log_configuration_summary(settings: &Settings) {
	match &settings.router {
		Some(router) => info!(router_id = %router.id, endpoint = %router.endpoint, "🔀 Liquidity router configured"),
		None => info!("🔀 Liquidity router injected programmatically"),
	}

	let mut bridges: Vec<(&String, u8)> = settings
		.bridges
		.iter()
		.filter(|(_, bridge)| bridge.enabled)
		.map(|(name, bridge)| (name, bridge.bridge_type))
		.collect();
	bridges.sort_by_key(|(_, code)| *code);
	for (name, code) in &bridges {
		info!(bridge = %name, bridge_type = code, "🌉 Bridge upstream enabled");
	}

	info!(
		strategy = ?settings.discovery.strategy,
		max_concurrency = settings.discovery.max_concurrency,
		default_order = ?settings.discovery.default_bridge_order,
		per_bridge_timeout_ms = settings.timeouts.per_bridge_ms,
		"🧭 Bridge discovery configured"
	);

	for (name, bridge) in &settings.bridges {
		if bridge.api_key.as_ref().is_some_and(|key| key.is_inline()) {
			warn!(bridge = %name, "API key is stored inline in configuration");
		}
	}
}

/// Logs service shutdown information
pub fn log_service_shutdown() {
	info!("🛑 Swap Aggregator Service Shutting Down");
	info!(
		"🕒 Shutdown at: {}",
		chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
	);
}

/// Logs additional startup completion information
pub fn log_startup_complete(bind_address: &str) {
	info!("✅ Swap Aggregator Service Started Successfully");
	info!("🌐 Server listening on: {}", bind_address);
	info!("📡 Ready to accept requests");
}
