//! Configuration loading utilities

use crate::settings::ConfigValidationError;
use crate::Settings;
use config::{Config, ConfigError, Environment, File};
use thiserror::Error;

/// Prefix for environment overrides, e.g. `SWAP__SERVER__PORT=8080`
pub const ENV_PREFIX: &str = "SWAP";

#[derive(Debug, Error)]
pub enum ConfigLoadError {
	#[error("Failed to read configuration: {0}")]
	Source(#[from] ConfigError),

	#[error("Invalid configuration: {0}")]
	Validation(#[from] ConfigValidationError),
}

/// Load `config/config.{toml,json,yaml}` (optional) plus environment overrides
pub fn load_config() -> Result<Settings, ConfigLoadError> {
	load_config_from("config/config")
}

/// Load configuration from `path` (extension optional) plus environment overrides
pub fn load_config_from(path: &str) -> Result<Settings, ConfigLoadError> {
	let s = Config::builder()
		.add_source(File::with_name(path).required(false))
		.add_source(Environment::with_prefix(ENV_PREFIX).separator("__"))
		.build()?;

	let settings: Settings = s.try_deserialize()?;
	settings.validate()?;
	Ok(settings)
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::fs;

	#[test]
	fn test_missing_file_yields_defaults() {
		let settings = load_config_from("does/not/exist/config").unwrap();
		assert_eq!(settings.timeouts.per_bridge_ms, 5000);
		assert!(settings.router.is_none());
	}

	#[test]
	fn test_reads_toml_file() {
		let dir = std::env::temp_dir().join(format!("swap-config-{}", std::process::id()));
		fs::create_dir_all(&dir).unwrap();
		let path = dir.join("settings.toml");
		fs::write(
			&path,
			r#"
[server]
host = "127.0.0.1"
port = 4100

[discovery]
strategy = "sequential"
max_concurrency = 2
default_bridge_order = [1, 0]

[router]
id = "primary-router"
endpoint = "http://localhost:7000"

[bridges.stargate]
bridge_type = 1
endpoint = "http://localhost:7101"
"#,
		)
		.unwrap();

		let settings = load_config_from(path.to_str().unwrap()).unwrap();
		assert_eq!(settings.bind_address(), "127.0.0.1:4100");
		assert_eq!(
			settings.discovery.strategy,
			crate::settings::DiscoveryStrategy::Sequential
		);
		assert_eq!(settings.discovery.default_bridge_order, vec![1, 0]);
		assert_eq!(settings.router.as_ref().unwrap().id, "primary-router");
		assert!(settings.bridges["stargate"].enabled);

		fs::remove_dir_all(&dir).ok();
	}

	#[test]
	fn test_invalid_file_fails_validation() {
		let dir = std::env::temp_dir().join(format!("swap-config-bad-{}", std::process::id()));
		fs::create_dir_all(&dir).unwrap();
		let path = dir.join("settings.toml");
		fs::write(&path, "[discovery]\nmax_concurrency = 0\n").unwrap();

		let err = load_config_from(path.to_str().unwrap()).unwrap_err();
		assert!(matches!(
			err,
			ConfigLoadError::Validation(ConfigValidationError::ZeroConcurrency)
		));

		fs::remove_dir_all(&dir).ok();
	}
}
