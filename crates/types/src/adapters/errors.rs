//! Error types for collaborator adapters

use thiserror::Error;

use crate::tokens::TokenAddress;

/// Failure reported by a router, bridge or token registry adapter
#[derive(Error, Debug)]
pub enum AdapterError {
	#[error("Insufficient liquidity: {reason}")]
	InsufficientLiquidity { reason: String },

	#[error("Amount too low to route")]
	AmountTooLow,

	#[error("Token not supported: {address}")]
	TokenNotSupported { address: TokenAddress },

	#[error("Unsupported route: {reason}")]
	UnsupportedRoute { reason: String },

	#[error("Timeout occurred after {timeout_ms}ms")]
	Timeout { timeout_ms: u64 },

	#[error("HTTP request failed: {0}")]
	HttpError(#[from] reqwest::Error),

	#[error("HTTP {status_code}: {reason}")]
	HttpStatusError { status_code: u16, reason: String },

	#[error("Invalid response format: {reason}")]
	InvalidResponse { reason: String },

	#[error("Upstream returned error: {code} - {message}")]
	Upstream { code: String, message: String },

	#[error("Configuration error: {reason}")]
	ConfigError { reason: String },

	#[error("Serialization error: {0}")]
	Serialization(#[from] serde_json::Error),
}

impl AdapterError {
	/// Extract HTTP status code from the error if available
	pub fn status_code(&self) -> Option<u16> {
		match self {
			AdapterError::HttpStatusError { status_code, .. } => Some(*status_code),
			AdapterError::HttpError(reqwest_error) => {
				reqwest_error.status().map(|status| status.as_u16())
			},
			_ => None,
		}
	}

	pub fn http_failure(status_code: u16, reason: impl Into<String>) -> Self {
		Self::HttpStatusError {
			status_code,
			reason: reason.into(),
		}
	}

	/// Transport and protocol failures, as opposed to a definite answer from upstream
	pub fn is_transport(&self) -> bool {
		matches!(
			self,
			AdapterError::HttpError(_)
				| AdapterError::HttpStatusError { .. }
				| AdapterError::InvalidResponse { .. }
				| AdapterError::Serialization(_)
				| AdapterError::Timeout { .. }
				| AdapterError::ConfigError { .. }
		)
	}
}
