//! Request helpers shared by the HTTP upstream adapters

use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use swap_types::{AdapterError, AdapterResult, TokenAddress};
use tracing::debug;

/// Error body returned by routing and bridge upstreams
#[derive(Debug, Deserialize)]
pub(crate) struct UpstreamErrorBody {
	pub code: String,
	#[serde(default)]
	pub message: String,
	#[serde(default)]
	pub address: Option<String>,
}

pub(crate) fn build_url(base_url: &str, path: &str) -> AdapterResult<Url> {
	let mut base = Url::parse(base_url).map_err(|e| AdapterError::ConfigError {
		reason: format!("Invalid base URL '{}': {}", base_url, e),
	})?;

	// Treat the base as a directory so `join` appends instead of replacing
	if !base.path().ends_with('/') {
		base.set_path(&format!("{}/", base.path()));
	}

	base.join(path).map_err(|e| AdapterError::ConfigError {
		reason: format!("Failed to join '{}' to '{}': {}", path, base_url, e),
	})
}

/// Map a non-success upstream answer to an adapter error
pub(crate) fn classify_failure(status: StatusCode, body: &str) -> AdapterError {
	let Ok(error) = serde_json::from_str::<UpstreamErrorBody>(body) else {
		return AdapterError::http_failure(
			status.as_u16(),
			status.canonical_reason().unwrap_or("Unknown status"),
		);
	};

	match error.code.as_str() {
		"INSUFFICIENT_LIQUIDITY" => AdapterError::InsufficientLiquidity {
			reason: error.message,
		},
		"AMOUNT_TOO_LOW" => AdapterError::AmountTooLow,
		"TOKEN_NOT_SUPPORTED" => match error.address.as_deref().map(str::parse::<TokenAddress>) {
			Some(Ok(address)) => AdapterError::TokenNotSupported { address },
			_ => AdapterError::Upstream {
				code: error.code,
				message: error.message,
			},
		},
		"UNSUPPORTED_ROUTE" => AdapterError::UnsupportedRoute {
			reason: error.message,
		},
		_ => AdapterError::Upstream {
			code: error.code,
			message: error.message,
		},
	}
}

/// POST `payload` as JSON and decode a JSON answer
pub(crate) async fn post_json<Req, Resp>(
	client: &Client,
	url: Url,
	payload: &Req,
	timeout_ms: u64,
) -> AdapterResult<Resp>
where
	Req: Serialize + ?Sized,
	Resp: DeserializeOwned,
{
	let response = client
		.post(url.clone())
		.json(payload)
		.send()
		.await
		.map_err(|e| transport_error(e, timeout_ms))?;

	let status = response.status();
	let body = response
		.text()
		.await
		.map_err(|e| transport_error(e, timeout_ms))?;
	debug!(%url, %status, bytes = body.len(), "Upstream responded");

	if !status.is_success() {
		return Err(classify_failure(status, &body));
	}

	serde_json::from_str(&body).map_err(|e| AdapterError::InvalidResponse {
		reason: format!("Failed to parse response from {}: {}", url, e),
	})
}

fn transport_error(error: reqwest::Error, timeout_ms: u64) -> AdapterError {
	if error.is_timeout() {
		AdapterError::Timeout { timeout_ms }
	} else {
		AdapterError::HttpError(error)
	}
}
