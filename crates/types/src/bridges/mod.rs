//! Bridge identifiers and per-probe discovery results

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::adapters::{AdapterError, RouteQuote};
use crate::tokens::{TokenAddress, TokenSide};

/// Cross-chain bridge backend, identified on the wire by a small integer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BridgeType {
	Wormhole,
	Stargate,
	Celer,
	Cctp,
	Symbiosis,
}

/// Error returned for a bridge identifier outside `0..=4`
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized bridge type '{0}'")]
pub struct UnknownBridgeType(pub String);

impl BridgeType {
	pub fn all() -> &'static [BridgeType] {
		const ALL: &[BridgeType] = &[
			BridgeType::Wormhole,
			BridgeType::Stargate,
			BridgeType::Celer,
			BridgeType::Cctp,
			BridgeType::Symbiosis,
		];
		ALL
	}

	pub const fn code(&self) -> u8 {
		match self {
			BridgeType::Wormhole => 0,
			BridgeType::Stargate => 1,
			BridgeType::Celer => 2,
			BridgeType::Cctp => 3,
			BridgeType::Symbiosis => 4,
		}
	}

	pub fn from_code(code: u8) -> Option<Self> {
		BridgeType::all().iter().copied().find(|b| b.code() == code)
	}

	pub const fn name(&self) -> &'static str {
		match self {
			BridgeType::Wormhole => "wormhole",
			BridgeType::Stargate => "stargate",
			BridgeType::Celer => "celer",
			BridgeType::Cctp => "cctp",
			BridgeType::Symbiosis => "symbiosis",
		}
	}
}

impl FromStr for BridgeType {
	type Err = UnknownBridgeType;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
			return Err(UnknownBridgeType(s.to_string()));
		}
		s.parse::<u8>()
			.ok()
			.and_then(BridgeType::from_code)
			.ok_or_else(|| UnknownBridgeType(s.to_string()))
	}
}

impl fmt::Display for BridgeType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}({})", self.name(), self.code())
	}
}

impl Serialize for BridgeType {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		serializer.serialize_u8(self.code())
	}
}

impl<'de> Deserialize<'de> for BridgeType {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		let code = u8::deserialize(deserializer)?;
		BridgeType::from_code(code)
			.ok_or_else(|| serde::de::Error::custom(UnknownBridgeType(code.to_string())))
	}
}

/// Why a single bridge probe was not viable
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeFailure {
	TokenNotFound(TokenSide),
	IntermediaryTokenNotFound,
	AmountTooLow,
	InsufficientLiquidity,
	ZeroAmountOut,
	Timeout { timeout_ms: u64 },
	NotRegistered,
	Downstream { reason: String },
}

impl ProbeFailure {
	/// Higher is more specific; used to pick the reported cause when every probe fails
	pub fn specificity(&self) -> u8 {
		match self {
			ProbeFailure::TokenNotFound(TokenSide::From) => 6,
			ProbeFailure::TokenNotFound(TokenSide::To) => 5,
			ProbeFailure::IntermediaryTokenNotFound => 4,
			ProbeFailure::AmountTooLow | ProbeFailure::ZeroAmountOut => 3,
			ProbeFailure::InsufficientLiquidity => 2,
			ProbeFailure::Timeout { .. }
			| ProbeFailure::NotRegistered
			| ProbeFailure::Downstream { .. } => 1,
		}
	}

	/// Classify an adapter error for a probe of a route from `from_token` to `to_token`
	pub fn from_adapter_error(
		error: &AdapterError,
		from_token: &TokenAddress,
		to_token: &TokenAddress,
	) -> Self {
		match error {
			AdapterError::TokenNotSupported { address } if address == from_token => {
				ProbeFailure::TokenNotFound(TokenSide::From)
			},
			AdapterError::TokenNotSupported { address } if address == to_token => {
				ProbeFailure::TokenNotFound(TokenSide::To)
			},
			// the settlement token the bridge routes through
			AdapterError::TokenNotSupported { .. } => ProbeFailure::IntermediaryTokenNotFound,
			AdapterError::UnsupportedRoute { .. } => ProbeFailure::IntermediaryTokenNotFound,
			AdapterError::AmountTooLow => ProbeFailure::AmountTooLow,
			AdapterError::InsufficientLiquidity { .. } => ProbeFailure::InsufficientLiquidity,
			AdapterError::Timeout { timeout_ms } => ProbeFailure::Timeout {
				timeout_ms: *timeout_ms,
			},
			other => ProbeFailure::Downstream {
				reason: other.to_string(),
			},
		}
	}
}

impl fmt::Display for ProbeFailure {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ProbeFailure::TokenNotFound(side) => write!(f, "{} token not supported", side),
			ProbeFailure::IntermediaryTokenNotFound => f.write_str("no intermediary token"),
			ProbeFailure::AmountTooLow => f.write_str("amount too low"),
			ProbeFailure::InsufficientLiquidity => f.write_str("insufficient liquidity"),
			ProbeFailure::ZeroAmountOut => f.write_str("zero amount out"),
			ProbeFailure::Timeout { timeout_ms } => write!(f, "timed out after {}ms", timeout_ms),
			ProbeFailure::NotRegistered => f.write_str("no adapter registered"),
			ProbeFailure::Downstream { reason } => write!(f, "downstream failure: {}", reason),
		}
	}
}

/// Outcome of probing one bridge
#[derive(Debug, Clone)]
pub enum ProbeOutcome {
	Success(RouteQuote),
	Failure(ProbeFailure),
}

/// Result of probing the candidate at `index` in the discovery order
#[derive(Debug, Clone)]
pub struct BridgeProbeResult {
	pub bridge_type: BridgeType,
	pub index: usize,
	pub outcome: ProbeOutcome,
	pub elapsed_ms: u64,
}

impl BridgeProbeResult {
	pub fn is_viable(&self) -> bool {
		matches!(self.outcome, ProbeOutcome::Success(_))
	}

	pub fn failure(&self) -> Option<&ProbeFailure> {
		match &self.outcome {
			ProbeOutcome::Failure(failure) => Some(failure),
			ProbeOutcome::Success(_) => None,
		}
	}
}
