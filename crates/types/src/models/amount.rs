//! Integer token amount carried as a decimal string on the wire

use std::str::FromStr;
#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// Amount in the token's smallest unit
///
/// Serialized as a decimal string so JSON consumers do not lose precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "openapi", derive(ToSchema), schema(value_type = String))]
pub struct TokenAmount(pub u128);

/// Why an amount literal was rejected
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AmountParseError {
	#[error("amount is empty")]
	Empty,
	#[error("amount must be a non-negative integer")]
	NotAnInteger,
	#[error("amount is too large")]
	Overflow,
}

impl TokenAmount {
	pub const ZERO: TokenAmount = TokenAmount(0);

	pub fn new(value: u128) -> Self {
		Self(value)
	}

	pub fn value(&self) -> u128 {
		self.0
	}

	pub fn is_zero(&self) -> bool {
		self.0 == 0
	}

	/// Reduce by a percentage expressed in basis points, rounding down
	pub fn less_bps(&self, bps: u32) -> Self {
		let bps = u128::from(bps.min(10_000));
		// Split to avoid overflowing on amounts close to u128::MAX
		let whole = self.0 / 10_000 * (10_000 - bps);
		let rest = self.0 % 10_000 * (10_000 - bps) / 10_000;
		Self(whole + rest)
	}
}

impl FromStr for TokenAmount {
	type Err = AmountParseError;

	/// Accepts only ASCII digits; no sign, no whitespace, no exponent
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		if s.is_empty() {
			return Err(AmountParseError::Empty);
		}
		if !s.bytes().all(|b| b.is_ascii_digit()) {
			return Err(AmountParseError::NotAnInteger);
		}
		s.parse::<u128>()
			.map(Self)
			.map_err(|_| AmountParseError::Overflow)
	}
}

impl std::fmt::Display for TokenAmount {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl From<u128> for TokenAmount {
	fn from(value: u128) -> Self {
		Self(value)
	}
}

impl From<u64> for TokenAmount {
	fn from(value: u64) -> Self {
		Self(u128::from(value))
	}
}

impl serde::Serialize for TokenAmount {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		serializer.serialize_str(&self.0.to_string())
	}
}

impl<'de> serde::Deserialize<'de> for TokenAmount {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		let value = <String as serde::Deserialize>::deserialize(deserializer)?;
		value.parse().map_err(serde::de::Error::custom)
	}
}
