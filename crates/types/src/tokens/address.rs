//! 20-byte hex address used for tokens and wallets

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Error produced when an address string is not `0x` followed by 40 hex digits
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid address '{input}': {reason}")]
pub struct AddressParseError {
	pub input: String,
	pub reason: &'static str,
}

/// EVM address
///
/// Parsing is strict: surrounding whitespace is not trimmed. Equality is on the
/// raw bytes, so comparison is case-insensitive with respect to the hex input.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TokenAddress([u8; 20]);

impl TokenAddress {
	/// The all-zero address, reserved for the network's native currency
	pub const NATIVE: TokenAddress = TokenAddress([0u8; 20]);

	pub const fn from_bytes(bytes: [u8; 20]) -> Self {
		Self(bytes)
	}

	pub fn as_bytes(&self) -> &[u8; 20] {
		&self.0
	}

	/// Whether this is the native-currency sentinel
	pub fn is_native(&self) -> bool {
		self.0 == [0u8; 20]
	}

	/// Lowercase `0x`-prefixed hex representation
	pub fn to_hex(&self) -> String {
		let mut out = String::with_capacity(42);
		out.push_str("0x");
		for byte in self.0 {
			out.push(hex_digit(byte >> 4));
			out.push(hex_digit(byte & 0x0f));
		}
		out
	}
}

fn hex_digit(nibble: u8) -> char {
	match nibble {
		0..=9 => (b'0' + nibble) as char,
		_ => (b'a' + nibble - 10) as char,
	}
}

fn hex_value(c: u8) -> Option<u8> {
	match c {
		b'0'..=b'9' => Some(c - b'0'),
		b'a'..=b'f' => Some(c - b'a' + 10),
		b'A'..=b'F' => Some(c - b'A' + 10),
		_ => None,
	}
}

impl FromStr for TokenAddress {
	type Err = AddressParseError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let err = |reason| AddressParseError {
			input: s.to_string(),
			reason,
		};

		let digits = s
			.strip_prefix("0x")
			.or_else(|| s.strip_prefix("0X"))
			.ok_or_else(|| err("missing 0x prefix"))?;
		if digits.len() != 40 {
			return Err(err("expected 40 hex digits"));
		}

		let mut bytes = [0u8; 20];
		for (i, pair) in digits.as_bytes().chunks(2).enumerate() {
			let hi = hex_value(pair[0]).ok_or_else(|| err("non-hex character"))?;
			let lo = hex_value(pair[1]).ok_or_else(|| err("non-hex character"))?;
			bytes[i] = (hi << 4) | lo;
		}

		Ok(Self(bytes))
	}
}

impl fmt::Display for TokenAddress {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.to_hex())
	}
}

impl fmt::Debug for TokenAddress {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "TokenAddress({})", self.to_hex())
	}
}

impl Serialize for TokenAddress {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		serializer.serialize_str(&self.to_hex())
	}
}

impl<'de> Deserialize<'de> for TokenAddress {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		let value = String::deserialize(deserializer)?;
		value.parse().map_err(serde::de::Error::custom)
	}
}
