//! Token identity and resolved token metadata

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::networks::NetworkId;

pub mod address;

pub use address::{AddressParseError, TokenAddress};

/// Which side of a swap a token sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenSide {
	From,
	To,
}

impl fmt::Display for TokenSide {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			TokenSide::From => f.write_str("from"),
			TokenSide::To => f.write_str("to"),
		}
	}
}

/// Metadata returned by a token registry for a known token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenMetadata {
	pub address: TokenAddress,
	pub symbol: String,
	pub decimals: u8,
}

impl TokenMetadata {
	pub fn new(address: TokenAddress, symbol: impl Into<String>, decimals: u8) -> Self {
		Self {
			address,
			symbol: symbol.into(),
			decimals,
		}
	}
}

/// A token resolved for one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedToken {
	pub network: NetworkId,
	pub address: TokenAddress,
	pub symbol: String,
	pub decimals: u8,
	/// True for the network's native currency
	pub native: bool,
}

impl ResolvedToken {
	/// The native currency of `network`
	pub fn native(network: NetworkId) -> Self {
		let info = network.info();
		Self {
			network,
			address: info.native_address,
			symbol: info.native_symbol.to_string(),
			decimals: info.native_decimals,
			native: true,
		}
	}

	pub fn from_metadata(network: NetworkId, metadata: TokenMetadata) -> Self {
		Self {
			network,
			address: metadata.address,
			symbol: metadata.symbol,
			decimals: metadata.decimals,
			native: false,
		}
	}
}
