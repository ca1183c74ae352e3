//! Network registry
//!
//! Closed set of supported networks and their static chain metadata.
//! Identifiers are matched exactly: no case folding and no trimming.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
#[cfg(feature = "openapi")]
use utoipa::ToSchema;

use crate::tokens::TokenAddress;

/// Supported network identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum NetworkId {
	Ethereum,
	Polygon,
	Arbitrum,
	Optimism,
	Metis,
	Bsc,
	Avalanche,
	Base,
	Fantom,
}

/// Error returned when a network identifier is not part of the registry
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unrecognized network: {0}")]
pub struct UnknownNetwork(pub String);

impl NetworkId {
	/// All networks in registry order
	pub fn all() -> &'static [NetworkId] {
		const ALL: &[NetworkId] = &[
			NetworkId::Ethereum,
			NetworkId::Polygon,
			NetworkId::Arbitrum,
			NetworkId::Optimism,
			NetworkId::Metis,
			NetworkId::Bsc,
			NetworkId::Avalanche,
			NetworkId::Base,
			NetworkId::Fantom,
		];
		ALL
	}

	/// Wire identifier, as accepted in query parameters
	pub const fn as_str(&self) -> &'static str {
		match self {
			NetworkId::Ethereum => "ethereum",
			NetworkId::Polygon => "polygon",
			NetworkId::Arbitrum => "arbitrum",
			NetworkId::Optimism => "optimism",
			NetworkId::Metis => "metis",
			NetworkId::Bsc => "bsc",
			NetworkId::Avalanche => "avalanche",
			NetworkId::Base => "base",
			NetworkId::Fantom => "fantom",
		}
	}

	/// Static chain metadata for this network
	pub fn info(&self) -> NetworkInfo {
		let (chain_id, name, native_symbol) = match self {
			NetworkId::Ethereum => (1, "Ethereum", "ETH"),
			NetworkId::Polygon => (137, "Polygon", "MATIC"),
			NetworkId::Arbitrum => (42161, "Arbitrum One", "ETH"),
			NetworkId::Optimism => (10, "OP Mainnet", "ETH"),
			NetworkId::Metis => (1088, "Metis Andromeda", "METIS"),
			NetworkId::Bsc => (56, "BNB Smart Chain", "BNB"),
			NetworkId::Avalanche => (43114, "Avalanche C-Chain", "AVAX"),
			NetworkId::Base => (8453, "Base", "ETH"),
			NetworkId::Fantom => (250, "Fantom Opera", "FTM"),
		};

		NetworkInfo {
			network: *self,
			chain_id,
			name,
			native_symbol,
			native_decimals: 18,
			native_address: TokenAddress::NATIVE,
		}
	}

	/// EVM chain id
	pub fn chain_id(&self) -> u64 {
		self.info().chain_id
	}
}

impl FromStr for NetworkId {
	type Err = UnknownNetwork;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		NetworkId::all()
			.iter()
			.copied()
			.find(|network| network.as_str() == s)
			.ok_or_else(|| UnknownNetwork(s.to_string()))
	}
}

impl fmt::Display for NetworkId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Chain metadata for a registered network
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkInfo {
	pub network: NetworkId,
	/// EVM chain id (e.g. 1 for Ethereum, 42161 for Arbitrum)
	pub chain_id: u64,
	/// Human-readable chain name
	pub name: &'static str,
	/// Symbol of the native currency
	pub native_symbol: &'static str,
	pub native_decimals: u8,
	/// Placeholder address standing for the native currency
	pub native_address: TokenAddress,
}
