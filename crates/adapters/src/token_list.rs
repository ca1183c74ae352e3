//! In-memory token registry seeded with well-known tokens

use async_trait::async_trait;
use std::collections::HashMap;
use swap_config::TokenListEntry;
use swap_types::{
	AdapterError, AdapterResult, NetworkId, TokenAddress, TokenMetadata, TokenRegistry,
};

/// (network, address, symbol, decimals)
const WELL_KNOWN_TOKENS: &[(NetworkId, &str, &str, u8)] = &[
	(NetworkId::Ethereum, "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2", "WETH", 18),
	(NetworkId::Ethereum, "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48", "USDC", 6),
	(NetworkId::Ethereum, "0xdAC17F958D2ee523a2206206994597C13D831ec7", "USDT", 6),
	(NetworkId::Ethereum, "0x2260FAC5E5542a773Aa44fBCfeDf7C193bc2C599", "WBTC", 8),
	(NetworkId::Ethereum, "0x6B175474E89094C44Da98b954EedeAC495271d0F", "DAI", 18),
	(NetworkId::Arbitrum, "0x82aF49447D8a07e3bd95BD0d56f35241523fBab1", "WETH", 18),
	(NetworkId::Arbitrum, "0xaf88d065e77c8cC2239327C5EDb3A432268e5831", "USDC", 6),
	(NetworkId::Arbitrum, "0xFF970A61A04b1cA14834A43f5dE4533eBDDB5CC8", "USDC.e", 6),
	(NetworkId::Arbitrum, "0xFd086bC7CD5C481DCC9C85ebE478A1C0b69FCbb9", "USDT", 6),
	(NetworkId::Arbitrum, "0x2f2a2543B76A4166549F7aaB2e75Bef0aefC5B0f", "WBTC", 8),
	(NetworkId::Arbitrum, "0x912CE59144191C1204E64559FE8253a0e49E6548", "ARB", 18),
	(NetworkId::Optimism, "0x4200000000000000000000000000000000000006", "WETH", 18),
	(NetworkId::Optimism, "0x0b2C639c533813f4Aa9D7837CAf62653d097Ff85", "USDC", 6),
	(NetworkId::Optimism, "0x4200000000000000000000000000000000000042", "OP", 18),
	(NetworkId::Polygon, "0x2791Bca1f2de4661ED88A30C99A7a9449Aa84174", "USDC.e", 6),
	(NetworkId::Polygon, "0x3c499c542cEF5E3811e1192ce70d8cC03d5c3359", "USDC", 6),
	(NetworkId::Polygon, "0x7ceB23fD6bC0adD59E62ac25578270cFf1b9f619", "WETH", 18),
	(NetworkId::Polygon, "0x0d500B1d8E8eF31E21C99d1Db9A6444d3ADf1270", "WMATIC", 18),
	(NetworkId::Metis, "0xEA32A96608495e54156Ae48931A7c20f0dcc1a21", "m.USDC", 6),
	(NetworkId::Metis, "0x420000000000000000000000000000000000000A", "WETH", 18),
	(NetworkId::Bsc, "0x55d398326f99059fF775485246999027B3197955", "USDT", 18),
	(NetworkId::Bsc, "0xbb4CdB9CBd36B01bD1cBaEBF2De08d9173bc095c", "WBNB", 18),
	(NetworkId::Avalanche, "0xB97EF9Ef8734C71904D8002F8b6Bc66Dd9c48a6E", "USDC", 6),
	(NetworkId::Avalanche, "0xB31f66AA3C1e785363F0875A1B74E27b85FD66c7", "WAVAX", 18),
	(NetworkId::Base, "0x4200000000000000000000000000000000000006", "WETH", 18),
	(NetworkId::Base, "0x833589fCD6eDb6E08f4c7C32D4f71b54bdA02913", "USDC", 6),
	(NetworkId::Fantom, "0x21be370D5312f44cB42ce377BC9b8a0cEF1A4C83", "WFTM", 18),
];

/// Token registry answering from a fixed in-memory list
#[derive(Debug, Clone, Default)]
pub struct StaticTokenRegistry {
	tokens: HashMap<(NetworkId, TokenAddress), TokenMetadata>,
}

impl StaticTokenRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	/// Registry holding the built-in token list
	pub fn with_defaults() -> Self {
		let mut registry = Self::new();
		for (network, address, symbol, decimals) in WELL_KNOWN_TOKENS {
			// Entries are compile-time literals covered by tests
			if let Ok(address) = address.parse::<TokenAddress>() {
				registry.insert(*network, TokenMetadata::new(address, *symbol, *decimals));
			}
		}
		registry
	}

	/// Built-in list extended with configured entries
	pub fn from_entries(entries: &[TokenListEntry]) -> AdapterResult<Self> {
		let mut registry = Self::with_defaults();
		for entry in entries {
			let invalid = |reason: String| AdapterError::ConfigError {
				reason: format!("token list entry {}: {}", entry.symbol, reason),
			};
			let network: NetworkId = entry.network.parse().map_err(|e| invalid(format!("{}", e)))?;
			let address: TokenAddress = entry.address.parse().map_err(|e| invalid(format!("{}", e)))?;
			registry.insert(
				network,
				TokenMetadata::new(address, entry.symbol.clone(), entry.decimals),
			);
		}
		Ok(registry)
	}

	pub fn insert(&mut self, network: NetworkId, metadata: TokenMetadata) {
		self.tokens.insert((network, metadata.address), metadata);
	}

	pub fn len(&self) -> usize {
		self.tokens.len()
	}

	pub fn is_empty(&self) -> bool {
		self.tokens.is_empty()
	}
}

#[async_trait]
impl TokenRegistry for StaticTokenRegistry {
	async fn lookup(
		&self,
		network: NetworkId,
		address: &TokenAddress,
	) -> AdapterResult<Option<TokenMetadata>> {
		Ok(self.tokens.get(&(network, *address)).cloned())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_builtin_entries_all_parse() {
		let registry = StaticTokenRegistry::with_defaults();
		assert_eq!(registry.len(), WELL_KNOWN_TOKENS.len());
	}

	#[tokio::test]
	async fn test_lookup_is_case_insensitive() {
		let registry = StaticTokenRegistry::with_defaults();
		let weth: TokenAddress = "0x82af49447d8a07e3bd95bd0d56f35241523fbab1".parse().unwrap();
		let found = registry.lookup(NetworkId::Arbitrum, &weth).await.unwrap();
		assert_eq!(found.unwrap().symbol, "WETH");
	}

	#[tokio::test]
	async fn test_lookup_is_per_network() {
		let registry = StaticTokenRegistry::with_defaults();
		let arbitrum_usdc: TokenAddress =
			"0xaf88d065e77c8cc2239327c5edb3a432268e5831".parse().unwrap();
		assert!(registry
			.lookup(NetworkId::Metis, &arbitrum_usdc)
			.await
			.unwrap()
			.is_none());
		assert!(registry
			.lookup(NetworkId::Polygon, &arbitrum_usdc)
			.await
			.unwrap()
			.is_none());
	}

	#[tokio::test]
	async fn test_configured_entries_extend_defaults() {
		let entries = vec![TokenListEntry {
			network: "base".to_string(),
			address: "0x50c5725949A6F0c72E6C4a641F24049A917DB0Cb".to_string(),
			symbol: "DAI".to_string(),
			decimals: 18,
		}];
		let registry = StaticTokenRegistry::from_entries(&entries).unwrap();
		assert_eq!(registry.len(), WELL_KNOWN_TOKENS.len() + 1);

		let dai: TokenAddress = "0x50c5725949a6f0c72e6c4a641f24049a917db0cb".parse().unwrap();
		let found = registry.lookup(NetworkId::Base, &dai).await.unwrap();
		assert_eq!(found.unwrap().decimals, 18);
	}

	#[test]
	fn test_configured_entries_reject_unknown_network() {
		let entries = vec![TokenListEntry {
			network: "solana".to_string(),
			address: "0x50c5725949A6F0c72E6C4a641F24049A917DB0Cb".to_string(),
			symbol: "DAI".to_string(),
			decimals: 18,
		}];
		assert!(StaticTokenRegistry::from_entries(&entries).is_err());
	}
}
