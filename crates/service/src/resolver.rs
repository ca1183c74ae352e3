//! Token resolution against the token registry collaborator

use std::sync::Arc;

use swap_types::{
	NetworkId, QuoteError, QuoteResult, ResolvedToken, TokenAddress, TokenRegistry, TokenSide,
};
use tracing::{debug, warn};

/// Resolves token addresses on a given network
#[derive(Clone)]
pub struct TokenResolver {
	registry: Arc<dyn TokenRegistry>,
}

impl TokenResolver {
	pub fn new(registry: Arc<dyn TokenRegistry>) -> Self {
		Self { registry }
	}

	/// Resolve `address` on `network`
	///
	/// The zero address is the native currency and never reaches the registry.
	/// Registry failures are internal errors rather than "not found".
	pub async fn resolve(
		&self,
		network: NetworkId,
		address: &TokenAddress,
		side: TokenSide,
	) -> QuoteResult<ResolvedToken> {
		if address.is_native() {
			return Ok(ResolvedToken::native(network));
		}

		match self.registry.lookup(network, address).await {
			Ok(Some(metadata)) => {
				debug!(%network, %address, symbol = %metadata.symbol, "Resolved {} token", side);
				Ok(ResolvedToken::from_metadata(network, metadata))
			},
			Ok(None) => Err(QuoteError::TokenNotFound {
				side,
				address: *address,
			}),
			Err(e) => {
				warn!(%network, %address, error = %e, "Token registry lookup failed");
				Err(QuoteError::internal(format!("token registry lookup failed: {}", e)))
			},
		}
	}
}
