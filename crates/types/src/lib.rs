//! Swap Types
//!
//! Shared models and collaborator traits for the swap quote aggregator.
//! This crate contains all domain models organized by business entity.

pub mod adapters;
pub mod bridges;
pub mod constants;
pub mod errors;
pub mod models;
pub mod networks;
pub mod quotes;
pub mod tokens;

// Re-export chrono and serde_json for convenience
pub use chrono;
pub use serde_json;

pub use adapters::{
	AdapterError, AdapterResult, BridgeAdapter, BridgeQuoteRequest, LiquidityRouter, RouteQuote,
	RouteRequest, TokenRegistry,
};

pub use bridges::{BridgeProbeResult, BridgeType, ProbeFailure, ProbeOutcome, UnknownBridgeType};

pub use errors::{ErrorCode, ErrorInfo};

pub use models::{SecretString, TokenAmount};

pub use networks::{NetworkId, NetworkInfo, UnknownNetwork};

pub use quotes::{
	Affiliate, CrossChainQuoteRequest, FeeEntry, LiquiditySource, QuoteError, QuoteRequest,
	QuoteResponse, QuoteResult, QuoteValidationError, QuoteValidationResult, RawQuoteParams,
	ResourceEstimate, Slippage, TypedData, TypedDomain, TypedField,
};

pub use tokens::{ResolvedToken, TokenAddress, TokenMetadata, TokenSide};
