//! Quote requests, responses and failure conditions

pub mod errors;
pub mod request;
pub mod response;

pub use errors::{QuoteError, QuoteValidationError};
pub use request::{
	Affiliate, CrossChainQuoteRequest, LiquiditySource, QuoteRequest, RawQuoteParams, Slippage,
	UnknownLiquiditySource,
};
pub use response::{FeeEntry, QuoteResponse, ResourceEstimate, TypedData, TypedDomain, TypedField};

/// Result type for quote operations
pub type QuoteResult<T> = Result<T, QuoteError>;

/// Result type for quote validation operations
pub type QuoteValidationResult<T> = Result<T, QuoteValidationError>;
