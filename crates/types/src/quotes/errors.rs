//! Error types for quote operations

use thiserror::Error;

use crate::bridges::ProbeFailure;
use crate::networks::UnknownNetwork;
use crate::tokens::{TokenAddress, TokenSide};

/// First violated rule of a quote request
///
/// The display text is the detail shown after `Wrong parameters: `.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QuoteValidationError {
	#[error("{field} is required")]
	MissingRequiredField { field: &'static str },

	#[error("{field} must be a valid address")]
	InvalidAddress { field: &'static str },

	#[error("{field} must be a positive integer")]
	InvalidAmount { field: &'static str },

	#[error("{field} must be greater than 0")]
	ZeroAmount { field: &'static str },

	#[error("{field} must not exceed {max}")]
	AmountTooLarge { field: &'static str, max: u128 },

	#[error("{field} must be a number in range [0, 100)")]
	InvalidSlippage { field: &'static str },

	#[error("{field} must be a boolean")]
	InvalidBoolean { field: &'static str },

	#[error("affiliateAddress and affiliateFeeInPercentage must be provided together")]
	IncompleteAffiliate,

	#[error("affiliateFeeInPercentage must be a number in range [0, {max}]")]
	InvalidAffiliateFee { max: f64 },

	#[error("{field} contains unrecognized value '{value}'")]
	UnrecognizedElement { field: &'static str, value: String },

	#[error("All {field}'s elements must be unique")]
	DuplicateElements { field: &'static str },
}

/// Failure conditions of the quote operations
#[derive(Error, Debug)]
pub enum QuoteError {
	#[error("Quote validation failed: {0}")]
	Validation(#[from] QuoteValidationError),

	#[error(transparent)]
	UnknownNetwork(#[from] UnknownNetwork),

	#[error("Couldn't recognize {side} token {address}")]
	TokenNotFound {
		side: TokenSide,
		address: TokenAddress,
	},

	#[error("Couldn't recognize intermediary token")]
	IntermediaryTokenNotRecognized,

	#[error("Sell amount is too low")]
	AmountTooLow,

	#[error("Insufficient liquidity: {reason}")]
	InsufficientLiquidity { reason: String },

	#[error("Downstream failure: {reason}")]
	TransactionFailed { reason: String },

	#[error("All {attempts} bridges failed, most specific cause: {cause}")]
	AllBridgesFailed { cause: ProbeFailure, attempts: usize },

	#[error("Internal error: {reason}")]
	Internal { reason: String },
}

impl QuoteError {
	pub fn internal(reason: impl Into<String>) -> Self {
		Self::Internal {
			reason: reason.into(),
		}
	}
}
