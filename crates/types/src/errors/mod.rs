//! Mapping from failure conditions to client-facing error information

use serde::Serialize;

use crate::bridges::ProbeFailure;
use crate::quotes::QuoteError;
use crate::tokens::TokenSide;

pub mod catalog;

pub use catalog::ErrorCode;

/// HTTP status, numeric code and message for one failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorInfo {
	pub http_status: u16,
	#[serde(serialize_with = "serialize_code")]
	pub code: ErrorCode,
	pub message: String,
}

fn serialize_code<S>(code: &ErrorCode, serializer: S) -> Result<S::Ok, S::Error>
where
	S: serde::Serializer,
{
	serializer.serialize_u32(code.code())
}

impl ErrorInfo {
	/// Info carrying the code's default message
	pub fn from_code(code: ErrorCode) -> Self {
		Self::with_message(code, code.message())
	}

	pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
		Self {
			http_status: code.http_status(),
			code,
			message: message.into(),
		}
	}
}

fn token_code(side: TokenSide) -> ErrorCode {
	match side {
		TokenSide::From => ErrorCode::FromTokenNotFound,
		TokenSide::To => ErrorCode::ToTokenNotFound,
	}
}

impl From<&ProbeFailure> for ErrorCode {
	fn from(failure: &ProbeFailure) -> Self {
		match failure {
			ProbeFailure::TokenNotFound(side) => token_code(*side),
			ProbeFailure::IntermediaryTokenNotFound => ErrorCode::IntermediaryTokenNotFound,
			ProbeFailure::AmountTooLow | ProbeFailure::ZeroAmountOut => ErrorCode::SellAmountTooLow,
			ProbeFailure::InsufficientLiquidity => ErrorCode::InsufficientLiquidity,
			ProbeFailure::Timeout { .. }
			| ProbeFailure::NotRegistered
			| ProbeFailure::Downstream { .. } => ErrorCode::TransactionFailed,
		}
	}
}

impl From<&QuoteError> for ErrorInfo {
	fn from(error: &QuoteError) -> Self {
		match error {
			QuoteError::Validation(detail) => ErrorInfo::with_message(
				ErrorCode::WrongParameters,
				format!("{}: {}", ErrorCode::WrongParameters.message(), detail),
			),
			QuoteError::UnknownNetwork(_) | QuoteError::Internal { .. } => {
				ErrorInfo::from_code(ErrorCode::InternalServerError)
			},
			QuoteError::TokenNotFound { side, .. } => ErrorInfo::from_code(token_code(*side)),
			QuoteError::IntermediaryTokenNotRecognized => {
				ErrorInfo::from_code(ErrorCode::IntermediaryTokenNotFound)
			},
			QuoteError::AmountTooLow => ErrorInfo::from_code(ErrorCode::SellAmountTooLow),
			QuoteError::InsufficientLiquidity { .. } => {
				ErrorInfo::from_code(ErrorCode::InsufficientLiquidity)
			},
			QuoteError::TransactionFailed { .. } => {
				ErrorInfo::from_code(ErrorCode::TransactionFailed)
			},
			QuoteError::AllBridgesFailed { cause, .. } => ErrorInfo::from_code(cause.into()),
		}
	}
}

impl From<QuoteError> for ErrorInfo {
	fn from(error: QuoteError) -> Self {
		ErrorInfo::from(&error)
	}
}
