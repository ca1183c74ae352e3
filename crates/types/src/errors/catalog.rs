//! Stable numeric error codes exposed to API clients

use std::fmt;

/// Error code carried in failure bodies
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum ErrorCode {
	WrongParameters,
	FromTokenNotFound,
	ToTokenNotFound,
	IntermediaryTokenNotFound,
	SellAmountTooLow,
	InsufficientLiquidity,
	TransactionFailed,
	InternalServerError,
}

impl ErrorCode {
	pub const fn code(&self) -> u32 {
		match self {
			Self::WrongParameters => 1001,
			Self::FromTokenNotFound => 2002,
			Self::ToTokenNotFound => 2003,
			Self::IntermediaryTokenNotFound => 2004,
			Self::SellAmountTooLow => 2010,
			Self::InsufficientLiquidity => 2011,
			Self::TransactionFailed => 2042,
			Self::InternalServerError => 5000,
		}
	}

	/// Symbolic name, used as the `error` field of failure bodies
	pub const fn name(&self) -> &'static str {
		match self {
			Self::WrongParameters => "WRONG_PARAMETERS",
			Self::FromTokenNotFound => "FROM_TOKEN_NOT_FOUND",
			Self::ToTokenNotFound => "TO_TOKEN_NOT_FOUND",
			Self::IntermediaryTokenNotFound => "INTERMEDIARY_TOKEN_NOT_FOUND",
			Self::SellAmountTooLow => "SELL_AMOUNT_TOO_LOW",
			Self::InsufficientLiquidity => "INSUFFICIENT_LIQUIDITY",
			Self::TransactionFailed => "TRANSACTION_FAILED",
			Self::InternalServerError => "INTERNAL_SERVER_ERROR",
		}
	}

	pub const fn http_status(&self) -> u16 {
		match self {
			Self::FromTokenNotFound | Self::ToTokenNotFound => 404,
			Self::InternalServerError => 500,
			_ => 400,
		}
	}

	/// Default client-facing message
	pub const fn message(&self) -> &'static str {
		match self {
			Self::WrongParameters => "Wrong parameters",
			Self::FromTokenNotFound => "Couldn't recognize from token",
			Self::ToTokenNotFound => "Couldn't recognize to token",
			Self::IntermediaryTokenNotFound => "Couldn't recognize intermediary token",
			Self::SellAmountTooLow => "Sell amount is too low",
			Self::InsufficientLiquidity => "Insufficient liquidity for this trade",
			Self::TransactionFailed => "Something went wrong in transaction, please try again",
			Self::InternalServerError => "Internal server error",
		}
	}

	pub fn all() -> &'static [ErrorCode] {
		const ALL: &[ErrorCode] = &[
			ErrorCode::WrongParameters,
			ErrorCode::FromTokenNotFound,
			ErrorCode::ToTokenNotFound,
			ErrorCode::IntermediaryTokenNotFound,
			ErrorCode::SellAmountTooLow,
			ErrorCode::InsufficientLiquidity,
			ErrorCode::TransactionFailed,
			ErrorCode::InternalServerError,
		];
		ALL
	}
}

impl fmt::Display for ErrorCode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.code())
	}
}
