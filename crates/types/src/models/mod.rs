//! Shared value types

pub mod amount;
pub mod secret_string;

pub use amount::{AmountParseError, TokenAmount};
pub use secret_string::SecretString;
