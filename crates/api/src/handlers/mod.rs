pub mod common;
pub mod health;
pub mod quotes;

pub use common::{error_response, ApiError, ErrorResponse};
pub use health::health;
pub use quotes::{get_quote, get_quote_in};
