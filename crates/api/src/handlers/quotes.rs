use axum::{
	extract::{Query, State},
	response::Json,
};
use swap_types::{ErrorInfo, QuoteError, QuoteResponse, RawQuoteParams};
use tracing::{debug, error, info};

use crate::handlers::common::{error_response, ApiError};
#[cfg(feature = "openapi")]
use crate::handlers::common::ErrorResponse;
use crate::state::AppState;

fn reject(operation: &'static str, err: QuoteError) -> ApiError {
	let info = ErrorInfo::from(&err);
	if info.http_status >= 500 {
		error!(operation, code = %info.code, error = %err, "Quote request failed");
	} else {
		debug!(operation, code = %info.code, error = %err, "Quote request rejected");
	}
	error_response(info)
}

/// Same-chain swap quote
#[cfg_attr(feature = "openapi", utoipa::path(
	get,
	path = "/aggregator/quote",
	params(
		("network" = String, Query, description = "Network identifier, e.g. `arbitrum`"),
		("fromTokenAddress" = String, Query, description = "Token to sell; zero address for the native currency"),
		("toTokenAddress" = String, Query, description = "Token to buy"),
		("sellAmount" = String, Query, description = "Amount to sell in base units"),
		("slippage" = Option<f64>, Query, description = "Slippage tolerance in percent, default 0.5"),
		("gasless" = Option<bool>, Query, description = "Request a gasless execution"),
		("fromAddress" = Option<String>, Query, description = "Sender wallet"),
		("toAddress" = Option<String>, Query, description = "Recipient wallet"),
		("affiliateAddress" = Option<String>, Query, description = "Affiliate wallet, requires a fee"),
		("affiliateFeeInPercentage" = Option<f64>, Query, description = "Affiliate fee in percent"),
		("enableRFQ" = Option<bool>, Query, description = "Allow RFQ liquidity"),
		("liquiditySources" = Option<Vec<String>>, Query, description = "Restrict routing to these sources"),
	),
	responses(
		(status = 200, description = "Quote computed", body = QuoteResponse),
		(status = 400, description = "Invalid request or no route", body = ErrorResponse),
		(status = 404, description = "Token not recognized", body = ErrorResponse),
		(status = 500, description = "Internal error", body = ErrorResponse)
	),
	tag = "quotes"
))]
/// GET /aggregator/quote
pub async fn get_quote(
	State(state): State<AppState>,
	Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<QuoteResponse>, ApiError> {
	let params = RawQuoteParams::from(pairs);
	debug!(network = ?params.get("network"), "Received quote request");

	let response = state
		.quote_service
		.quote(&params)
		.await
		.map_err(|e| reject("quote", e))?;

	info!(quote_id = %response.id, amount_out = %response.amount_out, "Returning quote");
	Ok(Json(response))
}

/// Cross-chain swap quote
#[cfg_attr(feature = "openapi", utoipa::path(
	get,
	path = "/aggregator/quote-in",
	params(
		("fromNetwork" = String, Query, description = "Source network"),
		("toNetwork" = String, Query, description = "Destination network"),
		("fromTokenAddress" = String, Query, description = "Token to sell on the source network"),
		("toTokenAddress" = String, Query, description = "Token to receive on the destination network"),
		("sellAmount" = String, Query, description = "Amount to sell in base units"),
		("slippageIn" = Option<f64>, Query, description = "Source-side slippage in percent"),
		("slippageOut" = Option<f64>, Query, description = "Destination-side slippage in percent"),
		("gasless" = Option<bool>, Query, description = "Request a gasless execution"),
		("fromAddress" = Option<String>, Query, description = "Sender wallet"),
		("toAddress" = Option<String>, Query, description = "Recipient wallet"),
		("bridgeTypes" = Option<Vec<u8>>, Query, description = "Bridges to try, in priority order (0-4)"),
	),
	responses(
		(status = 200, description = "Quote computed", body = QuoteResponse),
		(status = 400, description = "Invalid request or no viable bridge", body = ErrorResponse),
		(status = 404, description = "Token not recognized", body = ErrorResponse),
		(status = 500, description = "Internal error", body = ErrorResponse)
	),
	tag = "quotes"
))]
/// GET /aggregator/quote-in
pub async fn get_quote_in(
	State(state): State<AppState>,
	Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<QuoteResponse>, ApiError> {
	let params = RawQuoteParams::from(pairs);
	debug!(
		from = ?params.get("fromNetwork"),
		to = ?params.get("toNetwork"),
		"Received cross-chain quote request"
	);

	let response = state
		.quote_service
		.quote_cross_chain(&params)
		.await
		.map_err(|e| reject("quote-in", e))?;

	info!(
		quote_id = %response.id,
		amount_out = %response.amount_out,
		bridge = ?response.bridge_type,
		"Returning cross-chain quote"
	);
	Ok(Json(response))
}
