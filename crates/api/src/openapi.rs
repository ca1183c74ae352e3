use utoipa::OpenApi;

use crate::handlers::common::ErrorResponse;
use crate::handlers::health::{HealthResponse, RouterHealth};
use crate::handlers::{health, quotes};
use swap_types::{
	FeeEntry, NetworkId, QuoteResponse, ResourceEstimate, TokenAmount, TypedData, TypedDomain,
	TypedField,
};

#[derive(OpenApi)]
#[openapi(
	paths(health::health, quotes::get_quote, quotes::get_quote_in),
	components(schemas(
		QuoteResponse,
		FeeEntry,
		ResourceEstimate,
		TypedData,
		TypedDomain,
		TypedField,
		TokenAmount,
		NetworkId,
		ErrorResponse,
		HealthResponse,
		RouterHealth
	)),
	tags(
		(name = "quotes", description = "Same-chain and cross-chain swap quotes"),
		(name = "health", description = "Service health")
	)
)]
pub struct ApiDoc;
