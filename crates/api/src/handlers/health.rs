use axum::{extract::State, response::Json};
use serde::Serialize;
#[cfg(feature = "openapi")]
use utoipa::ToSchema;

use crate::state::AppState;

/// Liquidity router status
#[derive(Debug, Serialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct RouterHealth {
	pub id: String,
	pub healthy: bool,
}

/// Health response
#[derive(Debug, Serialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
	/// `healthy`, or `degraded` when the router does not answer
	pub status: String,
	pub version: String,
	pub router: RouterHealth,
	/// Bridge type codes with a registered adapter
	pub bridges: Vec<u8>,
}

/// Health check endpoint
#[cfg_attr(feature = "openapi", utoipa::path(
	get,
	path = "/health",
	responses((status = 200, description = "Service status", body = HealthResponse)),
	tag = "health"
))]
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
	let service = &state.quote_service;
	let healthy = service.router_healthy().await;

	Json(HealthResponse {
		status: if healthy { "healthy" } else { "degraded" }.to_string(),
		version: env!("CARGO_PKG_VERSION").to_string(),
		router: RouterHealth {
			id: service.router_id(),
			healthy,
		},
		bridges: service
			.registered_bridges()
			.iter()
			.map(|bridge| bridge.code())
			.collect(),
	})
}
