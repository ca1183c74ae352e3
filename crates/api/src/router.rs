//! Route table and middleware stack

use axum::{http::Request, routing::get, Router};
use tower_http::{
	classify::{ServerErrorsAsFailures, SharedClassifier},
	compression::CompressionLayer,
	cors::CorsLayer,
	limit::RequestBodyLimitLayer,
	request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
	trace::{DefaultOnRequest, DefaultOnResponse, MakeSpan, TraceLayer},
	LatencyUnit,
};
use tracing::{Level, Span};

use crate::handlers::{get_quote, get_quote_in, health};
use crate::security::add_security_headers;
use crate::state::AppState;
#[cfg(feature = "openapi")]
use crate::openapi::ApiDoc;
#[cfg(feature = "openapi")]
use utoipa::OpenApi;
#[cfg(feature = "openapi")]
use utoipa_swagger_ui::SwaggerUi;

/// Quote endpoints only take query parameters
const MAX_BODY_BYTES: usize = 64 * 1024;

/// `http_request` span tagged with the request id set further out
#[derive(Clone, Copy)]
struct RequestSpan;

impl<B> MakeSpan<B> for RequestSpan {
	fn make_span(&mut self, req: &Request<B>) -> Span {
		let req_id = req
			.headers()
			.get("x-request-id")
			.and_then(|v| v.to_str().ok())
			.unwrap_or("-");
		tracing::info_span!(
			"http_request",
			method = %req.method(),
			uri = %req.uri(),
			req_id
		)
	}
}

fn access_log() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>, RequestSpan> {
	TraceLayer::new_for_http()
		.make_span_with(RequestSpan)
		.on_request(DefaultOnRequest::new().level(Level::INFO))
		.on_response(
			DefaultOnResponse::new()
				.level(Level::INFO)
				.latency_unit(LatencyUnit::Millis),
		)
}

/// Every path is also served with a trailing slash
fn routes() -> Router<AppState> {
	[
		("/health", get(health)),
		("/aggregator/quote", get(get_quote)),
		("/aggregator/quote-in", get(get_quote_in)),
	]
	.into_iter()
	.fold(Router::new(), |router, (path, handler)| {
		router
			.route(path, handler.clone())
			.route(&format!("{}/", path), handler)
	})
}

pub fn create_router() -> Router<AppState> {
	#[cfg(feature = "openapi")]
	let router = routes()
		.merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

	#[cfg(not(feature = "openapi"))]
	let router = routes();

	// Applied innermost first; same order as a ServiceBuilder listing
	// SetRequestId outermost and RequestBodyLimit innermost
	let router = router
		.layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
		.layer(CompressionLayer::new())
		.layer(CorsLayer::permissive())
		.layer(access_log())
		.layer(PropagateRequestIdLayer::x_request_id())
		.layer(SetRequestIdLayer::x_request_id(MakeRequestUuid));

	add_security_headers(router)
}
