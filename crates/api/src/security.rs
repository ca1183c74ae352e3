//! Security-related HTTP response headers

use axum::{
	http::header::{HeaderName, HeaderValue},
	Router,
};
use tower::ServiceBuilder;
use tower_http::set_header::SetResponseHeaderLayer;

/// Quotes must never be served from a cache
const QUOTE_CACHE_CONTROL: &str = "no-store";

/// Default security headers for every response
pub fn add_security_headers<S>(router: Router<S>) -> Router<S>
where
	S: Clone + Send + Sync + 'static,
{
	let header = |name: &'static str, value: &'static str| {
		SetResponseHeaderLayer::if_not_present(
			HeaderName::from_static(name),
			HeaderValue::from_static(value),
		)
	};

	router.layer(
		ServiceBuilder::new()
			.layer(header(
				"strict-transport-security",
				"max-age=31536000; includeSubDomains",
			))
			.layer(header("x-content-type-options", "nosniff"))
			.layer(header("x-frame-options", "DENY"))
			.layer(header("referrer-policy", "no-referrer"))
			.layer(header("content-security-policy", "default-src 'self'"))
			.layer(header("cache-control", QUOTE_CACHE_CONTROL)),
	)
}
