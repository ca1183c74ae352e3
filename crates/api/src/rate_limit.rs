//! Fixed-window, per-client rate limiting

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use axum::{
	extract::{Request, State},
	http::{HeaderMap, StatusCode},
	middleware::{self, Next},
	response::Response,
	Router,
};
use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use swap_types::constants::limits::RATE_LIMIT_WINDOW_SECONDS;
use tracing::warn;

/// Expired windows are swept every this many requests
const CLEANUP_INTERVAL: u64 = 1024;

#[derive(Debug, Clone)]
struct RequestCounter {
	count: u32,
	window_start: DateTime<Utc>,
}

/// Outcome of one rate limit check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateLimitCheck {
	pub allowed: bool,
	pub remaining: u32,
	pub reset_at: DateTime<Utc>,
}

/// In-memory limiter keyed by client identifier
#[derive(Debug)]
pub struct MemoryRateLimiter {
	counters: DashMap<String, RequestCounter>,
	requests_per_minute: u32,
	window: Duration,
	seen: AtomicU64,
}

impl MemoryRateLimiter {
	pub fn new(requests_per_minute: u32) -> Self {
		Self {
			counters: DashMap::new(),
			requests_per_minute,
			window: Duration::seconds(RATE_LIMIT_WINDOW_SECONDS as i64),
			seen: AtomicU64::new(0),
		}
	}

	/// Count a request for `key` and report whether it is within the limit
	pub fn check_and_record(&self, key: &str) -> RateLimitCheck {
		self.check_and_record_at(key, Utc::now())
	}

	fn check_and_record_at(&self, key: &str, now: DateTime<Utc>) -> RateLimitCheck {
		if self.seen.fetch_add(1, Ordering::Relaxed) % CLEANUP_INTERVAL == CLEANUP_INTERVAL - 1 {
			self.cleanup_expired(now);
		}

		let mut entry = self
			.counters
			.entry(key.to_string())
			.or_insert_with(|| RequestCounter {
				count: 0,
				window_start: now,
			});
		let counter = entry.value_mut();

		if now > counter.window_start + self.window {
			counter.count = 0;
			counter.window_start = now;
		}

		let allowed = counter.count < self.requests_per_minute;
		if allowed {
			counter.count += 1;
		}

		RateLimitCheck {
			allowed,
			remaining: self.requests_per_minute.saturating_sub(counter.count),
			reset_at: counter.window_start + self.window,
		}
	}

	fn cleanup_expired(&self, now: DateTime<Utc>) {
		self.counters
			.retain(|_, counter| now <= counter.window_start + self.window);
	}

	pub fn tracked_clients(&self) -> usize {
		self.counters.len()
	}
}

fn client_key(headers: &HeaderMap) -> String {
	let forwarded = headers
		.get("x-forwarded-for")
		.or_else(|| headers.get("x-real-ip"))
		.and_then(|v| v.to_str().ok())
		.and_then(|v| v.split(',').next())
		.map(str::trim)
		.filter(|v| !v.is_empty());
	format!("ip:{}", forwarded.unwrap_or("unknown"))
}

async fn rate_limit_middleware(
	State(limiter): State<Arc<MemoryRateLimiter>>,
	request: Request,
	next: Next,
) -> Result<Response, StatusCode> {
	if request.uri().path().starts_with("/health") {
		return Ok(next.run(request).await);
	}

	let key = client_key(request.headers());
	let check = limiter.check_and_record(&key);
	if !check.allowed {
		warn!(client = %key, reset_at = %check.reset_at, "Rate limit exceeded");
		return Err(StatusCode::TOO_MANY_REQUESTS);
	}

	Ok(next.run(request).await)
}

/// Wrap `router` with the limiter; `/health` is exempt
pub fn apply_rate_limit<S>(router: Router<S>, limiter: Arc<MemoryRateLimiter>) -> Router<S>
where
	S: Clone + Send + Sync + 'static,
{
	router.layer(middleware::from_fn_with_state(limiter, rate_limit_middleware))
}
