//! Global limits and defaults for configuration and runtime

/// Slippage applied when the request omits it, in percent
pub const DEFAULT_SLIPPAGE_PERCENTAGE: f64 = 0.5;

/// Upper bound (inclusive) for `affiliateFeeInPercentage`
pub const MAX_AFFILIATE_FEE_PERCENTAGE: f64 = 10.0;

/// Default ceiling on `sellAmount`, in token base units
pub const DEFAULT_MAX_SELL_AMOUNT: u128 = 1_000_000_000_000_000_000_000_000_000_000; // 10^30

pub const DEFAULT_GASLESS: bool = false;

pub const DEFAULT_ENABLE_RFQ: bool = false;

/// Default timeout for a single bridge probe in milliseconds
pub const DEFAULT_PER_BRIDGE_TIMEOUT_MS: u64 = 5_000; // 5s

/// Default timeout for a liquidity router call in milliseconds
pub const DEFAULT_ROUTER_TIMEOUT_MS: u64 = 5_000; // 5s

/// Default overall request budget in milliseconds
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 15_000; // 15s

/// Minimum allowed timeout for any upstream call in milliseconds
pub const MIN_UPSTREAM_TIMEOUT_MS: u64 = 50;

/// Maximum allowed timeout for any upstream call in milliseconds
pub const MAX_UPSTREAM_TIMEOUT_MS: u64 = 60_000; // 60s

/// Default number of bridges probed at the same time
pub const DEFAULT_MAX_CONCURRENCY: usize = 5;

/// Default bridge priority: CCTP, Stargate, Wormhole, Celer, Symbiosis
pub const DEFAULT_BRIDGE_ORDER: [u8; 5] = [3, 1, 0, 2, 4];

/// Validity window of the typed payload deadline in seconds
pub const QUOTE_DEADLINE_SECONDS: i64 = 20 * 60;

/// Default rate limit: requests per minute
pub const DEFAULT_RATE_LIMIT_REQUESTS_PER_MINUTE: u32 = 1000;

/// Rate limit window duration in seconds
pub const RATE_LIMIT_WINDOW_SECONDS: u64 = 60;
