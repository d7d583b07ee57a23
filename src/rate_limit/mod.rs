//! Rate limiting for BitoPro API.
//!
//! BitoPro limits public endpoints per IP address and authenticated endpoints
//! per account, both as requests per minute. Exceeding a limit gets HTTP 429.
//!
//! ## Example
//!
//! ```rust,ignore
//! use bitopro_api_client::rest::BitoProRestClient;
//! use bitopro_api_client::rate_limit::{RateLimitedClient, RateLimitConfig};
//!
//! // Wrap a client with automatic rate limiting
//! let client = BitoProRestClient::new();
//! let rate_limited = RateLimitedClient::new(client, RateLimitConfig::default());
//!
//! // All requests are automatically rate limited
//! let pairs = rate_limited.get_trading_pairs().await?;
//! ```

mod client;

use std::num::NonZeroU32;

pub use client::RateLimitedClient;

/// Rate limiter configuration.
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    /// Public requests allowed per minute.
    pub public_per_minute: NonZeroU32,
    /// Authenticated requests allowed per minute.
    pub private_per_minute: NonZeroU32,
    /// Whether to enable rate limiting.
    pub enabled: bool,
}

impl RateLimitConfig {
    /// A configuration that lets every request through immediately.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            public_per_minute: limits::PUBLIC_PER_MINUTE,
            private_per_minute: limits::PRIVATE_PER_MINUTE,
            enabled: true,
        }
    }
}

/// Published BitoPro rate limits.
pub mod limits {
    use std::num::NonZeroU32;

    /// Public endpoints, per IP.
    pub const PUBLIC_PER_MINUTE: NonZeroU32 = NonZeroU32::new(600).unwrap();
    /// Authenticated endpoints, per account.
    pub const PRIVATE_PER_MINUTE: NonZeroU32 = NonZeroU32::new(600).unwrap();
}
