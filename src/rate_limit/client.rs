//! Rate-limited REST client wrapper.
//!
//! Provides a wrapper around any [`BitoProClient`] implementation that waits for
//! a permit from the matching quota before each request.

use governor::{DefaultDirectRateLimiter, Quota, RateLimiter};
use tracing::trace;

use crate::error::BitoProError;
use crate::rate_limit::RateLimitConfig;
use crate::rest::BitoProClient;
use crate::rest::private::{AllOrdersRequest, Balance, DepositHistory, DepositHistoryRequest, Order};
use crate::rest::public::{Currency, OrderBook, OrderBookRequest, Ticker, Trade, TradingPair};

/// A rate-limited wrapper around any [`BitoProClient`] implementation.
///
/// Public and authenticated endpoints draw from separate quotas, mirroring
/// how BitoPro counts them.
pub struct RateLimitedClient<C> {
    inner: C,
    config: RateLimitConfig,
    public_limiter: DefaultDirectRateLimiter,
    private_limiter: DefaultDirectRateLimiter,
}

impl<C> RateLimitedClient<C> {
    /// Create a new rate-limited client wrapper.
    pub fn new(inner: C, config: RateLimitConfig) -> Self {
        Self {
            inner,
            public_limiter: RateLimiter::direct(Quota::per_minute(config.public_per_minute)),
            private_limiter: RateLimiter::direct(Quota::per_minute(config.private_per_minute)),
            config,
        }
    }

    /// Get a reference to the inner client.
    pub fn inner(&self) -> &C {
        &self.inner
    }

    /// Consume the wrapper and return the inner client.
    pub fn into_inner(self) -> C {
        self.inner
    }

    /// The active configuration.
    pub fn config(&self) -> &RateLimitConfig {
        &self.config
    }

    async fn acquire_public(&self) {
        if self.config.enabled {
            trace!("waiting for public permit");
            self.public_limiter.until_ready().await;
        }
    }

    async fn acquire_private(&self) {
        if self.config.enabled {
            trace!("waiting for private permit");
            self.private_limiter.until_ready().await;
        }
    }
}

impl<C: std::fmt::Debug> std::fmt::Debug for RateLimitedClient<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RateLimitedClient")
            .field("inner", &self.inner)
            .field("config", &self.config)
            .finish()
    }
}

impl<C: BitoProClient> BitoProClient for RateLimitedClient<C> {
    async fn get_currencies(&self) -> Result<Vec<Currency>, BitoProError> {
        self.acquire_public().await;
        self.inner.get_currencies().await
    }

    async fn get_trading_pairs(&self) -> Result<Vec<TradingPair>, BitoProError> {
        self.acquire_public().await;
        self.inner.get_trading_pairs().await
    }

    async fn get_ticker(&self, pair: &str) -> Result<Ticker, BitoProError> {
        self.acquire_public().await;
        self.inner.get_ticker(pair).await
    }

    async fn get_tickers(&self) -> Result<Vec<Ticker>, BitoProError> {
        self.acquire_public().await;
        self.inner.get_tickers().await
    }

    async fn get_trades(&self, pair: &str) -> Result<Vec<Trade>, BitoProError> {
        self.acquire_public().await;
        self.inner.get_trades(pair).await
    }

    async fn get_order_book(&self, request: &OrderBookRequest) -> Result<OrderBook, BitoProError> {
        self.acquire_public().await;
        self.inner.get_order_book(request).await
    }

    async fn get_account_balance(&self) -> Result<Vec<Balance>, BitoProError> {
        self.acquire_private().await;
        self.inner.get_account_balance().await
    }

    async fn get_deposit_history(
        &self,
        request: &DepositHistoryRequest,
    ) -> Result<DepositHistory, BitoProError> {
        self.acquire_private().await;
        self.inner.get_deposit_history(request).await
    }

    async fn get_all_orders(&self, request: &AllOrdersRequest) -> Result<Vec<Order>, BitoProError> {
        self.acquire_private().await;
        self.inner.get_all_orders(request).await
    }
}
