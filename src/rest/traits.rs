//! Trait definition for the BitoPro REST API client.
//!
//! This module provides the `BitoProClient` trait which abstracts all REST API operations.
//! This enables:
//! - Stub implementations for testing the report runner
//! - Decorator pattern (e.g., rate limiting wrapper)
//!
//! # Example
//!
//! ```rust,ignore
//! use bitopro_api_client::rest::{BitoProClient, BitoProRestClient};
//!
//! async fn count_pairs<C: BitoProClient>(client: &C) -> Result<usize, bitopro_api_client::BitoProError> {
//!     Ok(client.get_trading_pairs().await?.len())
//! }
//! ```

use std::future::Future;

use crate::error::BitoProError;
use crate::rest::private::{AllOrdersRequest, Balance, DepositHistory, DepositHistoryRequest, Order};
use crate::rest::public::{Currency, OrderBook, OrderBookRequest, Ticker, Trade, TradingPair};

/// Trait defining all BitoPro REST API operations.
///
/// All methods are async and return `Result<T, BitoProError>`.
pub trait BitoProClient: Send + Sync {
    // ========== Public Endpoints ==========

    /// Get the supported currencies.
    fn get_currencies(&self) -> impl Future<Output = Result<Vec<Currency>, BitoProError>> + Send;

    /// Get the listed trading pairs.
    fn get_trading_pairs(
        &self,
    ) -> impl Future<Output = Result<Vec<TradingPair>, BitoProError>> + Send;

    /// Get the ticker of one pair.
    fn get_ticker(&self, pair: &str) -> impl Future<Output = Result<Ticker, BitoProError>> + Send;

    /// Get the tickers of every pair.
    fn get_tickers(&self) -> impl Future<Output = Result<Vec<Ticker>, BitoProError>> + Send;

    /// Get recent trades of one pair.
    fn get_trades(
        &self,
        pair: &str,
    ) -> impl Future<Output = Result<Vec<Trade>, BitoProError>> + Send;

    /// Get the order book of one pair.
    fn get_order_book(
        &self,
        request: &OrderBookRequest,
    ) -> impl Future<Output = Result<OrderBook, BitoProError>> + Send;

    // ========== Private Endpoints ==========

    /// Get account balances.
    fn get_account_balance(&self) -> impl Future<Output = Result<Vec<Balance>, BitoProError>> + Send;

    /// Get the deposit history of one currency.
    fn get_deposit_history(
        &self,
        request: &DepositHistoryRequest,
    ) -> impl Future<Output = Result<DepositHistory, BitoProError>> + Send;

    /// List the account's orders for one pair.
    fn get_all_orders(
        &self,
        request: &AllOrdersRequest,
    ) -> impl Future<Output = Result<Vec<Order>, BitoProError>> + Send;
}
