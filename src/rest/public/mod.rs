//! Public REST API endpoints (no authentication required).

mod types;

pub use types::*;

use crate::error::BitoProError;
use crate::rest::BitoProRestClient;
use crate::rest::client::DataEnvelope;
use crate::rest::endpoints::{public, with_id};

impl BitoProRestClient {
    /// Get the currencies supported by BitoPro.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use bitopro_api_client::rest::BitoProRestClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = BitoProRestClient::new();
    ///     for currency in client.get_currencies().await? {
    ///         println!("{} (deposit: {})", currency.currency, currency.deposit);
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub async fn get_currencies(&self) -> Result<Vec<Currency>, BitoProError> {
        let envelope: DataEnvelope<Vec<Currency>> = self.public_get(public::CURRENCIES).await?;
        Ok(envelope.data)
    }

    /// Get the trading pairs listed on BitoPro.
    pub async fn get_trading_pairs(&self) -> Result<Vec<TradingPair>, BitoProError> {
        let envelope: DataEnvelope<Vec<TradingPair>> =
            self.public_get(public::TRADING_PAIRS).await?;
        Ok(envelope.data)
    }

    /// Get the ticker for a single pair.
    ///
    /// # Arguments
    ///
    /// * `pair` - Pair identifier, e.g. "ETH_USDT" or "eth_usdt".
    pub async fn get_ticker(&self, pair: &str) -> Result<Ticker, BitoProError> {
        let envelope: DataEnvelope<Ticker> =
            self.public_get(&with_id(public::TICKERS, pair)).await?;
        Ok(envelope.data)
    }

    /// Get the tickers of every pair.
    pub async fn get_tickers(&self) -> Result<Vec<Ticker>, BitoProError> {
        let envelope: DataEnvelope<Vec<Ticker>> = self.public_get(public::TICKERS).await?;
        Ok(envelope.data)
    }

    /// Get recent trades for a pair.
    pub async fn get_trades(&self, pair: &str) -> Result<Vec<Trade>, BitoProError> {
        let envelope: DataEnvelope<Vec<Trade>> =
            self.public_get(&with_id(public::TRADES, pair)).await?;
        Ok(envelope.data)
    }

    /// Get the order book for a pair.
    ///
    /// Unlike the other public endpoints, the order book is not wrapped in `data`.
    pub async fn get_order_book(&self, request: &OrderBookRequest) -> Result<OrderBook, BitoProError> {
        self.public_get_with_params(&with_id(public::ORDER_BOOK, &request.pair), request)
            .await
    }
}
