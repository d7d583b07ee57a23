//! Types for public REST API endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A currency supported by BitoPro.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Currency {
    /// Currency code (e.g., "btc").
    pub currency: String,
    /// Withdrawal fee.
    #[serde(default)]
    pub withdraw_fee: Option<Decimal>,
    /// Minimum withdrawal amount.
    #[serde(default)]
    pub min_withdraw: Option<Decimal>,
    /// Maximum withdrawal amount per request.
    #[serde(default)]
    pub max_withdraw: Option<Decimal>,
    /// Maximum withdrawal amount per day.
    #[serde(default)]
    pub max_daily_withdraw: Option<Decimal>,
    /// Whether withdrawals are enabled.
    #[serde(default)]
    pub withdraw: bool,
    /// Whether deposits are enabled.
    #[serde(default)]
    pub deposit: bool,
    /// Confirmations required before a deposit is credited.
    #[serde(default)]
    pub deposit_confirmation: Option<String>,
}

/// A trading pair listed on BitoPro.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradingPair {
    /// Pair identifier (e.g., "eth_usdt").
    pub pair: String,
    /// Base currency.
    pub base: String,
    /// Quote currency.
    pub quote: String,
    /// Decimal places for the base amount.
    #[serde(default)]
    pub base_precision: Option<String>,
    /// Decimal places for the quote amount.
    #[serde(default)]
    pub quote_precision: Option<String>,
    /// Minimum base amount of a limit order.
    #[serde(default)]
    pub min_limit_base_amount: Option<Decimal>,
    /// Maximum base amount of a limit order.
    #[serde(default)]
    pub max_limit_base_amount: Option<Decimal>,
    /// Minimum quote amount of a market buy order.
    #[serde(default)]
    pub min_market_buy_quote_amount: Option<Decimal>,
    /// Maximum number of open orders.
    #[serde(default)]
    pub order_open_limit: Option<String>,
    /// Whether the pair is under maintenance.
    #[serde(default)]
    pub maintain: bool,
    /// Decimal places used for order book prices.
    #[serde(default)]
    pub order_book_quote_precision: Option<String>,
    /// Available order book price scales.
    #[serde(default)]
    pub order_book_quote_scale_level: Option<String>,
    /// Decimal places for order amounts.
    #[serde(default)]
    pub amount_precision: Option<String>,
}

/// 24 hour ticker for a pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticker {
    /// Pair identifier.
    pub pair: String,
    /// Last traded price.
    pub last_price: Decimal,
    /// Whether the last trade was a buy.
    #[serde(default)]
    pub is_buyer: bool,
    /// Price change over 24 hours, in percent.
    #[serde(default)]
    pub price_change24hr: Option<Decimal>,
    /// Volume over 24 hours.
    #[serde(default)]
    pub volume24hr: Option<Decimal>,
    /// Highest price over 24 hours.
    #[serde(default)]
    pub high24hr: Option<Decimal>,
    /// Lowest price over 24 hours.
    #[serde(default)]
    pub low24hr: Option<Decimal>,
}

/// A public trade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trade {
    /// Trade time (unix seconds).
    pub timestamp: i64,
    /// Trade price.
    pub price: Decimal,
    /// Trade amount.
    pub amount: Decimal,
    /// Whether the taker was a buyer.
    #[serde(default)]
    pub is_buyer: bool,
}

/// Request parameters for the order book.
#[derive(Debug, Clone, Default, Serialize)]
pub struct OrderBookRequest {
    /// Pair identifier (sent in the path).
    #[serde(skip)]
    pub pair: String,
    /// Number of levels per side (1, 5, 10, 20, 30 or 50).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Price scale used to aggregate levels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<u32>,
}

impl OrderBookRequest {
    /// Create a request for a pair with default depth.
    pub fn new(pair: impl Into<String>) -> Self {
        Self {
            pair: pair.into(),
            limit: None,
            scale: None,
        }
    }

    /// Set the number of levels per side.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Order book snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderBook {
    /// Ask levels, best first.
    #[serde(default)]
    pub asks: Vec<OrderBookLevel>,
    /// Bid levels, best first.
    #[serde(default)]
    pub bids: Vec<OrderBookLevel>,
}

impl OrderBook {
    /// Best ask price.
    pub fn best_ask(&self) -> Option<Decimal> {
        self.asks.first().map(|level| level.price)
    }

    /// Best bid price.
    pub fn best_bid(&self) -> Option<Decimal> {
        self.bids.first().map(|level| level.price)
    }
}

/// A single order book level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderBookLevel {
    /// Level price.
    pub price: Decimal,
    /// Amount at this price.
    pub amount: Decimal,
    /// Number of orders at this price.
    #[serde(default)]
    pub count: u32,
    /// Cumulative amount up to this level.
    #[serde(default)]
    pub total: Option<Decimal>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticker_deserialize() {
        let json = r#"{
            "pair": "eth_usdt",
            "lastPrice": "2450.12",
            "isBuyer": true,
            "priceChange24hr": "-1.25",
            "volume24hr": "1234.5",
            "high24hr": "2500",
            "low24hr": "2400"
        }"#;
        let ticker: Ticker = serde_json::from_str(json).unwrap();
        assert_eq!(ticker.pair, "eth_usdt");
        assert_eq!(ticker.last_price, "2450.12".parse::<Decimal>().unwrap());
        assert!(ticker.is_buyer);
        assert_eq!(ticker.price_change24hr, Some("-1.25".parse().unwrap()));
    }

    #[test]
    fn test_currency_tolerates_missing_fields() {
        let currency: Currency = serde_json::from_str(r#"{"currency":"twd","deposit":true}"#).unwrap();
        assert_eq!(currency.currency, "twd");
        assert!(currency.deposit);
        assert!(!currency.withdraw);
        assert!(currency.withdraw_fee.is_none());
    }

    #[test]
    fn test_order_book_request_query() {
        let request = OrderBookRequest::new("btc_twd").limit(5);
        let query = serde_urlencoded::to_string(&request).unwrap();
        assert_eq!(query, "limit=5");
    }

    #[test]
    fn test_order_book_best_levels() {
        let json = r#"{
            "asks": [{"price": "101", "amount": "1", "count": 1, "total": "1"}],
            "bids": [{"price": "99", "amount": "2", "count": 3, "total": "2"}]
        }"#;
        let book: OrderBook = serde_json::from_str(json).unwrap();
        assert_eq!(book.best_ask(), Some(Decimal::from(101)));
        assert_eq!(book.best_bid(), Some(Decimal::from(99)));
    }
}
