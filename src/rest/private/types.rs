//! Types for private REST API endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Balance of a single currency in the account.
///
/// Amounts are kept as the strings the exchange sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Balance {
    /// Currency code (e.g., "twd").
    pub currency: String,
    /// Total amount held.
    pub amount: String,
    /// Amount available for trading or withdrawal.
    pub available: String,
    /// Amount locked in staking.
    #[serde(default)]
    pub stake: Option<String>,
    /// Whether the currency can be traded.
    #[serde(default)]
    pub tradable: bool,
}

impl Balance {
    /// Whether `available` is anything other than the literal `"0"`.
    ///
    /// Padded zeros such as `"0.00000000"` count as available.
    pub fn has_available(&self) -> bool {
        self.available != "0"
    }

    /// The available amount as a decimal, if it parses.
    pub fn available_decimal(&self) -> Option<Decimal> {
        self.available.parse().ok()
    }
}

/// Request parameters for deposit history.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepositHistoryRequest {
    /// Currency code (sent in the path).
    #[serde(skip)]
    pub currency: String,
    /// Start of the range (unix milliseconds).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_timestamp: Option<i64>,
    /// End of the range (unix milliseconds).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_timestamp: Option<i64>,
    /// Maximum number of records.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Return records older than this deposit id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Comma-separated statuses to filter by (e.g., "COMPLETE").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statuses: Option<String>,
}

impl DepositHistoryRequest {
    /// Create a request for a currency with no filters.
    pub fn new(currency: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
            ..Default::default()
        }
    }
}

/// Deposit history response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepositHistory {
    /// Deposit records, newest first.
    #[serde(default)]
    pub data: Vec<DepositRecord>,
    /// Whether more records exist beyond this page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_next: Option<bool>,
}

/// A single deposit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepositRecord {
    /// Deposit serial number.
    #[serde(default)]
    pub serial: String,
    /// Deposit time (unix milliseconds).
    #[serde(default)]
    pub timestamp: i64,
    /// Deposit address (empty for fiat).
    #[serde(default)]
    pub address: String,
    /// Deposited amount.
    pub amount: Decimal,
    /// Fee charged.
    #[serde(default)]
    pub fee: Option<Decimal>,
    /// Amount credited after fees.
    #[serde(default)]
    pub total: Option<Decimal>,
    /// Deposit status (e.g., "COMPLETE").
    #[serde(default)]
    pub status: String,
    /// On-chain transaction id.
    #[serde(default)]
    pub txid: Option<String>,
    /// Network protocol.
    #[serde(default)]
    pub protocol: Option<String>,
    /// Deposit id usable for pagination.
    #[serde(default)]
    pub id: Option<String>,
    /// Memo or message attached to the deposit.
    #[serde(default)]
    pub message: Option<String>,
}

/// Which orders to return when listing orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderStatusKind {
    /// Orders still on the book.
    Open,
    /// Filled or cancelled orders.
    Done,
    /// Both open and finished orders.
    All,
}

/// Request parameters for listing the orders of a pair.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AllOrdersRequest {
    /// Pair identifier (sent in the path).
    #[serde(skip)]
    pub pair: String,
    /// Which orders to include.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_kind: Option<OrderStatusKind>,
    /// Maximum number of orders.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Start of the range (unix milliseconds).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_timestamp: Option<i64>,
    /// End of the range (unix milliseconds).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_timestamp: Option<i64>,
    /// Return orders older than this order id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
}

impl AllOrdersRequest {
    /// Create a request for a pair with no filters.
    pub fn new(pair: impl Into<String>) -> Self {
        Self {
            pair: pair.into(),
            ..Default::default()
        }
    }

    /// Restrict the listing to a status kind.
    pub fn status_kind(mut self, kind: OrderStatusKind) -> Self {
        self.status_kind = Some(kind);
        self
    }

    /// Set the maximum number of orders.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// An order placed by the account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Order id.
    pub id: String,
    /// Pair identifier.
    pub pair: String,
    /// Limit price.
    #[serde(default)]
    pub price: Option<Decimal>,
    /// Average execution price.
    #[serde(default)]
    pub avg_execution_price: Option<Decimal>,
    /// "BUY" or "SELL".
    pub action: String,
    /// Order type (e.g., "LIMIT", "MARKET").
    #[serde(rename = "type")]
    pub order_type: String,
    /// Status code; see [`Order::is_open`].
    pub status: i32,
    /// Amount when the order was placed.
    #[serde(default)]
    pub original_amount: Option<Decimal>,
    /// Amount still unfilled.
    #[serde(default)]
    pub remaining_amount: Option<Decimal>,
    /// Amount filled.
    #[serde(default)]
    pub executed_amount: Option<Decimal>,
    /// Fee charged.
    #[serde(default)]
    pub fee: Option<Decimal>,
    /// Currency the fee was charged in.
    #[serde(default)]
    pub fee_symbol: Option<String>,
    /// Time in force (e.g., "GTC").
    #[serde(default)]
    pub time_in_force: Option<String>,
    /// Creation time (unix milliseconds).
    #[serde(default)]
    pub created_timestamp: Option<i64>,
    /// Last update time (unix milliseconds).
    #[serde(default)]
    pub updated_timestamp: Option<i64>,
}

impl Order {
    /// Whether the order can still fill.
    ///
    /// BitoPro uses -1 (not triggered), 0 (in progress) and 1 (partially
    /// filled) for live orders.
    pub fn is_open(&self) -> bool {
        matches!(self.status, -1..=1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balance_deserialize() {
        let json = r#"{"currency":"btc","amount":"1.5","available":"0.5","stake":"0","tradable":true}"#;
        let balance: Balance = serde_json::from_str(json).unwrap();
        assert_eq!(balance.currency, "btc");
        assert_eq!(balance.available, "0.5");
        assert_eq!(balance.available_decimal(), Some(Decimal::new(5, 1)));
        assert!(balance.tradable);
    }

    #[test]
    fn test_balance_keeps_non_numeric_available() {
        let json = r#"{"currency":"usdt","amount":"n/a","available":"n/a","tradable":false}"#;
        let balance: Balance = serde_json::from_str(json).unwrap();
        assert_eq!(balance.available, "n/a");
        assert!(balance.has_available());
        assert_eq!(balance.available_decimal(), None);
    }

    #[test]
    fn test_balance_has_available_compares_literal_zero() {
        let json = r#"[{"currency":"eth","amount":"0","available":"0"},
                       {"currency":"usdt","amount":"0.00000000","available":"0.00000000"}]"#;
        let balances: Vec<Balance> = serde_json::from_str(json).unwrap();
        assert!(!balances[0].has_available());
        assert!(balances[1].has_available());
    }

    #[test]
    fn test_deposit_history_request_query() {
        let request = DepositHistoryRequest {
            limit: Some(20),
            statuses: Some("COMPLETE".to_string()),
            ..DepositHistoryRequest::new("TWD")
        };
        let query = serde_urlencoded::to_string(&request).unwrap();
        assert_eq!(query, "limit=20&statuses=COMPLETE");
    }

    #[test]
    fn test_all_orders_request_query() {
        let request = AllOrdersRequest::new("btc_twd")
            .status_kind(OrderStatusKind::All)
            .limit(1000);
        let query = serde_urlencoded::to_string(&request).unwrap();
        assert_eq!(query, "statusKind=ALL&limit=1000");
    }

    #[test]
    fn test_order_is_open() {
        let json = r#"{"id":"1","pair":"btc_twd","action":"BUY","type":"LIMIT","status":1}"#;
        let mut order: Order = serde_json::from_str(json).unwrap();
        assert!(order.is_open());
        order.status = 2;
        assert!(!order.is_open());
    }
}
