//! BitoPro REST API endpoint constants.
//!
//! Endpoints that take a pair or currency are path prefixes; the client
//! appends the lower-cased identifier.

/// Base URL for the BitoPro v3 REST API.
pub const BITOPRO_BASE_URL: &str = "https://api.bitopro.com/v3";

/// Public endpoints (no authentication required).
pub mod public {
    /// List supported currencies.
    pub const CURRENCIES: &str = "/provisioning/currencies";
    /// List trading pairs.
    pub const TRADING_PAIRS: &str = "/provisioning/trading-pairs";
    /// Ticker for every pair, or one pair when followed by `/{pair}`.
    pub const TICKERS: &str = "/tickers";
    /// Recent trades, followed by `/{pair}`.
    pub const TRADES: &str = "/trades";
    /// Order book, followed by `/{pair}`.
    pub const ORDER_BOOK: &str = "/order-book";
}

/// Private endpoints (authentication required).
pub mod private {
    /// Account balances.
    pub const ACCOUNT_BALANCE: &str = "/accounts/balance";
    /// Deposit history, followed by `/{currency}`.
    pub const DEPOSIT_HISTORY: &str = "/wallet/depositHistory";
    /// Orders for a pair, followed by `/{pair}`.
    pub const ALL_ORDERS: &str = "/orders/all";
}

/// Join an endpoint prefix and a pair or currency identifier.
///
/// BitoPro identifiers are lower case (`eth_usdt`, `twd`); the identifier is
/// normalized so callers may pass `ETH_USDT`.
pub fn with_id(endpoint: &str, id: &str) -> String {
    format!("{}/{}", endpoint, id.trim().to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_id_lowercases() {
        assert_eq!(with_id(public::TICKERS, "ETH_USDT"), "/tickers/eth_usdt");
        assert_eq!(
            with_id(private::DEPOSIT_HISTORY, " TWD "),
            "/wallet/depositHistory/twd"
        );
    }
}
