//! Balance summary file.
//!
//! The summary maps each currency whose available amount is not the string
//! `"0"` to that amount, verbatim, under a single top-level `"balance"` key:
//!
//! ```json
//! {
//!     "balance": {
//!         "btc": "0.5"
//!     }
//! }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::ser::{PrettyFormatter, Serializer};
use tracing::debug;

use crate::error::BitoProError;
use crate::rest::private::Balance;

/// Currencies with an available balance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceSummary {
    /// Available amount by currency code. Omitted from the file when empty.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub balance: BTreeMap<String, String>,
}

impl BalanceSummary {
    /// Keep the balances whose `available` is not `"0"`, keyed by currency.
    ///
    /// If a currency appears twice the later record wins.
    pub fn from_balances(balances: &[Balance]) -> Self {
        let balance = balances
            .iter()
            .filter(|b| b.has_available())
            .map(|b| (b.currency.clone(), b.available.clone()))
            .collect();
        Self { balance }
    }

    /// Whether no currency has an available balance.
    pub fn is_empty(&self) -> bool {
        self.balance.is_empty()
    }

    /// Render the summary as JSON indented with four spaces.
    pub fn to_json_pretty(&self) -> Result<String, BitoProError> {
        let mut out = Vec::new();
        let mut serializer = Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(b"    "));
        self.serialize(&mut serializer)?;
        String::from_utf8(out).map_err(|e| BitoProError::InvalidResponse(e.to_string()))
    }

    /// Write the summary to `path`, replacing any existing file.
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<(), BitoProError> {
        let path = path.as_ref();
        let json = self.to_json_pretty()?;
        std::fs::write(path, json)?;
        debug!(path = %path.display(), currencies = self.balance.len(), "wrote balance summary");
        Ok(())
    }

    /// Read a summary previously written with [`BalanceSummary::write_to`].
    pub fn read_from(path: impl AsRef<Path>) -> Result<Self, BitoProError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn balance(currency: &str, available: &str) -> Balance {
        Balance {
            currency: currency.to_string(),
            amount: available.to_string(),
            available: available.to_string(),
            stake: None,
            tradable: true,
        }
    }

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("bitopro-{}-{}.json", name, std::process::id()))
    }

    #[test]
    fn test_filters_zero_balances() {
        let summary = BalanceSummary::from_balances(&[balance("BTC", "0.5"), balance("ETH", "0")]);
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json, serde_json::json!({"balance": {"BTC": "0.5"}}));
    }

    #[test]
    fn test_keeps_padded_zero_verbatim() {
        let summary = BalanceSummary::from_balances(&[balance("USDT", "0.00000000")]);
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json, serde_json::json!({"balance": {"USDT": "0.00000000"}}));
    }

    #[test]
    fn test_keeps_non_numeric_available() {
        let summary = BalanceSummary::from_balances(&[balance("twd", "pending"), balance("btc", "0")]);
        assert_eq!(summary.balance.len(), 1);
        assert_eq!(summary.balance["twd"], "pending");
    }

    #[test]
    fn test_order_independent() {
        let forward = BalanceSummary::from_balances(&[
            balance("btc", "1"),
            balance("twd", "0"),
            balance("eth", "2.25"),
        ]);
        let reverse = BalanceSummary::from_balances(&[
            balance("eth", "2.25"),
            balance("twd", "0"),
            balance("btc", "1"),
        ]);
        assert_eq!(forward, reverse);
        assert_eq!(forward.balance.len(), 2);
        assert_eq!(forward.balance["eth"], "2.25");
    }

    #[test]
    fn test_empty_list_serializes_without_key() {
        let summary = BalanceSummary::from_balances(&[]);
        assert!(summary.is_empty());
        assert_eq!(summary.to_json_pretty().unwrap(), "{}");
    }

    #[test]
    fn test_pretty_output_uses_four_spaces() {
        let summary = BalanceSummary::from_balances(&[balance("BTC", "0.5")]);
        let expected = "{\n    \"balance\": {\n        \"BTC\": \"0.5\"\n    }\n}";
        assert_eq!(summary.to_json_pretty().unwrap(), expected);
    }

    #[test]
    fn test_write_then_read() {
        let path = temp_path("roundtrip");
        let summary = BalanceSummary::from_balances(&[balance("btc", "0.5"), balance("twd", "1200")]);

        summary.write_to(&path).unwrap();
        let loaded = BalanceSummary::read_from(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(loaded, summary);
    }

    #[test]
    fn test_write_overwrites_existing_file() {
        let path = temp_path("overwrite");
        std::fs::write(&path, "stale contents that are longer than the new file").unwrap();

        let summary = BalanceSummary::from_balances(&[]);
        summary.write_to(&path).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(contents, "{}");
    }
}
