//! Private REST API endpoints (authentication required).
//!
//! These endpoints require API credentials to be configured on the client.

mod types;

pub use types::*;

use crate::error::BitoProError;
use crate::rest::BitoProRestClient;
use crate::rest::client::DataEnvelope;
use crate::rest::endpoints::{private, with_id};

impl BitoProRestClient {
    /// Get account balances.
    ///
    /// Returns one entry per currency, including zero balances.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use bitopro_api_client::rest::BitoProRestClient;
    /// use bitopro_api_client::auth::StaticCredentials;
    /// use std::sync::Arc;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let credentials = Arc::new(StaticCredentials::new("key", "secret"));
    ///     let client = BitoProRestClient::builder().credentials(credentials).build();
    ///
    ///     for balance in client.get_account_balance().await? {
    ///         println!("{}: {}", balance.currency, balance.available);
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub async fn get_account_balance(&self) -> Result<Vec<Balance>, BitoProError> {
        #[derive(serde::Serialize)]
        struct Empty {}
        let envelope: DataEnvelope<Vec<Balance>> =
            self.private_get(private::ACCOUNT_BALANCE, &Empty {}).await?;
        Ok(envelope.data)
    }

    /// Get the deposit history of a currency.
    pub async fn get_deposit_history(
        &self,
        request: &DepositHistoryRequest,
    ) -> Result<DepositHistory, BitoProError> {
        self.private_get(&with_id(private::DEPOSIT_HISTORY, &request.currency), request)
            .await
    }

    /// List the account's orders for a pair.
    pub async fn get_all_orders(&self, request: &AllOrdersRequest) -> Result<Vec<Order>, BitoProError> {
        let envelope: DataEnvelope<Option<Vec<Order>>> = self
            .private_get(&with_id(private::ALL_ORDERS, &request.pair), request)
            .await?;
        Ok(envelope.data.unwrap_or_default())
    }
}
