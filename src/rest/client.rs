//! BitoPro REST API client implementation.

use std::sync::Arc;

use reqwest::StatusCode;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, RETRY_AFTER, USER_AGENT};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{RetryTransientMiddleware, policies::ExponentialBackoff};
use reqwest_tracing::TracingMiddleware;
use tracing::debug;

use crate::auth::{CredentialsProvider, IncreasingNonce, NonceProvider, sign_request};
use crate::error::{ApiError, BitoProError};
use crate::rest::endpoints::BITOPRO_BASE_URL;
use crate::rest::private::{
    AllOrdersRequest, Balance, DepositHistory, DepositHistoryRequest, Order,
};
use crate::rest::public::{Currency, OrderBook, OrderBookRequest, Ticker, Trade, TradingPair};
use crate::rest::traits::BitoProClient;

/// Header carrying the API key.
pub const HEADER_API_KEY: &str = "X-BITOPRO-APIKEY";
/// Header carrying the base64 payload.
pub const HEADER_PAYLOAD: &str = "X-BITOPRO-PAYLOAD";
/// Header carrying the payload signature.
pub const HEADER_SIGNATURE: &str = "X-BITOPRO-SIGNATURE";

/// The BitoPro REST API client.
///
/// This client provides access to the BitoPro v3 REST endpoints.
/// It handles payload signing and automatic retries of transient failures.
///
/// # Example
///
/// ```rust,no_run
/// use bitopro_api_client::rest::BitoProRestClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     // Create a client for public endpoints only
///     let client = BitoProRestClient::new();
///
///     let pairs = client.get_trading_pairs().await?;
///     println!("Trading pairs: {}", pairs.len());
///
///     Ok(())
/// }
/// ```
///
/// For private endpoints, provide credentials:
///
/// ```rust,no_run
/// use bitopro_api_client::rest::BitoProRestClient;
/// use bitopro_api_client::auth::StaticCredentials;
/// use std::sync::Arc;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let credentials = Arc::new(StaticCredentials::new("api_key", "api_secret"));
///     let client = BitoProRestClient::builder()
///         .credentials(credentials)
///         .build();
///
///     let balances = client.get_account_balance().await?;
///     println!("Balances: {:?}", balances);
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct BitoProRestClient {
    http_client: ClientWithMiddleware,
    base_url: String,
    credentials: Option<Arc<dyn CredentialsProvider>>,
    nonce_provider: Arc<dyn NonceProvider>,
}

impl BitoProRestClient {
    /// Create a new client with default settings.
    ///
    /// This client can only access public endpoints.
    /// Use [`BitoProRestClient::builder()`] to configure credentials for private endpoints.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Create a new client builder.
    pub fn builder() -> BitoProRestClientBuilder {
        BitoProRestClientBuilder::new()
    }

    /// Whether a credentials provider is configured.
    pub fn has_credentials(&self) -> bool {
        self.credentials.is_some()
    }

    /// The base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Make a public GET request.
    pub(crate) async fn public_get<T>(&self, endpoint: &str) -> Result<T, BitoProError>
    where
        T: serde::de::DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, endpoint);
        debug!(%url, "public GET");
        let response = self.http_client.get(&url).send().await?;
        self.parse_response(response).await
    }

    /// Make a public GET request with query parameters.
    pub(crate) async fn public_get_with_params<T, Q>(
        &self,
        endpoint: &str,
        params: &Q,
    ) -> Result<T, BitoProError>
    where
        T: serde::de::DeserializeOwned,
        Q: serde::Serialize + ?Sized,
    {
        let url = self.url_with_query(endpoint, params)?;
        debug!(%url, "public GET");
        let response = self.http_client.get(&url).send().await?;
        self.parse_response(response).await
    }

    /// Make an authenticated GET request.
    ///
    /// The query parameters are not part of the signed payload; BitoPro signs
    /// only the identity and nonce for GET requests.
    pub(crate) async fn private_get<T, Q>(
        &self,
        endpoint: &str,
        params: &Q,
    ) -> Result<T, BitoProError>
    where
        T: serde::de::DeserializeOwned,
        Q: serde::Serialize + ?Sized,
    {
        let credentials = self
            .credentials
            .as_ref()
            .ok_or(BitoProError::MissingCredentials)?;
        let creds = credentials.get_credentials();

        let nonce = self.nonce_provider.next_nonce();
        let signed = sign_request(creds, nonce)?;

        let url = self.url_with_query(endpoint, params)?;
        debug!(%url, nonce, "private GET");
        let response = self
            .http_client
            .get(&url)
            .header(HEADER_API_KEY, &creds.api_key)
            .header(HEADER_PAYLOAD, signed.payload)
            .header(HEADER_SIGNATURE, signed.signature)
            .send()
            .await?;

        self.parse_response(response).await
    }

    fn url_with_query<Q>(&self, endpoint: &str, params: &Q) -> Result<String, BitoProError>
    where
        Q: serde::Serialize + ?Sized,
    {
        let query_string = serde_urlencoded::to_string(params)
            .map_err(|e| BitoProError::InvalidResponse(e.to_string()))?;
        Ok(if query_string.is_empty() {
            format!("{}{}", self.base_url, endpoint)
        } else {
            format!("{}{}?{}", self.base_url, endpoint, query_string)
        })
    }

    /// Parse a response from the BitoPro API.
    async fn parse_response<T>(&self, response: reqwest::Response) -> Result<T, BitoProError>
    where
        T: serde::de::DeserializeOwned,
    {
        let status = response.status();

        if status == StatusCode::TOO_MANY_REQUESTS {
            let retry_after_ms = response
                .headers()
                .get(RETRY_AFTER)
                .and_then(|value| value.to_str().ok())
                .and_then(|value| value.trim().parse::<u64>().ok())
                .map(|secs| secs * 1000);
            return Err(BitoProError::RateLimitExceeded { retry_after_ms });
        }

        let body = response.text().await?;

        if !status.is_success() {
            return Err(BitoProError::Api(ApiError::from_body(status.as_u16(), &body)));
        }

        serde_json::from_str(&body).map_err(|e| {
            BitoProError::InvalidResponse(format!("Failed to parse response: {}. Body: {}", e, body))
        })
    }
}

impl Default for BitoProRestClient {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for BitoProRestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BitoProRestClient")
            .field("base_url", &self.base_url)
            .field("has_credentials", &self.credentials.is_some())
            .finish()
    }
}

/// Builder for [`BitoProRestClient`].
pub struct BitoProRestClientBuilder {
    base_url: String,
    credentials: Option<Arc<dyn CredentialsProvider>>,
    nonce_provider: Option<Arc<dyn NonceProvider>>,
    user_agent: Option<String>,
    max_retries: u32,
}

impl BitoProRestClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: BITOPRO_BASE_URL.to_string(),
            credentials: None,
            nonce_provider: None,
            user_agent: None,
            max_retries: 3,
        }
    }

    /// Set the base URL (useful for testing with a mock server).
    ///
    /// A trailing slash is stripped so endpoint paths join cleanly.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the credentials provider for authenticated requests.
    pub fn credentials(mut self, credentials: Arc<dyn CredentialsProvider>) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set a custom nonce provider.
    pub fn nonce_provider(mut self, provider: Arc<dyn NonceProvider>) -> Self {
        self.nonce_provider = Some(provider);
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Set the maximum number of retries for transient failures.
    pub fn max_retries(mut self, retries: u32) -> Self {
        self.max_retries = retries;
        self
    }

    /// Build the client, validating the base URL first.
    pub fn try_build(self) -> Result<BitoProRestClient, BitoProError> {
        url::Url::parse(&self.base_url)?;
        Ok(self.build())
    }

    /// Build the client.
    pub fn build(self) -> BitoProRestClient {
        let mut headers = HeaderMap::new();
        let user_agent = self
            .user_agent
            .unwrap_or_else(|| format!("bitopro-api-client/{}", env!("CARGO_PKG_VERSION")));
        let header_value = HeaderValue::from_str(&user_agent)
            .unwrap_or_else(|_| HeaderValue::from_static("bitopro-api-client"));
        headers.insert(USER_AGENT, header_value);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let reqwest_client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        let retry_policy = ExponentialBackoff::builder().build_with_max_retries(self.max_retries);

        let client = ClientBuilder::new(reqwest_client)
            .with(TracingMiddleware::default())
            .with(RetryTransientMiddleware::new_with_policy(retry_policy))
            .build();

        let nonce_provider = self
            .nonce_provider
            .unwrap_or_else(|| Arc::new(IncreasingNonce::new()));

        BitoProRestClient {
            http_client: client,
            base_url: self.base_url,
            credentials: self.credentials,
            nonce_provider,
        }
    }
}

impl Default for BitoProRestClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Response wrapper for endpoints that return `{"data": ...}`.
#[derive(Debug, serde::Deserialize)]
pub(crate) struct DataEnvelope<T> {
    pub(crate) data: T,
}

// BitoProClient trait implementation.

impl BitoProClient for BitoProRestClient {
    async fn get_currencies(&self) -> Result<Vec<Currency>, BitoProError> {
        BitoProRestClient::get_currencies(self).await
    }

    async fn get_trading_pairs(&self) -> Result<Vec<TradingPair>, BitoProError> {
        BitoProRestClient::get_trading_pairs(self).await
    }

    async fn get_ticker(&self, pair: &str) -> Result<Ticker, BitoProError> {
        BitoProRestClient::get_ticker(self, pair).await
    }

    async fn get_tickers(&self) -> Result<Vec<Ticker>, BitoProError> {
        BitoProRestClient::get_tickers(self).await
    }

    async fn get_trades(&self, pair: &str) -> Result<Vec<Trade>, BitoProError> {
        BitoProRestClient::get_trades(self, pair).await
    }

    async fn get_order_book(&self, request: &OrderBookRequest) -> Result<OrderBook, BitoProError> {
        BitoProRestClient::get_order_book(self, request).await
    }

    async fn get_account_balance(&self) -> Result<Vec<Balance>, BitoProError> {
        BitoProRestClient::get_account_balance(self).await
    }

    async fn get_deposit_history(
        &self,
        request: &DepositHistoryRequest,
    ) -> Result<DepositHistory, BitoProError> {
        BitoProRestClient::get_deposit_history(self, request).await
    }

    async fn get_all_orders(&self, request: &AllOrdersRequest) -> Result<Vec<Order>, BitoProError> {
        BitoProRestClient::get_all_orders(self, request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_strips_trailing_slash() {
        let client = BitoProRestClient::builder()
            .base_url("http://localhost:8080/v3/")
            .build();
        assert_eq!(client.base_url(), "http://localhost:8080/v3");
        assert!(!client.has_credentials());
    }

    #[test]
    fn test_try_build_rejects_bad_url() {
        let result = BitoProRestClient::builder().base_url("not a url").try_build();
        assert!(matches!(result, Err(BitoProError::Url(_))));
    }

    #[test]
    fn test_debug_hides_credentials() {
        let credentials = Arc::new(crate::auth::StaticCredentials::new("key", "secret"));
        let client = BitoProRestClient::builder().credentials(credentials).build();
        let debug_str = format!("{:?}", client);
        assert!(debug_str.contains("has_credentials: true"));
        assert!(!debug_str.contains("secret"));
    }
}
