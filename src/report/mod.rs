//! One-shot report runner over the BitoPro REST client.
//!
//! Loads nothing by itself: the caller hands over credentials and a
//! [`RunnerConfig`], gets back one client from [`build_client`], and runs the
//! selected reports with [`Runner::run`].
//!
//! ```rust,no_run
//! use bitopro_api_client::auth::EnvCredentials;
//! use bitopro_api_client::report::{ClientOptions, ReportKind, Runner, RunnerConfig, build_client};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let credentials = EnvCredentials::try_from_env().map(EnvCredentials::into_credentials);
//!     let client = build_client(credentials, ClientOptions::default())?;
//!
//!     let config = RunnerConfig::new([ReportKind::Balance]).balance_output("balance.json");
//!     let report = Runner::new(client, config).run().await?;
//!     println!("{:?}", report.balance_summary);
//!     Ok(())
//! }
//! ```

mod balance;
mod runner;

use std::sync::Arc;

pub use balance::BalanceSummary;
pub use runner::{
    DEFAULT_DEPOSIT_CURRENCY, DEFAULT_PAIR, ORDERS_LIMIT, ReportKind, RunReport, Runner,
    RunnerConfig,
};

use crate::auth::{Credentials, StaticCredentials};
use crate::error::BitoProError;
use crate::rate_limit::{RateLimitConfig, RateLimitedClient};
use crate::rest::BitoProRestClient;

/// Transport settings for the client built by [`build_client`].
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Override the API base URL.
    pub base_url: Option<String>,
    /// Retries for transient failures.
    pub max_retries: u32,
    /// Request throttling.
    pub rate_limit: RateLimitConfig,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            base_url: None,
            max_retries: 3,
            rate_limit: RateLimitConfig::default(),
        }
    }
}

/// Build the single rate-limited client a run uses.
///
/// Without credentials the client can still run public reports; private ones
/// fail with [`BitoProError::MissingCredentials`] when invoked.
pub fn build_client(
    credentials: Option<Credentials>,
    options: ClientOptions,
) -> Result<RateLimitedClient<BitoProRestClient>, BitoProError> {
    let mut builder = BitoProRestClient::builder()
        .max_retries(options.max_retries)
        .user_agent(format!("bitopro-report/{}", env!("CARGO_PKG_VERSION")));

    if let Some(base_url) = options.base_url {
        builder = builder.base_url(base_url);
    }
    if let Some(credentials) = credentials {
        builder = builder.credentials(Arc::new(StaticCredentials::from_credentials(credentials)));
    }

    Ok(RateLimitedClient::new(builder.try_build()?, options.rate_limit))
}
