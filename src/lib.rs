//! # BitoPro Client
//!
//! An async Rust client library for the BitoPro exchange REST API, plus a
//! one-shot report runner built on top of it.
//!
//! ## Features
//!
//! - Typed access to BitoPro's public market data and private account endpoints
//! - HMAC-SHA384 payload signing with strictly increasing nonces
//! - Built-in rate limiting and retries of transient failures
//! - Financial precision with `rust_decimal`
//! - A report runner that writes a summary of available balances to JSON
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use bitopro_api_client::rest::BitoProRestClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = BitoProRestClient::new();
//!     let ticker = client.get_ticker("ETH_USDT").await?;
//!     println!("ETH/USDT: {}", ticker.last_price);
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod error;
pub mod rate_limit;
pub mod report;
pub mod rest;

// Re-export commonly used types at crate root
pub use error::BitoProError;
pub use rest::{BitoProClient, BitoProRestClient};

/// Result type alias using BitoProError
pub type Result<T> = std::result::Result<T, BitoProError>;
