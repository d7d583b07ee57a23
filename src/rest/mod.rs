//! BitoPro REST API client.
//!
//! Provides access to the BitoPro v3 REST endpoints.
//!
//! # Trait-based API
//!
//! The [`BitoProClient`] trait abstracts all REST API operations, enabling:
//! - Stub implementations for testing
//! - Decorator pattern (e.g., rate limiting wrapper)
//!
//! ```rust,ignore
//! use bitopro_api_client::rest::{BitoProClient, BitoProRestClient};
//!
//! async fn use_client<C: BitoProClient>(client: &C) -> Result<(), bitopro_api_client::BitoProError> {
//!     let ticker = client.get_ticker("eth_usdt").await?;
//!     println!("Last price: {}", ticker.last_price);
//!     Ok(())
//! }
//! ```

mod client;
mod endpoints;
pub mod private;
pub mod public;
mod traits;

pub use client::{
    BitoProRestClient, BitoProRestClientBuilder, HEADER_API_KEY, HEADER_PAYLOAD, HEADER_SIGNATURE,
};
pub use endpoints::{BITOPRO_BASE_URL, with_id};
pub use traits::BitoProClient;
