//! Authentication module for BitoPro API.
//!
//! This module provides:
//! - Credential management with secure secret storage
//! - Millisecond nonce generation for signed payloads
//! - HMAC-SHA384 payload signing for authenticated requests

mod credentials;
mod nonce;
mod signature;

pub use credentials::{Credentials, CredentialsProvider, EnvCredentials, StaticCredentials};
pub use nonce::{IncreasingNonce, NonceProvider};
pub use signature::{SignedPayload, build_payload, sign_payload, sign_request};
