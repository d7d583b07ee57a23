//! HMAC-SHA384 payload signing for BitoPro API authentication.
//!
//! BitoPro private endpoints authenticate with three headers:
//! ```text
//! X-BITOPRO-APIKEY:    api_key
//! X-BITOPRO-PAYLOAD:   base64(json({"identity": email, "nonce": nonce}))
//! X-BITOPRO-SIGNATURE: hex(HMAC-SHA384(payload, api_secret))
//! ```

use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use hmac::{Hmac, Mac};
use serde::Serialize;
use sha2::Sha384;

use crate::auth::Credentials;
use crate::error::BitoProError;

type HmacSha384 = Hmac<Sha384>;

/// A base64 payload together with its signature, ready to be sent as headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedPayload {
    /// Value of the `X-BITOPRO-PAYLOAD` header.
    pub payload: String,
    /// Value of the `X-BITOPRO-SIGNATURE` header.
    pub signature: String,
}

#[derive(Serialize)]
struct PayloadBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    identity: Option<&'a str>,
    nonce: u64,
}

/// Build the base64 encoded payload for a signed GET request.
///
/// The identity is omitted from the JSON body when it is not configured.
pub fn build_payload(identity: Option<&str>, nonce: u64) -> Result<String, BitoProError> {
    let body = serde_json::to_vec(&PayloadBody { identity, nonce })?;
    Ok(BASE64.encode(body))
}

/// Sign a base64 payload with the API secret.
///
/// Returns the lowercase hex HMAC-SHA384 digest (96 characters).
pub fn sign_payload(api_secret: &str, payload: &str) -> Result<String, BitoProError> {
    let mut hmac = HmacSha384::new_from_slice(api_secret.as_bytes())
        .map_err(|e| BitoProError::Auth(format!("Invalid HMAC key: {e}")))?;
    hmac.update(payload.as_bytes());
    Ok(hex::encode(hmac.finalize().into_bytes()))
}

/// Build and sign the payload for a request made with `credentials`.
///
/// # Example
///
/// ```rust
/// use bitopro_api_client::auth::{Credentials, sign_request};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let credentials = Credentials::new("api_key", "api_secret").with_identity("me@example.com");
/// let signed = sign_request(&credentials, 1_700_000_000_000)?;
/// assert_eq!(signed.signature.len(), 96);
/// # Ok(())
/// # }
/// ```
pub fn sign_request(credentials: &Credentials, nonce: u64) -> Result<SignedPayload, BitoProError> {
    let payload = build_payload(credentials.identity.as_deref(), nonce)?;
    let signature = sign_payload(credentials.expose_secret(), &payload)?;
    Ok(SignedPayload { payload, signature })
}
