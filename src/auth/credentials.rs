//! Credential management for BitoPro API authentication.

use secrecy::{ExposeSecret, SecretString};
use std::sync::Arc;

use crate::error::BitoProError;

/// Environment variable holding the API key.
pub const API_KEY_VAR: &str = "BITOPRO_API_KEY";
/// Environment variable holding the API secret.
pub const API_SECRET_VAR: &str = "BITOPRO_API_SECRET";
/// Environment variable holding the account identity (email).
pub const IDENTITY_VAR: &str = "BITOPRO_EMAIL";

/// API credentials containing the key, secret and optional account identity.
#[derive(Clone)]
pub struct Credentials {
    /// The API key (public identifier)
    pub api_key: String,
    /// The API secret (private, used for signing)
    api_secret: SecretString,
    /// Account identity (email) embedded in signed payloads.
    pub identity: Option<String>,
}

impl Credentials {
    /// Create new credentials from an API key and secret.
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: SecretString::from(api_secret.into()),
            identity: None,
        }
    }

    /// Attach the account identity (email) used in signed payloads.
    pub fn with_identity(mut self, identity: impl Into<String>) -> Self {
        self.identity = Some(identity.into());
        self
    }

    /// Get the API secret for signing.
    ///
    /// This method exposes the secret - use carefully.
    pub fn expose_secret(&self) -> &str {
        self.api_secret.expose_secret()
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("api_secret", &"[REDACTED]")
            .field("identity", &self.identity)
            .finish()
    }
}

/// Trait for providing API credentials.
///
/// Implement this trait to customize how credentials are retrieved,
/// for example from a secrets manager or environment variables.
pub trait CredentialsProvider: Send + Sync {
    /// Get the credentials.
    fn get_credentials(&self) -> &Credentials;
}

/// Static credentials provider that holds credentials directly.
#[derive(Clone)]
pub struct StaticCredentials {
    credentials: Credentials,
}

impl StaticCredentials {
    /// Create a new static credentials provider.
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            credentials: Credentials::new(api_key, api_secret),
        }
    }

    /// Wrap already-built credentials.
    pub fn from_credentials(credentials: Credentials) -> Self {
        Self { credentials }
    }
}

impl CredentialsProvider for StaticCredentials {
    fn get_credentials(&self) -> &Credentials {
        &self.credentials
    }
}

impl CredentialsProvider for Arc<StaticCredentials> {
    fn get_credentials(&self) -> &Credentials {
        &self.credentials
    }
}

/// Credentials provider that reads from environment variables.
///
/// By default, reads `BITOPRO_API_KEY`, `BITOPRO_API_SECRET` and the optional
/// `BITOPRO_EMAIL`. The values are read once, when the provider is created.
#[derive(Debug)]
pub struct EnvCredentials {
    credentials: Credentials,
}

impl EnvCredentials {
    /// Create credentials from the default environment variables.
    ///
    /// Returns [`BitoProError::MissingCredentials`] if the key or secret is not set.
    pub fn from_env() -> Result<Self, BitoProError> {
        Self::try_from_env().ok_or(BitoProError::MissingCredentials)
    }

    /// Try to create credentials from the default environment variables.
    ///
    /// Returns `None` if the key or secret is not set.
    pub fn try_from_env() -> Option<Self> {
        Self::try_from_env_vars(API_KEY_VAR, API_SECRET_VAR, IDENTITY_VAR)
    }

    /// Try to create credentials from custom environment variable names.
    ///
    /// Returns `None` if the key or secret variable is not set. The identity
    /// variable is optional.
    pub fn try_from_env_vars(key_var: &str, secret_var: &str, identity_var: &str) -> Option<Self> {
        let api_key = std::env::var(key_var).ok()?;
        let api_secret = std::env::var(secret_var).ok()?;

        let mut credentials = Credentials::new(api_key, api_secret);
        if let Ok(identity) = std::env::var(identity_var) {
            credentials = credentials.with_identity(identity);
        }

        Some(Self { credentials })
    }

    /// Unwrap into the underlying credentials.
    pub fn into_credentials(self) -> Credentials {
        self.credentials
    }
}

impl CredentialsProvider for EnvCredentials {
    fn get_credentials(&self) -> &Credentials {
        &self.credentials
    }
}
