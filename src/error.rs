//! Error types for the BitoPro client library.

use thiserror::Error;

/// The main error type for all BitoPro client operations.
#[derive(Error, Debug)]
pub enum BitoProError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// HTTP request with middleware failed
    #[error("HTTP request failed: {0}")]
    HttpMiddleware(#[from] reqwest_middleware::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing error
    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),

    /// Filesystem error while writing or reading a report file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// BitoPro API returned an error
    #[error("BitoPro API error: {0}")]
    Api(ApiError),

    /// Rate limit exceeded
    #[error("Rate limit exceeded, retry after {retry_after_ms:?}ms")]
    RateLimitExceeded {
        /// Suggested wait time in milliseconds before retrying
        retry_after_ms: Option<u64>,
    },

    /// Authentication error
    #[error("Authentication error: {0}")]
    Auth(String),

    /// Invalid response from the API
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Missing required credentials
    #[error("Missing credentials: API key and secret required for private endpoints")]
    MissingCredentials,
}

/// An error reported by the BitoPro API in the response body.
///
/// BitoPro answers failed requests with a non-2xx status and a body of the form
/// `{"error": "message"}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// HTTP status code of the response.
    pub status: u16,
    /// Error message from BitoPro.
    pub message: String,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "HTTP {}: {}", self.status, self.message)
    }
}

impl ApiError {
    /// Create a new API error from a status code and message.
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Parse an API error from a BitoPro error body.
    ///
    /// Falls back to the raw body when it is not the usual `{"error": ...}` shape.
    pub fn from_body(status: u16, body: &str) -> Self {
        #[derive(serde::Deserialize)]
        struct ErrorBody {
            error: String,
        }

        match serde_json::from_str::<ErrorBody>(body) {
            Ok(parsed) => Self::new(status, parsed.error),
            Err(_) if body.trim().is_empty() => Self::new(status, "empty response body"),
            Err(_) => Self::new(status, body.trim()),
        }
    }

    /// Check if the request was rejected for bad or missing credentials.
    pub fn is_unauthorized(&self) -> bool {
        self.status == 401 || self.status == 403
    }

    /// Check if the requested resource (pair, currency, order) does not exist.
    pub fn is_not_found(&self) -> bool {
        self.status == 404
    }

    /// Check if this is a rate limit error.
    pub fn is_rate_limit(&self) -> bool {
        self.status == 429
    }

    /// Check if the request parameters were rejected.
    pub fn is_bad_request(&self) -> bool {
        self.status == 400
    }
}
