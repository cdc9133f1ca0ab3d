//! Error types for completion requests

use thiserror::Error;

/// Errors surfaced by a [`CompletionService`](crate::CompletionService).
#[derive(Error, Debug)]
pub enum Error {
    /// Request never produced an HTTP response (DNS, connect, TLS, reset).
    #[error("network error: {0}")]
    Network(String),

    /// Credential missing or rejected (HTTP 401/403).
    #[error("authentication failed: {0}")]
    Auth(String),

    /// Provider throttled the request (HTTP 429).
    #[error("rate limited: {0}")]
    RateLimit(String),

    /// Any other non-success status.
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Success status but the body was not a usable completion.
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

impl Error {
    pub fn invalid_response(msg: impl Into<String>) -> Self {
        Self::InvalidResponse(msg.into())
    }

    /// Map a non-success HTTP status and provider message onto the taxonomy.
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        match status {
            401 | 403 => Self::Auth(message),
            429 => Self::RateLimit(message),
            _ => Self::Api { status, message },
        }
    }

    /// Whether the same request could succeed later. Nothing retries; hosts
    /// use this to suggest trying again.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Network(_) | Self::RateLimit(_) => true,
            Self::Api { status, .. } => *status >= 500,
            _ => false,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::InvalidResponse(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidResponse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status() {
        assert!(matches!(Error::from_status(401, "bad key"), Error::Auth(m) if m == "bad key"));
        assert!(matches!(Error::from_status(403, "forbidden"), Error::Auth(_)));
        assert!(matches!(Error::from_status(429, "slow down"), Error::RateLimit(_)));
        assert!(matches!(
            Error::from_status(500, "boom"),
            Error::Api { status: 500, .. }
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!(
            Error::from_status(502, "bad gateway").to_string(),
            "API error 502: bad gateway"
        );
        assert_eq!(
            Error::Auth("missing API key".into()).to_string(),
            "authentication failed: missing API key"
        );
    }

    #[test]
    fn test_is_retryable() {
        assert!(Error::Network("reset".into()).is_retryable());
        assert!(Error::RateLimit("429".into()).is_retryable());
        assert!(Error::from_status(503, "").is_retryable());
        assert!(!Error::from_status(400, "").is_retryable());
        assert!(!Error::Auth("".into()).is_retryable());
    }

    #[test]
    fn test_json_error_is_invalid_response() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        assert!(matches!(Error::from(json_err), Error::InvalidResponse(_)));
    }
}
