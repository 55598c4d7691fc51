//! MyNance API client error types.
//!
//! One taxonomy for every failure a request can produce. The shape is
//! explicit: [`ApiError::status`] and [`ApiError::message`] return
//! `Option`s and call sites narrow them; there is no untyped error-body
//! navigation anywhere downstream.

/// Errors from MyNance API calls.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Transport failure: the request never produced a response
    /// (connection refused, DNS failure, timeout). Carries no HTTP status.
    #[error("HTTP error calling {endpoint}: {source}")]
    Transport {
        endpoint: String,
        source: reqwest::Error,
    },

    /// The backend answered with a non-2xx status. `message` holds the
    /// parsed `error` field of the response body when one was present.
    #[error("MyNance API {endpoint} returned {status}: {}", .message.as_deref().unwrap_or("<no error message>"))]
    Api {
        endpoint: String,
        status: u16,
        message: Option<String>,
    },

    /// Response deserialization failed.
    #[error("failed to deserialize response from {endpoint}: {source}")]
    Decode {
        endpoint: String,
        source: reqwest::Error,
    },

    /// Login succeeded but the backend did not set a session cookie.
    #[error("login response from {endpoint} did not carry a session cookie")]
    MissingSession { endpoint: String },

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
}

impl ApiError {
    /// The HTTP status the backend answered with, if it answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The backend's `error` message, if the failure body carried one.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Api { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// Whether this failure is the session-expiry signal (HTTP 401).
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }
}
