//! MyNance API client configuration.
//!
//! Resolves the backend base address and request timeout. Defaults point
//! at a local development backend. Override via environment variables or
//! explicit construction for staging/testing.

use url::Url;

use crate::session::SessionToken;

/// Base address used when `MYNANCE_API_HOST` is unset.
pub const DEFAULT_API_HOST: &str = "http://localhost:8080";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for connecting to the MyNance backend.
///
/// Custom `Debug` implementation redacts the `session_token` field to
/// prevent credential leakage in log output.
#[derive(Clone)]
pub struct ApiConfig {
    /// Base URL of the backend. Default: <http://localhost:8080>
    pub base_url: Url,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    /// Previously saved session token, seeded into the cookie store at
    /// client construction. `None` for a fresh, unauthenticated client.
    pub session_token: Option<SessionToken>,
}

impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .field(
                "session_token",
                &self.session_token.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}

impl ApiConfig {
    /// Configuration for a given base address with default timeout and no
    /// saved session.
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            session_token: None,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `MYNANCE_API_HOST` (default: `http://localhost:8080`)
    /// - `MYNANCE_TIMEOUT_SECS` (default: 30)
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: env_url("MYNANCE_API_HOST", DEFAULT_API_HOST)?,
            timeout_secs: std::env::var("MYNANCE_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
            session_token: None,
        })
    }

    /// Seed a previously saved session token.
    pub fn with_session_token(mut self, token: SessionToken) -> Self {
        self.session_token = Some(token);
        self
    }
}

fn env_url(var: &str, default: &str) -> Result<Url, ConfigError> {
    let raw = std::env::var(var).unwrap_or_else(|_| default.to_string());
    Url::parse(&raw).map_err(|e| ConfigError::InvalidUrl(var.to_string(), e.to_string()))
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid URL for {0}: {1}")]
    InvalidUrl(String, String),
}
