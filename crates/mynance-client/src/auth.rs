//! Typed client for the authentication endpoints.
//!
//! | Method | Path | Operation |
//! |--------|------|-----------|
//! | POST   | `/auth/login` | Log in; backend sets the `token` cookie |
//! | POST   | `/auth/logout` | Log out |
//! | POST   | `/auth/register` | Create an account |
//!
//! Passwords live in zeroizing buffers and are redacted from `Debug`
//! output; they are only written when the request body is serialized.

use reqwest::Method;
use serde::Serialize;
use zeroize::Zeroizing;

use crate::error::ApiError;
use crate::session::{serialize_secret, SessionToken, SESSION_COOKIE};
use crate::transport::Transport;

/// Login credentials.
#[derive(Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    #[serde(serialize_with = "serialize_secret")]
    pub password: Zeroizing<String>,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: Zeroizing::new(password.into()),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Request to create an account.
///
/// Matches `POST /auth/register`.
#[derive(Clone, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    #[serde(serialize_with = "serialize_secret")]
    pub password: Zeroizing<String>,
}

impl RegisterRequest {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: Zeroizing::new(password.into()),
        }
    }
}

impl std::fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

// -- Client -------------------------------------------------------------------

/// Client for the authentication endpoints.
#[derive(Debug, Clone)]
pub struct AuthClient {
    transport: Transport,
}

impl AuthClient {
    pub(crate) fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// Log in with email and password.
    ///
    /// Calls `POST {base_url}/auth/login`. On success the backend sets the
    /// `token` cookie; the shared cookie store picks it up, so every
    /// subsequent request from this client is authenticated. The token is
    /// also returned so a consumer can persist it and resume the session
    /// in a later process (see [`crate::ApiConfig::with_session_token`]).
    pub async fn login(&self, credentials: &Credentials) -> Result<SessionToken, ApiError> {
        let endpoint = "POST /auth/login";
        let resp = self
            .transport
            .dispatch(Method::POST, "auth/login", Some(credentials))
            .await?;

        if !resp.status().is_success() {
            return Err(Transport::api_error(endpoint, resp).await);
        }

        let token = resp
            .cookies()
            .find(|cookie| cookie.name() == SESSION_COOKIE)
            .map(|cookie| SessionToken::new(cookie.value()))
            .ok_or_else(|| ApiError::MissingSession {
                endpoint: endpoint.into(),
            });
        token
    }

    /// Log out the current session.
    ///
    /// Calls `POST {base_url}/auth/logout`.
    pub async fn logout(&self) -> Result<(), ApiError> {
        self.transport
            .request_unit::<()>(Method::POST, "auth/logout", None)
            .await
    }

    /// Create a new account.
    ///
    /// Calls `POST {base_url}/auth/register`. The account still has to log
    /// in afterwards; registration does not start a session.
    pub async fn register(&self, req: &RegisterRequest) -> Result<(), ApiError> {
        self.transport.post_unit("auth/register", req).await
    }
}
