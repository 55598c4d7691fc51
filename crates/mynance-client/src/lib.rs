//! # mynance-client -- Typed Rust client for the MyNance API
//!
//! Provides ergonomic, typed access to every collection the MyNance
//! backend exposes:
//! - **Auth** via `/auth/*` (login, logout, register)
//! - **User profile** via `/user/*`
//! - **Banks** via `/banks`
//! - **Credit cards** via `/credit-cards/*`
//! - **Categories** via `/categories/*`
//! - **Expenses** via `/expenses/*`
//!
//! ## Architecture
//!
//! This crate is the only path consumers use to talk to the backend. One
//! shared [`transport::Transport`] carries the base address, the cookie
//! store holding the `token` session cookie, and the session-expiry hook;
//! every sub-client wraps that transport, so the 401 interception applies
//! to every request uniformly.
//!
//! ## Session expiry
//!
//! Register a callback once during application bootstrap:
//!
//! ```no_run
//! # fn main() -> Result<(), mynance_client::ApiError> {
//! let client = mynance_client::MynanceClient::from_env()?;
//! client.on_unauthorized(|| {
//!     eprintln!("session expired, log in again");
//! });
//! # Ok(())
//! # }
//! ```
//!
//! Any response with status 401 invokes the callback exactly once per
//! response, then the failing call still returns the 401 error to its
//! caller. Registering a new callback replaces the previous one.

pub mod auth;
pub mod banks;
pub mod categories;
pub mod config;
pub mod credit_cards;
pub mod error;
pub mod expenses;
pub(crate) mod retry;
pub mod session;
pub(crate) mod transport;
pub mod types;
pub mod user;

pub use config::ApiConfig;
pub use error::ApiError;
pub use session::{SessionExpiryHook, SessionToken};

use std::sync::Arc;
use std::time::Duration;

use reqwest::cookie::Jar;

use crate::session::SESSION_COOKIE;
use crate::transport::Transport;

/// Top-level MyNance API client. Holds sub-clients for each collection.
#[derive(Debug, Clone)]
pub struct MynanceClient {
    auth: auth::AuthClient,
    user: user::UserClient,
    banks: banks::BankClient,
    credit_cards: credit_cards::CreditCardClient,
    categories: categories::CategoryClient,
    expenses: expenses::ExpenseClient,
    hook: SessionExpiryHook,
}

impl MynanceClient {
    /// Create a new MyNance API client from configuration.
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let hook = SessionExpiryHook::new();

        // Credentials ride in the cookie store; callers never attach them
        // manually. A saved session token is seeded here so a resumed
        // session authenticates from its first request.
        let jar = Arc::new(Jar::default());
        if let Some(token) = &config.session_token {
            jar.add_cookie_str(
                &format!("{SESSION_COOKIE}={}", token.as_str()),
                &config.base_url,
            );
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .cookie_provider(jar)
            .build()
            .map_err(|e| ApiError::Transport {
                endpoint: "client_init".into(),
                source: e,
            })?;

        let transport = Transport::new(http, config.base_url, hook.clone());

        Ok(Self {
            auth: auth::AuthClient::new(transport.clone()),
            user: user::UserClient::new(transport.clone()),
            banks: banks::BankClient::new(transport.clone()),
            credit_cards: credit_cards::CreditCardClient::new(transport.clone()),
            categories: categories::CategoryClient::new(transport.clone()),
            expenses: expenses::ExpenseClient::new(transport),
            hook,
        })
    }

    /// Create a client from environment variables (see [`ApiConfig::from_env`]).
    pub fn from_env() -> Result<Self, ApiError> {
        Self::new(ApiConfig::from_env()?)
    }

    /// Register `handler` as the sole callback invoked when the backend
    /// answers 401. Overwrites any previously registered handler; the last
    /// registration wins. Never fails.
    pub fn on_unauthorized(&self, handler: impl Fn() + Send + Sync + 'static) {
        self.hook.set(handler);
    }

    /// Access the auth (`/auth/*`) client.
    pub fn auth(&self) -> &auth::AuthClient {
        &self.auth
    }

    /// Access the user-profile (`/user/*`) client.
    pub fn user(&self) -> &user::UserClient {
        &self.user
    }

    /// Access the banks (`/banks`) client.
    pub fn banks(&self) -> &banks::BankClient {
        &self.banks
    }

    /// Access the credit-cards (`/credit-cards/*`) client.
    pub fn credit_cards(&self) -> &credit_cards::CreditCardClient {
        &self.credit_cards
    }

    /// Access the categories (`/categories/*`) client.
    pub fn categories(&self) -> &categories::CategoryClient {
        &self.categories
    }

    /// Access the expenses (`/expenses/*`) client.
    pub fn expenses(&self) -> &expenses::ExpenseClient {
        &self.expenses
    }
}
