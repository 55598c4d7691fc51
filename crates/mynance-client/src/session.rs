//! Session-expiry hook and session-token handling.
//!
//! The backend authenticates every request with the `token` cookie it sets
//! on login. When that session lapses, responses come back 401, and the
//! reaction ("send the user back to the login screen") must not be wired
//! into every call site. [`SessionExpiryHook`] centralizes it: one slot,
//! one callback, replace-on-register, read on every 401.

use std::sync::Arc;

use parking_lot::RwLock;
use serde::Serializer;
use zeroize::Zeroizing;

/// Name of the session cookie the backend issues on login.
pub const SESSION_COOKIE: &str = "token";

type Handler = Arc<dyn Fn() + Send + Sync>;

/// Single-slot registry for the session-expiry callback.
///
/// Invariants:
/// - At most one handler is active at any time.
/// - Registering a new handler silently replaces the previous one; the
///   last registration wins.
/// - The slot starts empty and is never explicitly cleared.
///
/// The hook is cheap to clone; clones share the same slot. Each failing
/// 401 response notifies the handler once; concurrent 401s each notify,
/// with no deduplication, so the callback itself must be idempotent.
#[derive(Clone, Default)]
pub struct SessionExpiryHook {
    slot: Arc<RwLock<Option<Handler>>>,
}

impl SessionExpiryHook {
    /// Create an empty hook.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler`, replacing any previous registration.
    pub fn set(&self, handler: impl Fn() + Send + Sync + 'static) {
        *self.slot.write() = Some(Arc::new(handler));
    }

    /// Whether a handler is currently registered.
    pub fn is_registered(&self) -> bool {
        self.slot.read().is_some()
    }

    /// Invoke the registered handler, if any.
    ///
    /// The slot lock is released before the handler runs, so a handler
    /// may itself call [`SessionExpiryHook::set`] without deadlocking.
    pub(crate) fn notify(&self) {
        let handler = self.slot.read().clone();
        if let Some(handler) = handler {
            handler();
        }
    }
}

impl std::fmt::Debug for SessionExpiryHook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionExpiryHook")
            .field("registered", &self.is_registered())
            .finish()
    }
}

/// An opaque session token, as carried by the `token` cookie.
///
/// Held in a zeroizing buffer and redacted from `Debug` output; the only
/// way to read the value is [`SessionToken::as_str`].
#[derive(Clone)]
pub struct SessionToken(Zeroizing<String>);

impl SessionToken {
    /// Wrap a raw token value.
    pub fn new(value: impl Into<String>) -> Self {
        Self(Zeroizing::new(value.into()))
    }

    /// Access the raw token value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SessionToken([REDACTED])")
    }
}

/// Serialize a zeroizing string field as a plain string.
///
/// `Zeroizing<String>` does not implement `Serialize`; request types that
/// carry passwords use this with `#[serde(serialize_with = ...)]` so the
/// secret still never appears in `Debug` output.
pub(crate) fn serialize_secret<S>(value: &Zeroizing<String>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(value)
}
