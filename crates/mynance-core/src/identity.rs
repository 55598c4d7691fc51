//! # Identity Newtypes
//!
//! Domain-primitive newtypes for the integer identifiers the MyNance
//! backend hands out. Each identifier is a distinct type; you cannot pass
//! a [`CardId`] where a [`CategoryId`] is expected.
//!
//! The backend allocates ids as positive integers; these newtypes are
//! always valid by construction and serialize transparently as the bare
//! number, matching the wire format.

use serde::{Deserialize, Serialize};

/// A unique identifier for a registered user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    /// Wrap a raw id received from the backend.
    pub fn from_raw(id: i64) -> Self {
        Self(id)
    }

    /// Access the underlying integer.
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A unique identifier for a credit card record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(i64);

impl CardId {
    /// Wrap a raw id received from the backend.
    pub fn from_raw(id: i64) -> Self {
        Self(id)
    }

    /// Access the underlying integer.
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A unique identifier for a spending category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(i64);

impl CategoryId {
    /// Wrap a raw id received from the backend.
    pub fn from_raw(id: i64) -> Self {
        Self(id)
    }

    /// Access the underlying integer.
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A unique identifier for an expense record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(i64);

impl ExpenseId {
    /// Wrap a raw id received from the backend.
    pub fn from_raw(id: i64) -> Self {
        Self(id)
    }

    /// Access the underlying integer.
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
