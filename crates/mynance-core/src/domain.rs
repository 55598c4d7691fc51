//! # Validated Domain Primitives
//!
//! Small value types that validate their format at construction time.
//! Once constructed, a [`DueDay`] or [`HexColor`] is guaranteed well-formed,
//! so downstream code never re-checks.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Day of the month a credit card bill falls due.
///
/// The backend stores this as a plain integer between 1 and 31; the newtype
/// enforces that range at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DueDay(u8);

impl DueDay {
    /// Create a due day, validating the 1..=31 range.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::DueDayOutOfRange`] for 0 or anything
    /// past 31.
    pub fn new(day: u8) -> Result<Self, ValidationError> {
        if (1..=31).contains(&day) {
            Ok(Self(day))
        } else {
            Err(ValidationError::DueDayOutOfRange(day))
        }
    }

    /// Access the underlying day number.
    pub fn as_u8(&self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for DueDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A category display color in `#rrggbb` form.
///
/// Stored lowercase. The leading `#` is required; shorthand (`#abc`) and
/// alpha channels (`#rrggbbaa`) are rejected; the backend and the color
/// picker both speak six-digit hex only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HexColor(String);

impl HexColor {
    /// Create a color from a `#rrggbb` string, validating format.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidHexColor`] if the value is not a
    /// `#` followed by exactly six hex digits.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = value.into();
        let Some(digits) = raw.strip_prefix('#') else {
            return Err(ValidationError::InvalidHexColor(raw));
        };
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ValidationError::InvalidHexColor(raw));
        }
        Ok(Self(raw.to_ascii_lowercase()))
    }

    /// Access the canonical `#rrggbb` string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for HexColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
