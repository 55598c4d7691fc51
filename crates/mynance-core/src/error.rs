//! # Validation Errors
//!
//! Structured errors for domain-primitive construction, built with
//! `thiserror`. No `Box<dyn Error>`, no `.unwrap()` outside tests.

use thiserror::Error;

/// Domain primitive validation failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A due day outside the 1..=31 range.
    #[error("due day must be between 1 and 31, got {0}")]
    DueDayOutOfRange(u8),

    /// A color string that is not `#` plus six hex digits.
    #[error("invalid hex color {0:?}; expected \"#rrggbb\"")]
    InvalidHexColor(String),
}
