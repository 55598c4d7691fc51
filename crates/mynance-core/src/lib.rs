//! # mynance-core -- Foundational types for the MyNance client stack
//!
//! Identifier newtypes and validated domain primitives shared by the API
//! client and the CLI. Keeping these in a dependency-free leaf crate means
//! every consumer agrees on what a [`CardId`] or a [`DueDay`] is without
//! pulling in HTTP machinery.

pub mod domain;
pub mod error;
pub mod identity;

pub use domain::{DueDay, HexColor};
pub use error::ValidationError;
pub use identity::{CardId, CategoryId, ExpenseId, UserId};
