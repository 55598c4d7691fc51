//! # Shared Identifier Types
//!
//! Re-exports identifier newtypes from [`mynance_core`] so that downstream
//! consumers of `mynance-client` can use the same typed identifiers that
//! the rest of the stack uses.

pub use mynance_core::CardId;
pub use mynance_core::CategoryId;
pub use mynance_core::ExpenseId;
pub use mynance_core::UserId;
