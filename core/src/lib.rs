//! # Primer Core
//!
//! Concrete implementations behind the contracts in `primer-common`, and
//! the small bounded collections and sorting helpers.

pub mod collections;
pub mod random;
