//! # Primer Common
//!
//! Value objects and the contracts shared by every other crate in the
//! workspace.
//!
//! * **[`values`]**: The value objects themselves (circle, person, user,
//!   vehicle/car, counter, text style).
//! * **[`random`]**: The randomness port injected into [`values::person::Person`].
//! * **[`error`]**: The single error type returned by library code.
//! * **[`config`]**: Run configuration filled in by the CLI.

pub mod config;
pub mod error;
pub mod random;
pub mod values;

pub use error::{ErrorKind, PrimerError};
