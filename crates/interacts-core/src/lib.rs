//! Core traits and types for the interactive numerics helpers.
//!
//! This crate provides the shared vocabulary used by the escape-time and
//! cellular automaton crates: the scalar bound, the complex iterate type,
//! the evaluator traits that stand in for compiled formulas, the escape
//! configuration and the error type.
//!
//! # Modules
//!
//! - [`config`]: Escape radius and iteration budget configuration
//! - [`error`]: Error types for rule tables and configuration
//! - [`evaluator`]: Unary and binary complex map traits
//! - [`types`]: Scalar trait, complex alias and numerical constants

pub mod config;
pub mod error;
pub mod evaluator;
pub mod types;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

// Re-export commonly used items at the crate root
pub use error::{InteractError, Result};

/// Prelude module for convenient imports.
///
/// # Example
/// ```
/// use interacts_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::{EscapeConfig, EscapeConfigBuilder};
    pub use crate::error::{InteractError, Result};
    pub use crate::evaluator::{BinaryMap, TryBinaryMap, TryUnaryMap, UnaryMap};
    pub use crate::types::{constants, Complex, Scalar};
}
