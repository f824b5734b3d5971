//! Error types for the interactive numerics helpers.
//!
//! Only the inputs the library validates itself produce an
//! [`InteractError`]. Failures raised by caller-supplied evaluators are never
//! translated: they reach the caller with their own error type.

use thiserror::Error;

/// Errors that can occur while preparing an escape or automaton computation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InteractError {
    /// Rule table is malformed.
    ///
    /// This error occurs when a rule table does not have exactly eight
    /// entries or when one of its entries is not 0 or 1.
    #[error("Invalid rule table: {reason}")]
    InvalidRuleTable {
        /// Description of why the rule table is invalid
        reason: String,
    },

    /// Invalid escape configuration.
    ///
    /// This error occurs when a configuration parameter is out of its
    /// admissible range (e.g., a negative or non-finite escape radius).
    #[error("Invalid configuration for `{parameter}` = {value}: {reason}")]
    InvalidConfiguration {
        /// Name of the invalid parameter
        parameter: String,
        /// Value that was rejected
        value: String,
        /// Description of the configuration error
        reason: String,
    },
}

impl InteractError {
    /// Create an InvalidRuleTable error with a custom reason.
    pub fn invalid_rule_table<S: Into<String>>(reason: S) -> Self {
        Self::InvalidRuleTable {
            reason: reason.into(),
        }
    }

    /// Create an InvalidConfiguration error.
    pub fn invalid_configuration<S1, S2, S3>(parameter: S1, value: S2, reason: S3) -> Self
    where
        S1: Into<String>,
        S2: std::fmt::Display,
        S3: Into<String>,
    {
        Self::InvalidConfiguration {
            parameter: parameter.into(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for operations that can produce an [`InteractError`].
pub type Result<T> = std::result::Result<T, InteractError>;
