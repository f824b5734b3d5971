//! Escape-loop configuration.
//!
//! The plain escape entry points always use radius 2 and take the iteration
//! budget as an argument. [`EscapeConfig`] is used by the outcome-returning
//! entry points, where a widget layer may want a larger bailout radius for
//! smoother colouring.

use crate::{
    error::{InteractError, Result},
    types::{constants, Scalar},
};
use num_traits::Float;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for escape-time iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EscapeConfig<T> {
    /// An orbit escapes once |z| strictly exceeds this radius.
    pub radius: T,
    /// Maximum number of evaluator applications.
    pub max_iterations: usize,
}

impl<T: Scalar> Default for EscapeConfig<T> {
    fn default() -> Self {
        Self {
            radius: T::ESCAPE_RADIUS,
            max_iterations: constants::DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl<T: Scalar> EscapeConfig<T> {
    /// Creates a configuration with the default radius and the given budget.
    pub fn with_iterations(max_iterations: usize) -> Self {
        Self {
            max_iterations,
            ..Self::default()
        }
    }

    /// Returns a builder initialised with default settings.
    pub fn builder() -> EscapeConfigBuilder<T> {
        EscapeConfigBuilder::new()
    }

    /// Checks that the radius is finite and strictly positive.
    pub fn validate(&self) -> Result<()> {
        if !Float::is_finite(self.radius) {
            return Err(InteractError::invalid_configuration(
                "radius",
                self.radius,
                "must be finite",
            ));
        }
        if self.radius <= T::zero() {
            return Err(InteractError::invalid_configuration(
                "radius",
                self.radius,
                "must be positive",
            ));
        }
        Ok(())
    }
}

/// Builder for creating a custom escape configuration.
#[derive(Debug, Clone)]
pub struct EscapeConfigBuilder<T> {
    config: EscapeConfig<T>,
}

impl<T: Scalar> EscapeConfigBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            config: EscapeConfig::default(),
        }
    }

    /// Set the escape radius.
    pub fn radius(mut self, radius: T) -> Self {
        self.config.radius = radius;
        self
    }

    /// Set the iteration budget.
    pub fn max_iterations(mut self, max_iterations: usize) -> Self {
        self.config.max_iterations = max_iterations;
        self
    }

    /// Build and validate the configuration.
    pub fn build(self) -> Result<EscapeConfig<T>> {
        self.config.validate()?;
        Ok(self.config)
    }
}

impl<T: Scalar> Default for EscapeConfigBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}
