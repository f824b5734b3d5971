//! Type definitions and aliases for escape-time iteration.
//!
//! This module provides the scalar trait used for complex components,
//! the complex iterate alias and the defaults shared by the escape loops.

use num_traits::Float;
use std::fmt::{Debug, Display};

/// Complex iterate value with components of type `T`.
pub type Complex<T> = num_complex::Complex<T>;

/// Trait for scalar types used as complex components (f32 or f64).
///
/// This trait combines all the numeric traits the escape loops need.
pub trait Scalar: Float + Display + Debug + Default + Copy + Send + Sync + 'static {
    /// Radius `|z|` must strictly exceed for an orbit to count as escaped.
    const ESCAPE_RADIUS: Self;
}

impl Scalar for f32 {
    const ESCAPE_RADIUS: Self = 2.0;
}

impl Scalar for f64 {
    const ESCAPE_RADIUS: Self = 2.0;
}

/// Defaults shared by the escape loops.
pub mod constants {
    /// Default iteration budget used by [`EscapeConfig::default`](crate::config::EscapeConfig).
    pub const DEFAULT_MAX_ITERATIONS: usize = 100;
}
