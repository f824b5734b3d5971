//! Built-in polynomial maps.
//!
//! These cover the formulas the demos start from before a user edits them,
//! so the escape loops can be driven without an expression compiler.

use interacts_core::{
    evaluator::{BinaryMap, UnaryMap},
    types::{Complex, Scalar},
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The quadratic Julia map `z -> z^2 + c` for a fixed `c`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct QuadraticMap<T> {
    /// Additive constant
    pub c: Complex<T>,
}

impl<T: Scalar> QuadraticMap<T> {
    /// Creates the map `z -> z^2 + c`.
    pub fn new(c: Complex<T>) -> Self {
        Self { c }
    }
}

impl<T: Scalar> UnaryMap<T> for QuadraticMap<T> {
    #[inline]
    fn apply(&self, z: Complex<T>) -> Complex<T> {
        z * z + self.c
    }
}

/// The Mandelbrot map `(z, c) -> z^2 + c`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MandelbrotMap;

impl<T: Scalar> BinaryMap<T> for MandelbrotMap {
    #[inline]
    fn apply(&self, z: Complex<T>, c: Complex<T>) -> Complex<T> {
        z * z + c
    }
}

/// The multibrot map `(z, c) -> z^d + c` for a non-negative integer degree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MultibrotMap {
    /// Exponent `d`
    pub degree: u32,
}

impl MultibrotMap {
    /// Creates the map `(z, c) -> z^degree + c`.
    pub fn new(degree: u32) -> Self {
        Self { degree }
    }
}

impl<T: Scalar> BinaryMap<T> for MultibrotMap {
    #[inline]
    fn apply(&self, z: Complex<T>, c: Complex<T>) -> Complex<T> {
        z.powu(self.degree) + c
    }
}
