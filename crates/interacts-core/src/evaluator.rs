//! Evaluator interface for escape-time iteration.
//!
//! An evaluator is the fast callable produced from a user formula by an
//! external expression compiler. The escape loops treat it as an opaque
//! black box: they only ever call it, never inspect it.
//!
//! Every closure of the right shape is an evaluator:
//!
//! ```
//! use interacts_core::prelude::*;
//!
//! let f = |z: Complex<f64>| z * z + Complex::new(-0.4, 0.6);
//! let w = UnaryMap::apply(&f, Complex::new(0.0, 0.0));
//! assert_eq!(w, Complex::new(-0.4, 0.6));
//! ```
//!
//! The `Try*` traits cover evaluators that report failures through
//! `Result`. Their error type is chosen by the evaluator, and the escape
//! loops hand it back to the caller untouched.

use crate::types::{Complex, Scalar};

/// A map from one complex value to another (Julia-style iteration).
pub trait UnaryMap<T: Scalar> {
    /// Evaluates the map at `z`.
    fn apply(&self, z: Complex<T>) -> Complex<T>;
}

/// A map of the running iterate and a fixed parameter (Mandelbrot-style iteration).
pub trait BinaryMap<T: Scalar> {
    /// Evaluates the map at iterate `z` with parameter `c`.
    fn apply(&self, z: Complex<T>, c: Complex<T>) -> Complex<T>;
}

/// A fallible unary complex map.
pub trait TryUnaryMap<T: Scalar> {
    /// Error reported by the evaluator.
    type Error;

    /// Evaluates the map at `z`.
    fn try_apply(&self, z: Complex<T>) -> Result<Complex<T>, Self::Error>;
}

/// A fallible binary complex map.
pub trait TryBinaryMap<T: Scalar> {
    /// Error reported by the evaluator.
    type Error;

    /// Evaluates the map at iterate `z` with parameter `c`.
    fn try_apply(&self, z: Complex<T>, c: Complex<T>) -> Result<Complex<T>, Self::Error>;
}

impl<T, F> UnaryMap<T> for F
where
    T: Scalar,
    F: Fn(Complex<T>) -> Complex<T>,
{
    #[inline]
    fn apply(&self, z: Complex<T>) -> Complex<T> {
        self(z)
    }
}

impl<T, F> BinaryMap<T> for F
where
    T: Scalar,
    F: Fn(Complex<T>, Complex<T>) -> Complex<T>,
{
    #[inline]
    fn apply(&self, z: Complex<T>, c: Complex<T>) -> Complex<T> {
        self(z, c)
    }
}

impl<T, E, F> TryUnaryMap<T> for F
where
    T: Scalar,
    F: Fn(Complex<T>) -> Result<Complex<T>, E>,
{
    type Error = E;

    #[inline]
    fn try_apply(&self, z: Complex<T>) -> Result<Complex<T>, E> {
        self(z)
    }
}

impl<T, E, F> TryBinaryMap<T> for F
where
    T: Scalar,
    F: Fn(Complex<T>, Complex<T>) -> Result<Complex<T>, E>,
{
    type Error = E;

    #[inline]
    fn try_apply(&self, z: Complex<T>, c: Complex<T>) -> Result<Complex<T>, E> {
        self(z, c)
    }
}
