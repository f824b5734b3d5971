//! Shared test utilities for the escape and automaton crates.

#![cfg(any(test, feature = "test-utils"))]

use crate::{
    evaluator::{BinaryMap, UnaryMap},
    types::{Complex, Scalar},
};
use num_traits::Float;
use std::cell::Cell;

/// Wrapper that counts how many times an evaluator was applied.
#[derive(Debug)]
pub struct CountingMap<M> {
    /// The underlying evaluator
    pub inner: M,
    calls: Cell<usize>,
}

impl<M> CountingMap<M> {
    /// Creates a new counting wrapper around an evaluator.
    pub fn new(inner: M) -> Self {
        Self {
            inner,
            calls: Cell::new(0),
        }
    }

    /// Number of applications since creation or the last reset.
    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    /// Resets the counter to zero.
    pub fn reset(&self) {
        self.calls.set(0);
    }

    fn bump(&self) {
        self.calls.set(self.calls.get() + 1);
    }
}

impl<T: Scalar, M: UnaryMap<T>> UnaryMap<T> for CountingMap<M> {
    fn apply(&self, z: Complex<T>) -> Complex<T> {
        self.bump();
        self.inner.apply(z)
    }
}

impl<T: Scalar, M: BinaryMap<T>> BinaryMap<T> for CountingMap<M> {
    fn apply(&self, z: Complex<T>, c: Complex<T>) -> Complex<T> {
        self.bump();
        self.inner.apply(z, c)
    }
}

/// Checks two complex numbers component-wise within an absolute tolerance.
pub fn complex_approx_eq<T: Scalar>(a: Complex<T>, b: Complex<T>, tol: T) -> bool {
    Float::abs(a.re - b.re) <= tol && Float::abs(a.im - b.im) <= tol
}

/// Asserts that two complex numbers agree within `tol`.
#[track_caller]
pub fn assert_complex_eq<T: Scalar>(a: Complex<T>, b: Complex<T>, tol: T) {
    assert!(
        complex_approx_eq(a, b, tol),
        "complex values differ: {a} vs {b} (tolerance {tol})"
    );
}
