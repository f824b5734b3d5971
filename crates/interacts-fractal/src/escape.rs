//! Escape-time iteration of complex maps.
//!
//! An orbit starts at `z0` and is advanced by a caller-supplied evaluator.
//! After every application the new iterate is tested against the escape
//! radius; the loop stops as soon as `|z|` strictly exceeds it, or when the
//! iteration budget runs out.
//!
//! Two iteration shapes are provided:
//!
//! - **Julia**: `z <- f(z)`, see [`escape_iterate`] and [`escape_orbit`].
//! - **Mandelbrot**: `z <- f(z, c)` with the parameter `c` fixed to the
//!   starting point, see [`escape_iterate_with_parameter`] and
//!   [`escape_orbit_with_parameter`].
//!
//! The `try_*` variants accept fallible evaluators and return the
//! evaluator's own error unchanged, aborting the orbit at the failing step.
//!
//! # Example
//!
//! ```
//! use interacts_fractal::escape::escape_iterate_with_parameter;
//! use num_complex::Complex;
//!
//! let f = |z: Complex<f64>, c: Complex<f64>| z * z + c;
//! let z = escape_iterate_with_parameter(&f, Complex::new(1.0, 1.0), 3);
//! assert_eq!(z, Complex::new(1.0, 3.0));
//! ```

use interacts_core::{
    config::EscapeConfig,
    evaluator::{BinaryMap, TryBinaryMap, TryUnaryMap, UnaryMap},
    types::{Complex, Scalar},
};
use std::convert::Infallible;
use tracing::trace;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Final state of an escape-time orbit.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EscapeOutcome<T> {
    /// Last iterate computed (or the starting point when no step was taken).
    pub value: Complex<T>,
    /// Number of evaluator applications performed.
    pub steps: usize,
    /// Whether `|value|` exceeded the escape radius.
    pub escaped: bool,
}

impl<T: Scalar> EscapeOutcome<T> {
    /// Returns `true` if the orbit left the escape disk.
    pub fn is_escaped(&self) -> bool {
        self.escaped
    }

    /// Returns `true` if the orbit stayed inside the disk for the whole budget.
    pub fn is_bounded(&self) -> bool {
        !self.escaped
    }

    /// Number of steps it took to escape, or `None` for a bounded candidate.
    pub fn escape_time(&self) -> Option<usize> {
        self.escaped.then_some(self.steps)
    }
}

/// Shared loop for every entry point.
///
/// Runs at most `config.max_iterations` steps and stops right after the
/// first iterate with `|z| > radius`.
#[inline]
fn run_orbit<T, E, F>(
    z0: Complex<T>,
    config: &EscapeConfig<T>,
    mut step: F,
) -> Result<EscapeOutcome<T>, E>
where
    T: Scalar,
    F: FnMut(Complex<T>) -> Result<Complex<T>, E>,
{
    let mut z = z0;

    for i in 0..config.max_iterations {
        z = step(z)?;
        if z.norm() > config.radius {
            trace!(steps = i + 1, "orbit escaped");
            return Ok(EscapeOutcome {
                value: z,
                steps: i + 1,
                escaped: true,
            });
        }
    }

    Ok(EscapeOutcome {
        value: z,
        steps: config.max_iterations,
        escaped: false,
    })
}

fn into_ok<T>(result: Result<T, Infallible>) -> T {
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}

/// Iterates `z <- map(z)` from `z0` and reports how the orbit ended.
///
/// The configuration is used as given; build it through
/// [`EscapeConfig::builder`] to have the radius validated.
pub fn escape_orbit<T, M>(map: &M, z0: Complex<T>, config: &EscapeConfig<T>) -> EscapeOutcome<T>
where
    T: Scalar,
    M: UnaryMap<T> + ?Sized,
{
    into_ok(run_orbit(z0, config, |z| Ok(UnaryMap::apply(map, z))))
}

/// Iterates `z <- map(z, c)` with `c = z0` and reports how the orbit ended.
pub fn escape_orbit_with_parameter<T, M>(
    map: &M,
    z0: Complex<T>,
    config: &EscapeConfig<T>,
) -> EscapeOutcome<T>
where
    T: Scalar,
    M: BinaryMap<T> + ?Sized,
{
    let c = z0;
    into_ok(run_orbit(z0, config, |z| Ok(BinaryMap::apply(map, z, c))))
}

/// Fallible counterpart of [`escape_orbit`].
///
/// The first error returned by the evaluator ends the orbit and is passed
/// through as-is.
pub fn try_escape_orbit<T, M>(
    map: &M,
    z0: Complex<T>,
    config: &EscapeConfig<T>,
) -> Result<EscapeOutcome<T>, M::Error>
where
    T: Scalar,
    M: TryUnaryMap<T> + ?Sized,
{
    run_orbit(z0, config, |z| TryUnaryMap::try_apply(map, z))
}

/// Fallible counterpart of [`escape_orbit_with_parameter`].
pub fn try_escape_orbit_with_parameter<T, M>(
    map: &M,
    z0: Complex<T>,
    config: &EscapeConfig<T>,
) -> Result<EscapeOutcome<T>, M::Error>
where
    T: Scalar,
    M: TryBinaryMap<T> + ?Sized,
{
    let c = z0;
    run_orbit(z0, config, |z| TryBinaryMap::try_apply(map, z, c))
}

/// Iterates a unary map until `|z| > 2` or `iterations` steps have run.
///
/// Returns the escaping iterate, or the last iterate when the orbit stayed
/// bounded. With `iterations == 0` the starting point is returned unchanged.
/// A panic inside `map` unwinds through this function untouched.
pub fn escape_iterate<T, M>(map: &M, z0: Complex<T>, iterations: usize) -> Complex<T>
where
    T: Scalar,
    M: UnaryMap<T> + ?Sized,
{
    escape_orbit(map, z0, &EscapeConfig::with_iterations(iterations)).value
}

/// Iterates `z <- map(z, z0)` until `|z| > 2` or `iterations` steps have run.
///
/// The second argument of `map` is fixed to the starting point for every
/// step, and the first call also receives `z0` as the running iterate.
pub fn escape_iterate_with_parameter<T, M>(map: &M, z0: Complex<T>, iterations: usize) -> Complex<T>
where
    T: Scalar,
    M: BinaryMap<T> + ?Sized,
{
    escape_orbit_with_parameter(map, z0, &EscapeConfig::with_iterations(iterations)).value
}

/// Fallible counterpart of [`escape_iterate`].
pub fn try_escape_iterate<T, M>(
    map: &M,
    z0: Complex<T>,
    iterations: usize,
) -> Result<Complex<T>, M::Error>
where
    T: Scalar,
    M: TryUnaryMap<T> + ?Sized,
{
    try_escape_orbit(map, z0, &EscapeConfig::with_iterations(iterations)).map(|o| o.value)
}

/// Fallible counterpart of [`escape_iterate_with_parameter`].
pub fn try_escape_iterate_with_parameter<T, M>(
    map: &M,
    z0: Complex<T>,
    iterations: usize,
) -> Result<Complex<T>, M::Error>
where
    T: Scalar,
    M: TryBinaryMap<T> + ?Sized,
{
    try_escape_orbit_with_parameter(map, z0, &EscapeConfig::with_iterations(iterations))
        .map(|o| o.value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use interacts_core::test_utils::{assert_complex_eq, CountingMap};
    use std::cell::Cell;

    #[test]
    fn test_zero_iterations_returns_start() {
        let z0 = Complex::new(5.0, -7.0);
        let f = |z: Complex<f64>| z * z;
        let g = |z: Complex<f64>, c: Complex<f64>| z * z + c;
        assert_eq!(escape_iterate(&f, z0, 0), z0);
        assert_eq!(escape_iterate_with_parameter(&g, z0, 0), z0);
    }

    #[test]
    fn test_mandelbrot_regression() {
        let f = |z: Complex<f64>, c: Complex<f64>| z * z + c;
        let z = escape_iterate_with_parameter(&f, Complex::new(1.0, 1.0), 3);
        assert_complex_eq(z, Complex::new(1.0, 3.0), 1e-12);
    }

    #[test]
    fn test_escape_stops_immediately() {
        // z -> 2z from 1 reaches 4 on the second step
        let map = CountingMap::new(|z: Complex<f64>| z * 2.0);
        let outcome = escape_orbit(&map, Complex::new(1.0, 0.0), &EscapeConfig::with_iterations(50));
        assert!(outcome.is_escaped());
        assert_eq!(outcome.steps, 2);
        assert_eq!(outcome.escape_time(), Some(2));
        assert_eq!(map.calls(), 2);
        assert_relative_eq!(outcome.value.re, 4.0);
    }

    #[test]
    fn test_radius_is_strict() {
        // |z| == 2 exactly must not count as escaped
        let map = CountingMap::new(|_z: Complex<f64>| Complex::new(0.0, 2.0));
        let outcome = escape_orbit(&map, Complex::new(0.0, 0.0), &EscapeConfig::with_iterations(4));
        assert!(outcome.is_bounded());
        assert_eq!(outcome.steps, 4);
        assert_eq!(outcome.escape_time(), None);
        assert_eq!(map.calls(), 4);
    }

    #[test]
    fn test_modulus_on_circle_is_bounded() {
        // |z| rounds to exactly 2 while |z|^2 rounds above 4
        let on_circle = Complex::new(1.999_999_960_000_000_2, 0.000_399_999_997_333_333_3);
        assert_eq!(on_circle.norm(), 2.0);
        assert!(on_circle.norm_sqr() > 4.0);

        let map = |_z: Complex<f64>| on_circle;
        let outcome = escape_orbit(&map, Complex::new(0.0, 0.0), &EscapeConfig::with_iterations(3));
        assert!(outcome.is_bounded());
        assert_eq!(outcome.steps, 3);
        assert_eq!(outcome.value, on_circle);
        assert_eq!(escape_iterate(&map, Complex::new(0.0, 0.0), 3), on_circle);
    }

    #[test]
    fn test_bounded_orbit_runs_full_budget() {
        // c = -1 is a period-2 cycle 0 -> -1 -> 0
        let map = CountingMap::new(|z: Complex<f64>, c: Complex<f64>| z * z + c);
        let outcome =
            escape_orbit_with_parameter(&map, Complex::new(-1.0, 0.0), &EscapeConfig::with_iterations(9));
        assert!(outcome.is_bounded());
        assert_eq!(map.calls(), 9);
        // -1 -> 0 -> -1 -> ... after an odd number of steps
        assert_complex_eq(outcome.value, Complex::new(0.0, 0.0), 1e-12);
    }

    #[test]
    fn test_parameter_is_fixed_to_start() {
        let seen = Cell::new(0usize);
        let z0 = Complex::new(0.25, -0.5);
        let f = |z: Complex<f64>, c: Complex<f64>| {
            assert_eq!(c, z0);
            seen.set(seen.get() + 1);
            z * 0.5
        };
        let z = escape_iterate_with_parameter(&f, z0, 3);
        assert_eq!(seen.get(), 3);
        assert_complex_eq(z, z0 * 0.125, 1e-15);
    }

    #[test]
    fn test_custom_radius() {
        let config = EscapeConfig::builder().radius(100.0).max_iterations(50).build().unwrap();
        let f = |z: Complex<f64>| z * 3.0;
        let outcome = escape_orbit(&f, Complex::new(1.0, 0.0), &config);
        // 3^5 = 243 is the first power of three above 100
        assert_eq!(outcome.escape_time(), Some(5));
        assert_relative_eq!(outcome.value.re, 243.0);
    }

    #[test]
    fn test_try_variants_propagate_error() {
        #[derive(Debug, PartialEq)]
        struct DivisionByZero;

        let calls = Cell::new(0usize);
        let f = |z: Complex<f64>| {
            calls.set(calls.get() + 1);
            if z.norm_sqr() == 0.0 {
                Err(DivisionByZero)
            } else {
                Ok(z - Complex::new(0.5, 0.0))
            }
        };

        // 1.0 -> 0.5 -> 0.0 -> error on the third call
        let result = try_escape_iterate(&f, Complex::new(1.0, 0.0), 10);
        assert_eq!(result, Err(DivisionByZero));
        assert_eq!(calls.get(), 3);

        let g = |z: Complex<f64>, c: Complex<f64>| -> Result<Complex<f64>, DivisionByZero> { Ok(z * z + c) };
        let z = try_escape_iterate_with_parameter(&g, Complex::new(1.0, 1.0), 3);
        assert_eq!(z, Ok(Complex::new(1.0, 3.0)));
    }

    #[test]
    fn test_try_orbit_success_matches_infallible() {
        let f = |z: Complex<f64>| z * z + Complex::new(-0.8, 0.156);
        let g = |z: Complex<f64>| -> Result<Complex<f64>, ()> { Ok(z * z + Complex::new(-0.8, 0.156)) };
        let config = EscapeConfig::with_iterations(200);
        let z0 = Complex::new(0.1, 0.2);
        assert_eq!(try_escape_orbit(&g, z0, &config), Ok(escape_orbit(&f, z0, &config)));
    }

    #[test]
    fn test_single_precision() {
        let f = |z: Complex<f32>, c: Complex<f32>| z * z + c;
        let outcome = escape_orbit_with_parameter(&f, Complex::new(0.5f32, 0.5), &EscapeConfig::default());
        assert!(outcome.is_escaped());
        assert!(outcome.value.norm() > 2.0);
    }
}
