//! Escape-time iteration for Julia and Mandelbrot set visualizations.
//!
//! This crate provides the per-pixel loops behind the interactive fractal
//! demos: a complex map supplied by the caller is iterated until the orbit
//! leaves the disk of radius 2 or the iteration budget is spent.

pub mod escape;
pub mod maps;

pub use escape::{
    escape_iterate, escape_iterate_with_parameter, escape_orbit, escape_orbit_with_parameter,
    try_escape_iterate, try_escape_iterate_with_parameter, try_escape_orbit,
    try_escape_orbit_with_parameter, EscapeOutcome,
};
pub use maps::{MandelbrotMap, MultibrotMap, QuadraticMap};
