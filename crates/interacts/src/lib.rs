//! Numerical helpers for interactive mathematics demos.
//!
//! The widgets of an interactive demo call these routines once per frame
//! (or once per pixel) with values taken from their sliders:
//!
//! - [`escape_iterate`]: Julia-style escape-time iteration of `z <- f(z)`
//! - [`escape_iterate_with_parameter`]: Mandelbrot-style iteration of
//!   `z <- f(z, c)` with `c` fixed to the starting point
//! - [`automaton_triangle`]: evolution grid of an elementary cellular automaton
//!
//! # Example
//!
//! ```
//! use interacts::prelude::*;
//!
//! let f = |z: Complex<f64>, c: Complex<f64>| z * z + c;
//! assert_eq!(escape_iterate_with_parameter(&f, Complex::new(1.0, 1.0), 3), Complex::new(1.0, 3.0));
//!
//! let grid = automaton_triangle(&[1, 0, 1, 0, 0, 1, 1, 0], 3)?;
//! assert_eq!(grid.shape(), (3, 7));
//! # Ok::<(), InteractError>(())
//! ```

pub use interacts_automata as automata;
pub use interacts_core::{config, error, evaluator, types};
pub use interacts_fractal as fractal;

pub use interacts_automata::{automaton_triangle, automaton_triangle_with, AutomatonGrid, RuleTable};
pub use interacts_core::{InteractError, Result};
pub use interacts_fractal::{
    escape_iterate, escape_iterate_with_parameter, try_escape_iterate,
    try_escape_iterate_with_parameter,
};

// Re-export key dependencies
pub use nalgebra;
pub use num_complex;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use interacts_automata::{
        automaton_triangle, automaton_triangle_with, live_cells, neighbourhood_code, presets,
        row_to_string, AutomatonGrid, RuleTable,
    };
    pub use interacts_core::prelude::*;
    pub use interacts_fractal::{
        escape_iterate, escape_iterate_with_parameter, escape_orbit, escape_orbit_with_parameter,
        try_escape_iterate, try_escape_iterate_with_parameter, try_escape_orbit,
        try_escape_orbit_with_parameter, EscapeOutcome, MandelbrotMap, MultibrotMap,
        QuadraticMap,
    };
}
