//! Elementary cellular automaton evolution grids.
//!
//! This crate builds the space-time diagram shown by the interactive
//! cellular automaton demo: a single live cell evolved under one of the 256
//! elementary rules, one row per generation.

pub mod rule;
pub mod triangle;

pub use rule::{neighbourhood_code, presets, RuleTable, RULE_TABLE_LEN};
pub use triangle::{
    automaton_triangle, automaton_triangle_with, live_cells, row_to_string, AutomatonGrid,
};
