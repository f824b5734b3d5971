//! Space-time triangle of an elementary cellular automaton.
//!
//! Starting from a single live cell, each generation of an elementary
//! automaton can only spread one cell further left and right. Row `j` of the
//! triangle therefore only needs to be computed on columns `N-j ..= N+j`;
//! everything outside stays at the zero fill of the grid.
//!
//! # Example
//!
//! ```
//! use interacts_automata::triangle::{automaton_triangle, row_to_string};
//!
//! let grid = automaton_triangle(&[0, 1, 1, 1, 1, 0, 0, 0], 4).unwrap();
//! assert_eq!(grid.shape(), (4, 9));
//! assert_eq!(row_to_string(&grid, 0), "....#....");
//! assert_eq!(row_to_string(&grid, 1), "...###...");
//! ```

use crate::rule::{neighbourhood_code, RuleTable};
use interacts_core::error::Result;
use nalgebra::DMatrix;
use tracing::debug;

/// Evolution grid: one row per generation, `2N+1` columns.
pub type AutomatonGrid = DMatrix<u8>;

/// Builds the `N x (2N+1)` evolution triangle for a validated rule table.
///
/// Row 0 holds a single live cell at column `N`. For `j >= 1`, cell
/// `(j, k)` with `N-j <= k <= N+j` is `rule[4*M[j-1,k-1] + 2*M[j-1,k] + M[j-1,k+1]]`.
/// Cells outside the triangle remain 0. With `n == 0` the result is an
/// empty `0 x 1` grid and no seed is written.
pub fn automaton_triangle_with(rule: &RuleTable, n: usize) -> AutomatonGrid {
    let mut grid = AutomatonGrid::zeros(n, 2 * n + 1);
    if n == 0 {
        return grid;
    }

    grid[(0, n)] = 1;
    for j in 1..n {
        for k in (n - j)..=(n + j) {
            let code = neighbourhood_code(
                grid[(j - 1, k - 1)],
                grid[(j - 1, k)],
                grid[(j - 1, k + 1)],
            );
            grid[(j, k)] = rule.next_state(code);
        }
    }

    debug!(rule = %rule, rows = n, columns = 2 * n + 1, "automaton triangle built");
    grid
}

/// Builds the evolution triangle from a raw rule table.
///
/// # Errors
///
/// Returns [`InteractError::InvalidRuleTable`](interacts_core::InteractError)
/// if `rule` does not have exactly eight entries or contains a value other
/// than 0 or 1.
pub fn automaton_triangle(rule: &[u8], n: usize) -> Result<AutomatonGrid> {
    let rule = RuleTable::try_from(rule)?;
    Ok(automaton_triangle_with(&rule, n))
}

/// Number of live cells in generation `row`.
pub fn live_cells(grid: &AutomatonGrid, row: usize) -> usize {
    grid.row(row).iter().filter(|&&cell| cell != 0).count()
}

/// Renders generation `row` as `#` for live and `.` for dead cells.
pub fn row_to_string(grid: &AutomatonGrid, row: usize) -> String {
    grid.row(row)
        .iter()
        .map(|&cell| if cell != 0 { '#' } else { '.' })
        .collect()
}
