//! Square finder.
//!
//! The scan runs left to right, top to bottom. A candidate is proposed at the
//! cell where a horizontal run first reaches [`TRIGGER_LENGTH`]; the run is
//! then extended to its full length `n` and the left, right and bottom edges
//! of the `n`-sided square hanging from the run are walked. The interior and
//! the top edge past the run are never inspected.
//!
//! The reported bottom-right corner is `(row + n - 1, trigger column)`, so a
//! candidate whose run continues past the trigger column reports an extent
//! only [`TRIGGER_LENGTH`] columns wide.

use tracing::{debug, trace};

use bitmap_figures_core::{Extent, Grid, Position};

use crate::detection::{FigureFinder, FigureKind};

/// Run length at which a square candidate is evaluated.
pub const TRIGGER_LENGTH: usize = 3;

/// Finder for squares of set cells.
pub struct SquareFinder;

impl SquareFinder {
    /// Create a new square finder.
    pub fn new() -> Self {
        Self
    }

    /// Count consecutive set cells produced by `probe(0..limit)`.
    fn walk(limit: usize, probe: impl Fn(usize) -> bool) -> usize {
        (0..limit).take_while(|&step| probe(step)).count()
    }

    /// Evaluate the candidate triggered at (`row`, `col`) by a run of `count`.
    ///
    /// Returns the candidate extent if all three checked edges are `n` long.
    fn check_candidate(grid: &Grid, row: usize, col: usize, count: usize) -> Option<Extent> {
        let left = col + 1 - count;

        // Set cells continuing the run past the trigger column
        let extension = Self::walk(grid.cols().saturating_sub(col + 1), |step| {
            grid.is_set(row, col + 1 + step)
        });
        let side = count + extension;
        let right = left + side - 1;
        let bottom = row + side - 1;

        let left_len = Self::walk(side, |step| grid.is_set(row + step, left));
        let right_len = Self::walk(side, |step| grid.is_set(row + step, right));
        let bottom_len = Self::walk(side, |step| grid.is_set(bottom, left + step));

        if left_len == side && right_len == side && bottom_len == side {
            Some(Extent::new(Position::new(row, left), Position::new(bottom, col)))
        } else {
            trace!(
                row,
                col,
                side,
                left_len,
                right_len,
                bottom_len,
                "Rejected square candidate"
            );
            None
        }
    }
}

impl Default for SquareFinder {
    fn default() -> Self {
        Self::new()
    }
}

impl FigureFinder for SquareFinder {
    fn name(&self) -> &'static str {
        "square"
    }

    fn kind(&self) -> FigureKind {
        FigureKind::Square
    }

    fn find(&self, grid: &Grid) -> Option<Extent> {
        for row in 0..grid.rows() {
            let mut count = 0;
            for col in 0..grid.cols() {
                if grid.is_set(row, col) {
                    count += 1;
                } else {
                    count = 0;
                }

                if count != TRIGGER_LENGTH {
                    continue;
                }

                // Every candidate triggers at the same run length, so none can
                // beat an accepted one: the first accepted square is the result
                if let Some(extent) = Self::check_candidate(grid, row, col, count) {
                    debug!(%extent, "Accepted square candidate");
                    return Some(extent);
                }
            }
        }

        None
    }
}
