//! Line finders for the longest run of set cells along a row or column.

use tracing::debug;

use bitmap_figures_core::{Extent, Grid};

use crate::detection::{FigureFinder, FigureKind};

/// Longest run bookkeeping shared by both orientations.
///
/// `max` starts at zero and only a strictly longer run replaces the current
/// best, so the first run to reach a length wins.
#[derive(Debug, Default)]
struct LongestRun {
    max: usize,
    best: Option<Extent>,
}

impl LongestRun {
    /// Offer the run of `count` cells ending at this scan step.
    fn offer(&mut self, count: usize, extent: impl FnOnce(usize) -> Extent) {
        if count > self.max {
            self.max = count;
            self.best = Some(extent(count));
        }
    }
}

/// Finder for the longest horizontal line (scans rows, then columns).
pub struct HorizontalLineFinder;

impl HorizontalLineFinder {
    /// Create a new horizontal line finder.
    pub fn new() -> Self {
        Self
    }
}

impl Default for HorizontalLineFinder {
    fn default() -> Self {
        Self::new()
    }
}

impl FigureFinder for HorizontalLineFinder {
    fn name(&self) -> &'static str {
        "hline"
    }

    fn kind(&self) -> FigureKind {
        FigureKind::Hline
    }

    fn find(&self, grid: &Grid) -> Option<Extent> {
        let mut longest = LongestRun::default();

        for row in 0..grid.rows() {
            let mut count = 0;
            for col in 0..grid.cols() {
                if grid.is_set(row, col) {
                    count += 1;
                } else {
                    count = 0;
                }

                longest.offer(count, |len| Extent::horizontal(row, col + 1 - len, col));
            }
        }

        if let Some(extent) = longest.best {
            debug!(length = longest.max, %extent, "Longest horizontal line");
        }
        longest.best
    }
}

/// Finder for the longest vertical line (scans columns, then rows).
pub struct VerticalLineFinder;

impl VerticalLineFinder {
    /// Create a new vertical line finder.
    pub fn new() -> Self {
        Self
    }
}

impl Default for VerticalLineFinder {
    fn default() -> Self {
        Self::new()
    }
}

impl FigureFinder for VerticalLineFinder {
    fn name(&self) -> &'static str {
        "vline"
    }

    fn kind(&self) -> FigureKind {
        FigureKind::Vline
    }

    fn find(&self, grid: &Grid) -> Option<Extent> {
        let mut longest = LongestRun::default();

        for col in 0..grid.cols() {
            let mut count = 0;
            for row in 0..grid.rows() {
                if grid.is_set(row, col) {
                    count += 1;
                } else {
                    count = 0;
                }

                longest.offer(count, |len| Extent::vertical(col, row + 1 - len, row));
            }
        }

        if let Some(extent) = longest.best {
            debug!(length = longest.max, %extent, "Longest vertical line");
        }
        longest.best
    }
}
