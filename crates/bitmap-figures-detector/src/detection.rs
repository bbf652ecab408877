//! Core detection types and traits.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use bitmap_figures_core::{Extent, Grid, Position};

use crate::detectors::{HorizontalLineFinder, SquareFinder, VerticalLineFinder};

/// Kind of figure to look for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FigureKind {
    /// Longest run of set cells within a row
    Hline,
    /// Longest run of set cells within a column
    Vline,
    /// Square whose left, right and bottom edges are set
    Square,
}

impl FigureKind {
    /// All figure kinds, in command order.
    pub const ALL: [FigureKind; 3] = [FigureKind::Hline, FigureKind::Vline, FigureKind::Square];

    /// Short name used on the command line and in reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            FigureKind::Hline => "hline",
            FigureKind::Vline => "vline",
            FigureKind::Square => "square",
        }
    }
}

impl fmt::Display for FigureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognized figure name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unrecognized figure: {0}")]
pub struct UnknownFigure(pub String);

impl FromStr for FigureKind {
    type Err = UnknownFigure;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FigureKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownFigure(s.to_string()))
    }
}

/// A located figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectedFigure {
    /// What was searched for
    pub figure: FigureKind,
    /// First corner
    pub start: Position,
    /// Last corner
    pub end: Position,
}

impl DetectedFigure {
    /// Pair a figure kind with the extent a finder returned.
    pub fn new(figure: FigureKind, extent: Extent) -> Self {
        Self {
            figure,
            start: extent.start,
            end: extent.end,
        }
    }

    /// Region covered by the figure.
    pub fn extent(&self) -> Extent {
        Extent::new(self.start, self.end)
    }
}

/// Trait for figure finders.
///
/// A finder is a pure function of the grid: it reads cells, never mutates
/// them, and returns `None` when the bitmap holds no qualifying figure.
pub trait FigureFinder: Send + Sync {
    /// Finder name for debugging/logging.
    fn name(&self) -> &'static str;

    /// Which figure this finder locates.
    fn kind(&self) -> FigureKind;

    /// Search the grid.
    fn find(&self, grid: &Grid) -> Option<Extent>;

    /// Search the grid and tag the result with the figure kind.
    fn detect(&self, grid: &Grid) -> Option<DetectedFigure> {
        self.find(grid)
            .map(|extent| DetectedFigure::new(self.kind(), extent))
    }
}

/// Finder for the given figure kind.
pub fn finder_for(kind: FigureKind) -> Box<dyn FigureFinder> {
    match kind {
        FigureKind::Hline => Box::new(HorizontalLineFinder::new()),
        FigureKind::Vline => Box::new(VerticalLineFinder::new()),
        FigureKind::Square => Box::new(SquareFinder::new()),
    }
}
