//! Command dispatch.
//!
//! Each invocation loads one bitmap file and runs exactly one action on it.

use std::io::Write;
use std::path::Path;

use anyhow::Context;
use tracing::{debug, info};

use bitmap_figures_core::{Error, Grid, OutputFormat};
use bitmap_figures_detector::{finder_for, DetectedFigure, FigureKind};

use crate::cli::Action;
use crate::report;

/// Verdict of `--test`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validity {
    /// The file holds a well-formed bitmap
    Valid,
    /// The file was read but its content was rejected
    Invalid(String),
}

/// Check whether a file holds a valid bitmap.
///
/// Malformed content is a verdict, not an error; a missing or unreadable
/// file is an error.
pub fn validate_file(path: &Path) -> Result<Validity, Error> {
    match Grid::from_file(path) {
        Ok(_) => Ok(Validity::Valid),
        Err(e) if e.is_malformed() => {
            debug!(path = %path.display(), error = %e, "Bitmap rejected");
            Ok(Validity::Invalid(e.to_string()))
        }
        Err(e) => Err(e),
    }
}

/// Load a bitmap file and search it for one figure.
///
/// Fails with [`Error::ShapeNotFound`] when the bitmap is valid but holds no
/// such figure.
pub fn find_figure(kind: FigureKind, path: &Path) -> Result<DetectedFigure, Error> {
    let grid = Grid::from_file(path)?;
    let finder = finder_for(kind);
    info!(
        finder = finder.name(),
        rows = grid.rows(),
        cols = grid.cols(),
        "Searching bitmap"
    );

    finder
        .detect(&grid)
        .ok_or_else(|| Error::ShapeNotFound(kind.to_string()))
}

/// Run an action, writing its result line to `out`.
pub fn execute<W: Write>(action: &Action, format: OutputFormat, out: &mut W) -> anyhow::Result<()> {
    match action {
        Action::Test(path) => {
            let verdict = match validate_file(path)? {
                Validity::Valid => "Valid",
                Validity::Invalid(_) => "Invalid",
            };
            writeln!(out, "{verdict}")?;
        }
        Action::Find(kind, path) => {
            let figure = find_figure(*kind, path)
                .with_context(|| format!("looking for {kind} in {}", path.display()))?;
            writeln!(out, "{}", report::render(&figure, format)?)?;
        }
    }
    Ok(())
}
