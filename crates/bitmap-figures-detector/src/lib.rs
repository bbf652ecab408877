//! # bitmap-figures-detector
//!
//! Figure finders for bitmap-figures.
//!
//! This crate provides:
//! - The [`FigureFinder`] trait and [`FigureKind`] selector
//! - Longest horizontal and vertical line finders
//! - The square finder
//!
//! ## Architecture
//!
//! This is Layer 1 in the architecture - it depends on bitmap-figures-core
//! and scans an already validated grid. No I/O happens here.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod detection;
pub mod detectors;

// Re-export commonly used types
pub use detection::{finder_for, DetectedFigure, FigureFinder, FigureKind, UnknownFigure};
pub use detectors::{HorizontalLineFinder, SquareFinder, VerticalLineFinder, TRIGGER_LENGTH};
