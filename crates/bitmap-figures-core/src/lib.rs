//! # bitmap-figures-core
//!
//! Core types for bitmap-figures.
//!
//! This crate contains all fundamental types with **no internal dependencies**
//! on other bitmap-figures crates. It provides:
//!
//! - The immutable binary [`Grid`]
//! - Geometry types (Position, Dimensions, Extent)
//! - The bitmap text format (parse, load from file, serialize)
//! - YAML configuration
//! - Error types
//!
//! ## Architecture
//!
//! This is Layer 0 in the architecture - the detector and the binary depend
//! on this one, but this crate has no dependencies on other bitmap-figures
//! crates.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod format;
pub mod geometry;
pub mod grid;

// Re-export commonly used types
pub use config::{FiguresConfig, LoggingSettings, OutputFormat, OutputSettings};
pub use error::{Error, Result};
pub use geometry::{Dimensions, Extent, Position};
pub use grid::Grid;
