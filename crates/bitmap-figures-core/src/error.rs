//! Error types for bitmap-figures.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for bitmap-figures operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Input file does not exist or cannot be opened
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// File content is not a valid bitmap (bad header, token count or value)
    #[error("Malformed content: {0}")]
    MalformedContent(String),

    /// A cell value other than 0 or 1
    #[error("Invalid cell value {value} at index {index}")]
    InvalidCell {
        /// Row-major index of the offending value
        index: usize,
        /// The value that was supplied
        value: i64,
    },

    /// Number of supplied cells does not match rows * cols
    #[error("Dimension mismatch: expected {expected} cells, got {actual}")]
    DimensionMismatch {
        /// rows * cols
        expected: usize,
        /// Number of values supplied
        actual: usize,
    },

    /// Cell access outside the grid
    #[error("Position ({row}, {col}) out of bounds for {rows}x{cols} grid")]
    OutOfBounds {
        /// Requested row
        row: usize,
        /// Requested column
        col: usize,
        /// Grid rows
        rows: usize,
        /// Grid columns
        cols: usize,
    },

    /// The grid is valid but holds no qualifying figure
    #[error("Nothing found: no {0} in bitmap")]
    ShapeNotFound(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Whether the error means the bitmap content itself was rejected.
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            Error::MalformedContent(_) | Error::InvalidCell { .. } | Error::DimensionMismatch { .. }
        )
    }
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
