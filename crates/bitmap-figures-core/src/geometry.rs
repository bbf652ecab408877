//! Geometry types for bitmap coordinates and found figures.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Position in the bitmap (row, column).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Row index (0-based)
    pub row: usize,
    /// Column index (0-based)
    pub col: usize,
}

impl Position {
    /// Create a new position.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Origin position (0, 0).
    pub fn origin() -> Self {
        Self { row: 0, col: 0 }
    }
}

/// Dimensions of a bitmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Dimensions {
    /// Number of rows
    pub rows: usize,
    /// Number of columns
    pub cols: usize,
}

impl Dimensions {
    /// Create new dimensions.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Total cell count (rows * cols), or None if it overflows `usize`.
    pub fn cell_count(&self) -> Option<usize> {
        self.rows.checked_mul(self.cols)
    }

    /// Check if a position lies inside these dimensions.
    pub fn contains(&self, pos: &Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }
}

/// Region covered by a found figure, from `start` to `end` inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Extent {
    /// First corner (top-left)
    pub start: Position,
    /// Last corner (bottom-right)
    pub end: Position,
}

impl Extent {
    /// Create a new extent.
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Horizontal run on `row` from `start_col` to `end_col`.
    pub fn horizontal(row: usize, start_col: usize, end_col: usize) -> Self {
        Self::new(Position::new(row, start_col), Position::new(row, end_col))
    }

    /// Vertical run in `col` from `start_row` to `end_row`.
    pub fn vertical(col: usize, start_row: usize, end_row: usize) -> Self {
        Self::new(Position::new(start_row, col), Position::new(end_row, col))
    }

    /// Number of columns covered.
    pub fn width(&self) -> usize {
        self.end.col.abs_diff(self.start.col) + 1
    }

    /// Number of rows covered.
    pub fn height(&self) -> usize {
        self.end.row.abs_diff(self.start.row) + 1
    }

    /// Check if a position lies within the extent.
    pub fn contains(&self, pos: &Position) -> bool {
        pos.row >= self.start.row
            && pos.row <= self.end.row
            && pos.col >= self.start.col
            && pos.col <= self.end.col
    }

    /// The same extent with rows and columns swapped.
    pub fn transposed(&self) -> Self {
        Self::new(
            Position::new(self.start.col, self.start.row),
            Position::new(self.end.col, self.end.row),
        )
    }
}

impl fmt::Display for Extent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.start.row, self.start.col, self.end.row, self.end.col
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_creation() {
        let pos = Position::new(5, 10);
        assert_eq!(pos.row, 5);
        assert_eq!(pos.col, 10);
        assert_eq!(Position::origin(), Position::new(0, 0));
    }

    #[test]
    fn test_dimensions_contains() {
        let dims = Dimensions::new(3, 4);
        assert_eq!(dims.cell_count(), Some(12));
        assert_eq!(Dimensions::new(usize::MAX, 2).cell_count(), None);
        assert!(dims.contains(&Position::new(2, 3)));
        assert!(!dims.contains(&Position::new(3, 0)));
        assert!(!dims.contains(&Position::new(0, 4)));
    }

    #[test]
    fn test_extent_size() {
        let run = Extent::horizontal(2, 1, 4);
        assert_eq!(run.width(), 4);
        assert_eq!(run.height(), 1);

        let run = Extent::vertical(0, 0, 2);
        assert_eq!(run.width(), 1);
        assert_eq!(run.height(), 3);
    }

    #[test]
    fn test_extent_contains() {
        let square = Extent::new(Position::new(1, 1), Position::new(3, 3));

        assert!(square.contains(&Position::new(1, 1))); // top-left corner
        assert!(square.contains(&Position::new(2, 2))); // inside
        assert!(square.contains(&Position::new(3, 3))); // bottom-right corner (inclusive)

        assert!(!square.contains(&Position::new(0, 1))); // above
        assert!(!square.contains(&Position::new(4, 1))); // below
        assert!(!square.contains(&Position::new(1, 0))); // left
        assert!(!square.contains(&Position::new(1, 4))); // right
    }

    #[test]
    fn test_extent_display() {
        let run = Extent::horizontal(0, 0, 4);
        assert_eq!(run.to_string(), "0 0 0 4");
    }

    #[test]
    fn test_extent_transposed() {
        let run = Extent::horizontal(2, 1, 4);
        assert_eq!(run.transposed(), Extent::vertical(2, 1, 4));
    }

    #[test]
    fn test_extent_json_shape() {
        let run = Extent::horizontal(1, 2, 3);
        let json = serde_json::to_value(run).unwrap();
        assert_eq!(json["start"]["row"], 1);
        assert_eq!(json["start"]["col"], 2);
        assert_eq!(json["end"]["col"], 3);
    }
}
