//! Immutable binary bitmap.

use crate::{Dimensions, Error, Result};

/// Rectangular matrix of set/cleared cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    /// Cell storage (row-major order)
    cells: Vec<bool>,
    /// Grid dimensions
    dimensions: Dimensions,
}

impl Grid {
    /// Build a grid from raw integer values.
    ///
    /// Every value must be 0 or 1 and there must be exactly `rows * cols`
    /// of them.
    ///
    /// # Example
    /// ```
    /// use bitmap_figures_core::Grid;
    ///
    /// let grid = Grid::new(2, 2, [1, 0, 0, 1]).unwrap();
    /// assert_eq!(grid.cell(1, 1), Some(true));
    /// assert!(Grid::new(1, 2, [1, 2]).is_err());
    /// ```
    pub fn new<I>(rows: usize, cols: usize, values: I) -> Result<Self>
    where
        I: IntoIterator<Item = i64>,
    {
        let cells = values
            .into_iter()
            .enumerate()
            .map(|(index, value)| match value {
                0 => Ok(false),
                1 => Ok(true),
                _ => Err(Error::InvalidCell { index, value }),
            })
            .collect::<Result<Vec<_>>>()?;

        Self::from_cells(Dimensions::new(rows, cols), cells)
    }

    /// Build a grid from already-decoded cells.
    ///
    /// Fails with [`Error::MalformedContent`] when `rows * cols` does not fit
    /// in `usize`.
    pub fn from_cells(dimensions: Dimensions, cells: Vec<bool>) -> Result<Self> {
        let expected = dimensions.cell_count().ok_or_else(|| {
            Error::MalformedContent(format!(
                "bitmap {}x{} is too large",
                dimensions.rows, dimensions.cols
            ))
        })?;
        if cells.len() != expected {
            return Err(Error::DimensionMismatch {
                expected,
                actual: cells.len(),
            });
        }
        Ok(Self { cells, dimensions })
    }

    /// Get cell at position.
    ///
    /// Fails with [`Error::OutOfBounds`] outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Result<bool> {
        self.cell(row, col).ok_or(Error::OutOfBounds {
            row,
            col,
            rows: self.dimensions.rows,
            cols: self.dimensions.cols,
        })
    }

    /// Probe a cell.
    ///
    /// Returns None if position is out of bounds.
    pub fn cell(&self, row: usize, col: usize) -> Option<bool> {
        if row < self.dimensions.rows && col < self.dimensions.cols {
            self.cells.get(row * self.dimensions.cols + col).copied()
        } else {
            None
        }
    }

    /// Whether the cell is set; positions outside the grid read as cleared.
    pub fn is_set(&self, row: usize, col: usize) -> bool {
        self.cell(row, col).unwrap_or(false)
    }

    /// Get entire row as a slice.
    ///
    /// Returns None if row is out of bounds.
    pub fn row(&self, row: usize) -> Option<&[bool]> {
        if row < self.dimensions.rows {
            let start = row * self.dimensions.cols;
            let end = start + self.dimensions.cols;
            Some(&self.cells[start..end])
        } else {
            None
        }
    }

    /// Get dimensions.
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.dimensions.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.dimensions.cols
    }

    /// Number of set cells.
    pub fn count_set(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    /// Cells in row-major order.
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Grid with rows and columns swapped.
    pub fn transpose(&self) -> Self {
        let Dimensions { rows, cols } = self.dimensions;
        let mut cells = Vec::with_capacity(self.cells.len());
        for col in 0..cols {
            for row in 0..rows {
                cells.push(self.cells[row * cols + col]);
            }
        }
        Self {
            cells,
            dimensions: Dimensions::new(cols, rows),
        }
    }
}
