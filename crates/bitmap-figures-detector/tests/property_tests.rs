//! Property-based tests for figure finders.
//!
//! Uses proptest to generate random bitmaps and verify finder invariants.

use proptest::prelude::*;

use bitmap_figures_core::{Dimensions, Extent, Grid};
use bitmap_figures_detector::{
    finder_for, FigureFinder, FigureKind, HorizontalLineFinder, SquareFinder, VerticalLineFinder,
    TRIGGER_LENGTH,
};

/// Generate a random grid size within reasonable bounds.
fn grid_dimensions() -> impl Strategy<Value = (usize, usize)> {
    (0usize..12, 0usize..12)
}

/// Generate a random bitmap.
fn any_grid() -> impl Strategy<Value = Grid> {
    grid_dimensions().prop_flat_map(|(rows, cols)| {
        prop::collection::vec(any::<bool>(), rows * cols).prop_map(move |cells| {
            Grid::from_cells(Dimensions::new(rows, cols), cells).expect("cell count matches")
        })
    })
}

/// Generate a bitmap where set cells are common, so squares actually appear.
fn dense_grid() -> impl Strategy<Value = Grid> {
    (3usize..12, 3usize..12).prop_flat_map(|(rows, cols)| {
        prop::collection::vec(prop::bool::weighted(0.85), rows * cols).prop_map(move |cells| {
            Grid::from_cells(Dimensions::new(rows, cols), cells).expect("cell count matches")
        })
    })
}

/// Longest run of set cells in any row, computed directly.
fn longest_row_run(grid: &Grid) -> usize {
    (0..grid.rows())
        .filter_map(|row| grid.row(row))
        .flat_map(|cells| cells.split(|&cell| !cell).map(|run| run.len()))
        .max()
        .unwrap_or(0)
}

fn assert_all_set(grid: &Grid, extent: &Extent) -> Result<(), TestCaseError> {
    for row in extent.start.row..=extent.end.row {
        for col in extent.start.col..=extent.end.col {
            prop_assert!(grid.is_set(row, col), "cell ({}, {}) is not set", row, col);
        }
    }
    Ok(())
}

fn assert_inside(grid: &Grid, extent: &Extent) -> Result<(), TestCaseError> {
    let dims = grid.dimensions();
    prop_assert!(dims.contains(&extent.start), "start {:?} outside {:?}", extent.start, dims);
    prop_assert!(dims.contains(&extent.end), "end {:?} outside {:?}", extent.end, dims);
    prop_assert!(extent.start.row <= extent.end.row);
    prop_assert!(extent.start.col <= extent.end.col);
    Ok(())
}

proptest! {
    /// Finders should never panic on any grid, including empty ones.
    #[test]
    fn finders_never_panic(grid in any_grid()) {
        for kind in FigureKind::ALL {
            finder_for(kind).find(&grid);
        }
    }

    /// The horizontal line is exactly as long as the longest row run.
    #[test]
    fn hline_length_is_true_maximum(grid in any_grid()) {
        let expected = longest_row_run(&grid);
        match HorizontalLineFinder::new().find(&grid) {
            Some(extent) => {
                prop_assert_eq!(extent.height(), 1);
                prop_assert_eq!(extent.width(), expected);
                assert_inside(&grid, &extent)?;
                assert_all_set(&grid, &extent)?;
            }
            None => {
                prop_assert_eq!(grid.count_set(), 0);
            }
        }
    }

    /// An hline is reported exactly when the grid has a set cell.
    #[test]
    fn nothing_found_only_without_set_cells(grid in any_grid()) {
        let has_set = grid.count_set() > 0;
        prop_assert_eq!(HorizontalLineFinder::new().find(&grid).is_some(), has_set);
        prop_assert_eq!(VerticalLineFinder::new().find(&grid).is_some(), has_set);
    }

    /// Vertical search equals horizontal search on the transposed grid.
    #[test]
    fn vline_is_transposed_hline(grid in any_grid()) {
        let vertical = VerticalLineFinder::new().find(&grid);
        let horizontal = HorizontalLineFinder::new()
            .find(&grid.transpose())
            .map(|extent| extent.transposed());
        prop_assert_eq!(vertical, horizontal);
    }

    /// No earlier row holds a run as long as the reported one.
    #[test]
    fn hline_tie_break_keeps_first(grid in any_grid()) {
        if let Some(extent) = HorizontalLineFinder::new().find(&grid) {
            let len = extent.width();
            for row in 0..extent.start.row {
                let runs = grid.row(row).unwrap_or(&[]);
                prop_assert!(runs.split(|&cell| !cell).all(|run| run.len() < len));
            }
        }
    }

    /// Square results stay inside the grid, with checked edges set.
    #[test]
    fn square_result_is_bounded(grid in dense_grid()) {
        if let Some(extent) = SquareFinder::new().find(&grid) {
            assert_inside(&grid, &extent)?;
            prop_assert_eq!(extent.width(), TRIGGER_LENGTH);
            prop_assert!(extent.height() >= TRIGGER_LENGTH);

            let side = extent.height();
            for step in 0..side {
                prop_assert!(grid.is_set(extent.start.row + step, extent.start.col));
                prop_assert!(grid.is_set(extent.end.row, extent.start.col + step));
            }
        }
    }

    /// Square search never succeeds on grids too small to trigger.
    #[test]
    fn square_needs_trigger_run(rows in 0usize..12, cols in 0usize..TRIGGER_LENGTH) {
        let grid = Grid::from_cells(Dimensions::new(rows, cols), vec![true; rows * cols])
            .expect("cell count matches");
        prop_assert!(SquareFinder::new().find(&grid).is_none());
    }

    /// Serializing and parsing a grid reproduces it.
    #[test]
    fn text_round_trip(grid in any_grid()) {
        let text = grid.to_text();
        let parsed = Grid::parse(&text).expect("serialized grid parses");
        prop_assert_eq!(&parsed, &grid);
        prop_assert_eq!(parsed.to_text(), text);
    }
}

#[cfg(test)]
mod scenario_tests {
    use super::*;

    #[test]
    fn test_all_cleared_grid() {
        let grid = Grid::parse("3 3\n0 0 0\n0 0 0\n0 0 0\n").unwrap();
        for kind in FigureKind::ALL {
            assert!(finder_for(kind).find(&grid).is_none(), "{kind} found");
        }
    }

    #[test]
    fn test_single_row_of_ones() {
        let grid = Grid::parse("1 5\n1 1 1 1 1\n").unwrap();
        assert_eq!(
            finder_for(FigureKind::Hline).find(&grid).unwrap().to_string(),
            "0 0 0 4"
        );
        assert_eq!(
            finder_for(FigureKind::Vline).find(&grid).unwrap().to_string(),
            "0 0 0 0"
        );
    }

    #[test]
    fn test_block_in_corner() {
        let grid = Grid::parse(
            "5 5\n1 1 1 0 0\n1 1 1 0 0\n1 1 1 0 0\n0 0 0 0 0\n0 0 0 0 0\n",
        )
        .unwrap();
        assert_eq!(
            finder_for(FigureKind::Square).find(&grid).unwrap().to_string(),
            "0 0 2 2"
        );
    }

    #[test]
    fn test_two_by_two_ones() {
        let grid = Grid::parse("2 2\n1 1\n1 1\n").unwrap();
        assert!(finder_for(FigureKind::Square).find(&grid).is_none());
    }
}
