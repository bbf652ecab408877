//! Figure finder implementations.

pub mod line;
pub mod square;

pub use line::{HorizontalLineFinder, VerticalLineFinder};
pub use square::{SquareFinder, TRIGGER_LENGTH};
