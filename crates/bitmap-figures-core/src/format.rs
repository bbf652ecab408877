//! Text format for bitmaps.
//!
//! A bitmap file holds whitespace separated integers: the row and column
//! counts followed by `rows * cols` cells, each `0` or `1`.
//!
//! ```text
//! 2 3
//! 1 0 1
//! 0 1 1
//! ```

use std::io::ErrorKind;
use std::path::Path;
use std::str::FromStr;

use tracing::debug;

use crate::{Error, Grid, Result};

impl Grid {
    /// Parse a bitmap from its text form.
    ///
    /// Any problem with the content (bad header, wrong number of cells,
    /// non-binary values) is reported as [`Error::MalformedContent`].
    pub fn parse(text: &str) -> Result<Self> {
        let mut tokens = text.split_whitespace();

        let rows = parse_dimension(tokens.next(), "row count")?;
        let cols = parse_dimension(tokens.next(), "column count")?;
        let expected = rows.checked_mul(cols).ok_or_else(|| {
            Error::MalformedContent(format!("bitmap {rows}x{cols} is too large"))
        })?;

        let values = tokens
            .map(|token| {
                token.parse::<i64>().map_err(|_| {
                    Error::MalformedContent(format!("cell '{token}' is not an integer"))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        if values.len() != expected {
            return Err(Error::MalformedContent(format!(
                "expected {expected} cells for {rows}x{cols} bitmap, found {}",
                values.len()
            )));
        }

        Grid::new(rows, cols, values).map_err(|e| Error::MalformedContent(e.to_string()))
    }

    /// Load a bitmap file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => Error::FileNotFound(path.to_path_buf()),
            _ => Error::Io(e),
        })?;

        let grid = Self::parse(&content)?;
        debug!(
            path = %path.display(),
            rows = grid.rows(),
            cols = grid.cols(),
            "Loaded bitmap"
        );
        Ok(grid)
    }

    /// Serialize back to the text form, one grid row per line.
    pub fn to_text(&self) -> String {
        let mut text = format!("{} {}\n", self.rows(), self.cols());
        for row in 0..self.rows() {
            if let Some(cells) = self.row(row) {
                let line = cells
                    .iter()
                    .map(|&cell| if cell { "1" } else { "0" })
                    .collect::<Vec<_>>()
                    .join(" ");
                text.push_str(&line);
                text.push('\n');
            }
        }
        text
    }
}

impl FromStr for Grid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

fn parse_dimension(token: Option<&str>, what: &str) -> Result<usize> {
    let token = token.ok_or_else(|| Error::MalformedContent(format!("missing {what}")))?;
    token
        .parse::<usize>()
        .map_err(|_| Error::MalformedContent(format!("invalid {what} '{token}'")))
}
