//! Command line interface.

use std::path::{Path, PathBuf};

use clap::error::ErrorKind;
use clap::{ArgGroup, CommandFactory, Parser};

use bitmap_figures_detector::FigureKind;

/// Finds the longest horizontal/vertical lines or squares in a bitmap.
#[derive(Parser, Debug)]
#[command(
    name = "bitmap-figures",
    version,
    about = "Finds the longest lines or squares in a bitmap of 0s and 1s",
    long_about = "Finds the longest horizontal/vertical lines or squares in a bitmap \
                  saved as text: the row and column counts followed by a rectangular \
                  matrix of 0s and 1s. Prints the source and destination coordinates \
                  of the figure as `row1 col1 row2 col2`.",
    group(
        ArgGroup::new("action")
            .required(true)
            .args(["test", "hline", "vline", "square"])
    )
)]
pub struct Cli {
    /// Test the file for validity
    #[arg(long, value_name = "FILE")]
    pub test: Option<PathBuf>,

    /// Look for the longest horizontal line
    #[arg(long, value_name = "FILE")]
    pub hline: Option<PathBuf>,

    /// Look for the longest vertical line
    #[arg(long, value_name = "FILE")]
    pub vline: Option<PathBuf>,

    /// Look for the biggest square
    #[arg(long, value_name = "FILE")]
    pub square: Option<PathBuf>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    /// YAML configuration file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// What a single invocation does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Check that a bitmap file is valid
    Test(PathBuf),
    /// Locate a figure in a bitmap file
    Find(FigureKind, PathBuf),
}

impl Action {
    /// Bitmap file the action reads.
    pub fn path(&self) -> &Path {
        match self {
            Action::Test(path) | Action::Find(_, path) => path,
        }
    }
}

impl Cli {
    /// The selected action.
    ///
    /// A parsed `Cli` always carries one; a hand-built one without any
    /// fails the same way clap does on the command line.
    pub fn action(&self) -> Result<Action, clap::Error> {
        if let Some(path) = &self.test {
            return Ok(Action::Test(path.clone()));
        }

        [
            (FigureKind::Hline, &self.hline),
            (FigureKind::Vline, &self.vline),
            (FigureKind::Square, &self.square),
        ]
        .into_iter()
        .find_map(|(kind, path)| path.as_ref().map(|p| Action::Find(kind, p.clone())))
        .ok_or_else(|| {
            Cli::command().error(
                ErrorKind::MissingRequiredArgument,
                "one of --test, --hline, --vline or --square is required",
            )
        })
    }
}
