//! bitmap-figures library
//!
//! Command line parsing, command dispatch and result rendering for the
//! `bitmap-figures` binary. The binary itself is in main.rs.

pub mod cli;
pub mod commands;
pub mod report;

// Re-export commonly used types
pub use cli::{Action, Cli};
pub use commands::{execute, find_figure, validate_file, Validity};
