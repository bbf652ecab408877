//! Result rendering and exit codes.

use std::process::ExitCode;

use bitmap_figures_core::{Error, OutputFormat};
use bitmap_figures_detector::DetectedFigure;

/// Figure found, file valid, or `--test` finished.
pub const EXIT_SUCCESS: u8 = 0;
/// Any failure without a more specific code.
pub const EXIT_FAILURE: u8 = 1;
/// Bad command line (clap's own exit code).
pub const EXIT_USAGE: u8 = 2;
/// Bitmap file does not exist.
pub const EXIT_FILE_NOT_FOUND: u8 = 3;
/// Bitmap file content is invalid.
pub const EXIT_INVALID: u8 = 4;
/// Valid bitmap without the requested figure.
pub const EXIT_NOT_FOUND: u8 = 5;

/// Render a found figure.
pub fn render(figure: &DetectedFigure, format: OutputFormat) -> Result<String, Error> {
    match format {
        OutputFormat::Plain => Ok(figure.extent().to_string()),
        OutputFormat::Json => Ok(serde_json::to_string(figure)?),
    }
}

/// Banner printed in front of error messages.
pub fn error_banner(color: bool) -> &'static str {
    if color {
        "\x1b[31;1m ERROR \x1b[0m"
    } else {
        " ERROR "
    }
}

/// Exit code for a failed run.
pub fn exit_code(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<Error>() {
        Some(Error::FileNotFound(_)) => EXIT_FILE_NOT_FOUND,
        Some(e) if e.is_malformed() => EXIT_INVALID,
        Some(Error::ShapeNotFound(_)) => EXIT_NOT_FOUND,
        _ => EXIT_FAILURE,
    }
}

/// Process exit code for the outcome of a run.
pub fn process_exit(result: &anyhow::Result<()>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(err) => ExitCode::from(exit_code(err)),
    }
}
