//! # bitmap-figures
//!
//! Finds the longest horizontal/vertical lines or squares in a bitmap saved
//! as a text file containing a rectangular matrix of 0s and 1s.
//!
//! ## Usage
//!
//! ```text
//! bitmap-figures --help
//! bitmap-figures --test bitmap.txt      Tests the file for validity
//! bitmap-figures --hline bitmap.txt     Looks for the longest horizontal line
//! bitmap-figures --vline bitmap.txt     Looks for the longest vertical line
//! bitmap-figures --square bitmap.txt    Looks for the biggest square
//! ```
//!
//! ## Architecture
//!
//! This is Layer 2 - the binary that ties together:
//! - bitmap-figures-core: Grid, text format, configuration
//! - bitmap-figures-detector: Figure finders

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use bitmap_figures::{commands, report, Cli};
use bitmap_figures_core::{Error, FiguresConfig, OutputFormat};

fn main() -> ExitCode {
    // Parse command line arguments
    let cli = Cli::parse();
    let action = cli.action().unwrap_or_else(|e| e.exit());

    let config = match &cli.config {
        Some(path) => match FiguresConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("{}\n{}: {e}", report::error_banner(true), path.display());
                return ExitCode::from(report::EXIT_FAILURE);
            }
        },
        None => FiguresConfig::default(),
    };

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let format = if cli.json {
        OutputFormat::Json
    } else {
        config.output.format
    };
    tracing::debug!(?action, ?format, "Dispatching");

    let result = commands::execute(&action, format, &mut std::io::stdout().lock());

    if let Err(err) = &result {
        if err.downcast_ref::<Error>().is_some_and(Error::is_malformed) {
            eprintln!("Invalid");
        }
        eprintln!("{}\n{err:#}", report::error_banner(config.output.color));
    }

    report::process_exit(&result)
}
