//! CLI logic for the navtree index tool.
//!
//! This module contains the core CLI logic for the navtree index tool.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::info;

use navtree::{IndexBuilder, NavtreeError};

/// Run the navtree CLI application
///
/// This function processes the input file through the navtree pipeline:
/// parse, lint, and (unless `--check` is set) write the canonically
/// formatted output.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `NavtreeError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Parsing errors
/// - Lint errors
pub fn run(args: &Args) -> Result<(), NavtreeError> {
    info!(
        input_path = args.input,
        check = args.check;
        "Processing index"
    );

    // Load configuration
    let app_config = config::load_config(args.config.as_ref())?;

    // Read input file
    let source = fs::read_to_string(&args.input)?;

    // Process the index using the IndexBuilder API
    let builder = IndexBuilder::new(app_config);
    let document = builder.parse(&source)?;

    if args.stats {
        let summary = builder.summary(&document);
        info!(summary = summary.to_string(); "Index summary");
    }

    builder.check(&document, &source)?;

    if !args.check {
        let rendered = builder.render_js(&document);
        fs::write(&args.output, rendered)?;
        info!(output_file = args.output; "Formatted index written");
    }

    Ok(())
}
