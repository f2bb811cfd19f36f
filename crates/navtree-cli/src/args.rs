//! Command-line argument definitions for the navtree CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, configuration file
//! selection, check-only mode, and logging verbosity.

use clap::Parser;

/// Command-line arguments for the navtree index tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input navigation-tree data file
    #[arg(help = "Path to the input file")]
    pub input: String,

    /// Path to the formatted output file
    #[arg(short, long, default_value = "out.js")]
    pub output: String,

    /// Validate only; do not write output
    #[arg(long)]
    pub check: bool,

    /// Log the document's summary counts
    #[arg(long)]
    pub stats: bool,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
