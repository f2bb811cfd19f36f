//! Error types for navtree operations.
//!
//! This module provides the main error type [`NavtreeError`] which wraps
//! the error conditions that can occur while processing an index file.

use std::io;

use thiserror::Error;

use navtree_parser::error::ParseError;

/// The main error type for navtree operations.
///
/// # Diagnostic Variants
///
/// The `Parse` and `Lint` variants contain structured error information
/// with source code spans, suitable for rich error reporting.
#[derive(Debug, Error)]
pub enum NavtreeError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse { err: ParseError, src: String },

    #[error("{err}")]
    Lint { err: ParseError, src: String },

    #[error("Config error: {0}")]
    Config(String),
}

impl NavtreeError {
    /// Create a new `Parse` error with the associated source code.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }

    /// Create a new `Lint` error with the associated source code.
    pub fn new_lint_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Lint {
            err,
            src: src.into(),
        }
    }
}
