//! Error and diagnostic system for the navtree parser.
//!
//! This module provides an error handling system with:
//! - Error codes for documentation and searchability
//! - Multiple labeled spans for rich error context
//! - Severity levels
//! - Diagnostic collector for accumulating multiple errors
//!
//! # Overview
//!
//! The error system is built around the [`Diagnostic`] type, which represents
//! a single error or warning message with optional error code, multiple source
//! locations, and help text. Multiple diagnostics are wrapped in [`ParseError`]
//! for returning from the parsing lifecycle (lexing, parsing, elaboration, and
//! the structural lints that run over a parsed document).
//!
//! # Example
//!
//! ```
//! # use navtree_parser::error::{Diagnostic, ErrorCode};
//! # use navtree_parser::Span;
//!
//! let span = Span::new(100..120);
//! let first_span = Span::new(50..70);
//!
//! let diag = Diagnostic::error("target `page.html#a1` is used more than once")
//!     .with_code(ErrorCode::E200)
//!     .with_label(span, "duplicate target")
//!     .with_secondary_label(first_span, "first used here")
//!     .with_help("regenerate the index or remove the duplicated row");
//! ```

mod collector;
mod diagnostic;
mod error_code;
mod label;
mod parse_error;
mod severity;

pub use collector::DiagnosticCollector;
pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use label::Label;
pub use parse_error::ParseError;
pub use severity::Severity;
