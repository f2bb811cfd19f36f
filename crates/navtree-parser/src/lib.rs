//! # Navtree Parser
//!
//! Parser for Doxygen navigation-tree data files. This crate provides the
//! parsing pipeline from source text to the semantic index model.
//!
//! ## Usage
//!
//! ```
//! # use navtree_parser::{parse, error::ParseError};
//!
//! fn main() -> Result<(), ParseError> {
//!     let source = r#"var _astc_textures_8h =
//! [
//!     [ "astc_header", "structastc__header.html", "structastc__header" ],
//!     [ "GL_CHECK", "_astc_textures_8h.html#a410114c", null ]
//! ];"#;
//!
//!     let document = parse(source)?;
//!     assert_eq!(document.entries().len(), 2);
//!     Ok(())
//! }
//! ```

mod elaborate;
pub mod error;
mod lexer;
mod parser;
mod parser_types;
mod tokens;

pub use navtree_core::span::{Span, Spanned};

use log::{debug, trace};

use navtree_core::document::Document;

use crate::error::ParseError;

/// Parse navtree source text into a semantic document.
///
/// This is the main entry point for parsing a navigation-tree data file.
/// It orchestrates the complete pipeline:
///
/// 1. **Tokenize** - Convert source text to tokens
/// 2. **Parse** - Build the row AST from tokens
/// 3. **Elaborate** - Transform to the semantic model
///
/// Structural lints (duplicate targets, ordering) are not run here; see the
/// `navtree` crate for validation over the returned document.
///
/// # Arguments
///
/// * `source` - The data file contents, e.g. a `*_8h.js` fragment
///
/// # Returns
///
/// Returns the parsed [`Document`] on success, or a [`ParseError`] with
/// location information on failure.
///
/// # Example
///
/// ```
/// # use navtree_parser::{parse, error::ParseError};
///
/// fn main() -> Result<(), ParseError> {
///     let document = parse("var _x =\n[\n    [ \"a\", null, null ]\n];")?;
///     assert_eq!(document.name(), "_x");
///     Ok(())
/// }
/// ```
pub fn parse(source: &str) -> Result<Document, ParseError> {
    // Step 1: Tokenize
    let tokens = lexer::tokenize(source)?;
    debug!(tokens = tokens.len(); "Tokenized source");

    // Step 2: Parse
    let ast = parser::build_document(&tokens)?;
    debug!(rows = ast.rows.len(); "Parsed document");

    // Step 3: Elaborate
    let document = elaborate::elaborate(&ast)?;
    trace!(document:?; "Elaborated document");

    Ok(document)
}

#[cfg(test)]
mod tests {
    use navtree_core::entry::Children;

    use super::*;

    #[test]
    fn test_parse_pipeline() {
        let source = r#"var _astc_textures_8h =
[
    [ "astc_header", "structastc__header.html", "structastc__header" ],
    [ "ASTC_TEXTURE_SWITCH_INTERVAL", "_astc_textures_8h.html#a9bb574f0", null ],
    [ "GL_CHECK", "_astc_textures_8h.html#a410114ca", null ]
];"#;
        let document = parse(source).expect("should parse");

        assert_eq!(document.name(), "_astc_textures_8h");
        assert_eq!(document.entries().len(), 3);
        assert!(matches!(
            document.entries()[0].children(),
            Children::Reference(r) if r == "structastc__header"
        ));
        assert_eq!(
            document.entries()[2].target().and_then(|t| t.anchor()),
            Some("a410114ca")
        );
    }

    #[test]
    fn test_parse_reports_lexer_errors() {
        let err = parse("var x = [ \"unterminated ];").unwrap_err();
        assert!(err.diagnostics()[0].severity().is_error());
    }

    #[test]
    fn test_parse_reports_parser_errors() {
        let err = parse("var x = [ [ \"a\", null ] ];").unwrap_err();
        assert_eq!(err.diagnostics().len(), 1);
    }
}
