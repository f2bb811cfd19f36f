//! Navtree - a parser, validator, and formatter for Doxygen navigation-tree
//! data files.
//!
//! A navigation-tree data file is the machine-generated JavaScript fragment
//! a documentation generator emits next to its HTML output: a named array
//! literal mapping symbol names to documentation anchors. This crate parses
//! those files into a semantic model, checks the structural invariants the
//! generator guarantees, and re-serializes the model byte-identically.

pub mod config;

mod error;
mod stats;
mod validate;
mod writer;

pub use navtree_core::{document, entry, identifier, order, section, span};

pub use error::NavtreeError;
pub use stats::Summary;

use log::{debug, info, warn};

use navtree_core::document::Document;
use navtree_parser::error::Diagnostic;

use config::AppConfig;

/// Builder for parsing, checking, and rendering navigation-tree indexes.
///
/// # Examples
///
/// ```rust
/// use navtree::{IndexBuilder, config::AppConfig};
///
/// let source = "var _x =\n[\n    [ \"a\", \"p.html#a1\", null ]\n];";
///
/// let builder = IndexBuilder::new(AppConfig::default());
///
/// // Parse source to the semantic model
/// let document = builder.parse(source)
///     .expect("Failed to parse");
///
/// // Check the structural invariants
/// builder.check(&document, source)
///     .expect("Index is malformed");
///
/// // Render the canonical form; for a generator-emitted file this is
/// // byte-identical to the input
/// let rendered = builder.render_js(&document);
/// assert_eq!(rendered, source);
/// ```
#[derive(Default)]
pub struct IndexBuilder {
    config: AppConfig,
}

impl IndexBuilder {
    /// Create a new index builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including format and lint settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Parse source text into a semantic document.
    ///
    /// # Arguments
    ///
    /// * `source` - Data file contents, e.g. a `*_8h.js` fragment
    ///
    /// # Errors
    ///
    /// Returns `NavtreeError::Parse` for lexical, syntactic, or
    /// elaboration errors.
    pub fn parse(&self, source: &str) -> Result<Document, NavtreeError> {
        info!("Parsing index");

        let document = navtree_parser::parse(source)
            .map_err(|err| NavtreeError::new_parse_error(err, source))?;

        debug!("Index parsed successfully");
        Ok(document)
    }

    /// Run the structural lints over a document.
    ///
    /// Returns every diagnostic found, errors and warnings. See
    /// [`check`](Self::check) for the failing variant.
    pub fn lint(&self, document: &Document) -> Vec<Diagnostic> {
        validate::lint(document, self.config.lint())
    }

    /// Check a document against the structural invariants.
    ///
    /// Warnings are logged; any error-severity diagnostic fails the check.
    ///
    /// # Arguments
    ///
    /// * `document` - A parsed document
    /// * `source` - The source text the document was parsed from, for
    ///   error reporting
    ///
    /// # Errors
    ///
    /// Returns `NavtreeError::Lint` carrying every diagnostic when at
    /// least one error was found.
    pub fn check(&self, document: &Document, source: &str) -> Result<(), NavtreeError> {
        info!("Checking index invariants");

        let diagnostics = self.lint(document);
        if diagnostics.iter().any(|d| d.severity().is_error()) {
            return Err(NavtreeError::new_lint_error(diagnostics.into(), source));
        }

        for diagnostic in &diagnostics {
            warn!("{diagnostic}");
        }

        debug!("Index check passed");
        Ok(())
    }

    /// Render a document in canonical form.
    ///
    /// The output reproduces the generator's formatting; parsing and
    /// re-rendering a generator-emitted file is byte-identical.
    pub fn render_js(&self, document: &Document) -> String {
        let rendered = writer::render(document, self.config.format());
        info!(bytes = rendered.len(); "Index rendered");
        rendered
    }

    /// Compute the document's summary counts.
    pub fn summary(&self, document: &Document) -> Summary {
        Summary::of(document)
    }
}
