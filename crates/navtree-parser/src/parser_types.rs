//! Parsed AST for navtree documents.
//!
//! These types mirror the file shape one-to-one and keep every source span;
//! [`elaborate`](crate::elaborate) turns them into the semantic model.

use navtree_core::span::{Span, Spanned};

/// A parsed data file: `var <name> = [ rows ];`
#[derive(Debug, Clone, PartialEq)]
pub struct RawDocument<'src> {
    pub name: Spanned<&'src str>,
    pub rows: Vec<RawRow>,
}

/// One parsed row: `[ "name", target, child ]`
#[derive(Debug, Clone, PartialEq)]
pub struct RawRow {
    pub name: Spanned<String>,
    pub target: Spanned<Option<String>>,
    pub child: RawChild,
    /// Span from the row's `[` to its `]`.
    pub span: Span,
}

/// The third element of a row.
#[derive(Debug, Clone, PartialEq)]
pub enum RawChild {
    /// `null`
    Leaf,
    /// A child page reference string.
    Reference(Spanned<String>),
    /// An inline nested row array.
    Rows(Vec<RawRow>),
}
