//! Labeled source spans for diagnostic messages.

use navtree_core::span::Span;

/// A labeled span in source text.
///
/// A diagnostic carries one primary label marking the main location of the
/// problem, and optionally secondary labels adding context such as
/// "first used here".
#[derive(Debug, Clone)]
pub struct Label {
    span: Span,
    message: String,
    is_primary: bool,
}

impl Label {
    /// Create a new primary label.
    pub fn primary(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
            is_primary: true,
        }
    }

    /// Create a new secondary label.
    pub fn secondary(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
            is_primary: false,
        }
    }

    /// The span this label applies to.
    pub fn span(&self) -> Span {
        self.span
    }

    /// The label message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Whether this is a primary label.
    pub fn is_primary(&self) -> bool {
        self.is_primary
    }

    /// Whether this is a secondary label.
    pub fn is_secondary(&self) -> bool {
        !self.is_primary
    }
}
