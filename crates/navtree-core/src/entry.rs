//! Index entries: the rows of a navigation-tree data file.
//!
//! An [`Entry`] is one row of the generated array: a display name, an
//! optional link [`Target`], and [`Children`] (none for leaves, a child-page
//! reference for compounds, or inline nested entries in directory-level
//! files).

use crate::{identifier::Id, span::Span};

/// The link target of an entry: a page, optionally with a `#anchor`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Target(String);

impl Target {
    /// Wrap a raw target string such as `"file.html#a1b2c3"`.
    pub fn new(href: impl Into<String>) -> Self {
        Self(href.into())
    }

    /// The full target string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The page portion, before any `#`.
    pub fn page(&self) -> &str {
        match self.0.split_once('#') {
            Some((page, _)) => page,
            None => &self.0,
        }
    }

    /// The anchor portion, after `#`, if present.
    pub fn anchor(&self) -> Option<&str> {
        self.0.split_once('#').map(|(_, anchor)| anchor)
    }
}

/// The third element of a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Children {
    /// A leaf entry (`null` in the data file).
    None,
    /// A reference to a child page fragment, e.g. `"structastc__header"`.
    Reference(String),
    /// Inline nested entries.
    Inline(Vec<Entry>),
}

impl Children {
    /// Whether this entry has no children of any kind.
    pub fn is_none(&self) -> bool {
        matches!(self, Children::None)
    }

    /// Inline child entries, or an empty slice for leaves and references.
    pub fn entries(&self) -> &[Entry] {
        match self {
            Children::Inline(entries) => entries,
            _ => &[],
        }
    }
}

/// One row of a navigation-tree data file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    name: Id,
    target: Option<Target>,
    children: Children,
    span: Span,
    target_span: Span,
}

impl Entry {
    /// Create an entry with default (empty) spans.
    ///
    /// Spans only matter for entries produced by the parser; entries built
    /// programmatically keep the defaults.
    pub fn new(name: Id, target: Option<Target>, children: Children) -> Self {
        Self {
            name,
            target,
            children,
            span: Span::default(),
            target_span: Span::default(),
        }
    }

    /// Attach the source spans of the row and of its target element.
    pub fn with_spans(mut self, span: Span, target_span: Span) -> Self {
        self.span = span;
        self.target_span = target_span;
        self
    }

    /// The display name.
    pub fn name(&self) -> Id {
        self.name
    }

    /// The link target, if the entry is linked.
    pub fn target(&self) -> Option<&Target> {
        self.target.as_ref()
    }

    /// The entry's children.
    pub fn children(&self) -> &Children {
        &self.children
    }

    /// Whether the entry carries children (a reference or inline entries).
    pub fn is_compound(&self) -> bool {
        !self.children.is_none()
    }

    /// Source span of the whole row.
    pub fn span(&self) -> Span {
        self.span
    }

    /// Source span of the target element (the second row slot).
    pub fn target_span(&self) -> Span {
        self.target_span
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_page_and_anchor() {
        let target = Target::new("_astc_textures_8h.html#a410114caf210cb21e6c1701f04eb102d");
        assert_eq!(target.page(), "_astc_textures_8h.html");
        assert_eq!(target.anchor(), Some("a410114caf210cb21e6c1701f04eb102d"));
    }

    #[test]
    fn test_target_without_anchor() {
        let target = Target::new("structastc__header.html");
        assert_eq!(target.page(), "structastc__header.html");
        assert_eq!(target.anchor(), None);
    }

    #[test]
    fn test_leaf_entry() {
        let entry = Entry::new(
            Id::new("GL_CHECK"),
            Some(Target::new("x.html#abc")),
            Children::None,
        );
        assert!(!entry.is_compound());
        assert_eq!(entry.children().entries().len(), 0);
    }

    #[test]
    fn test_compound_entry() {
        let entry = Entry::new(
            Id::new("astc_header"),
            Some(Target::new("structastc__header.html")),
            Children::Reference("structastc__header".to_string()),
        );
        assert!(entry.is_compound());
    }

    #[test]
    fn test_inline_children() {
        let child = Entry::new(Id::new("child"), None, Children::None);
        let entry = Entry::new(
            Id::new("parent"),
            None,
            Children::Inline(vec![child.clone()]),
        );
        assert!(entry.is_compound());
        assert_eq!(entry.children().entries(), &[child]);
    }
}
