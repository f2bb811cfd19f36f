//! AST-to-model elaboration.
//!
//! Turns the parsed [`RawDocument`](crate::parser_types::RawDocument) into a
//! [`navtree_core::document::Document`]: names are interned, targets wrapped,
//! and source spans carried over for later validation.

use navtree_core::{
    document::Document,
    entry::{Children, Entry, Target},
    identifier::Id,
};

use crate::{
    error::{Diagnostic, ErrorCode},
    parser_types as types,
};

pub(crate) fn elaborate(raw: &types::RawDocument<'_>) -> Result<Document, Diagnostic> {
    let entries = raw.rows.iter().map(elaborate_row).collect();

    Document::new(raw.name.inner(), entries).map_err(|err| {
        Diagnostic::error(err.to_string())
            .with_code(ErrorCode::E300)
            .with_label(raw.name.span(), "not a JavaScript identifier")
    })
}

fn elaborate_row(row: &types::RawRow) -> Entry {
    let target = row.target.inner().as_ref().map(Target::new);

    let children = match &row.child {
        types::RawChild::Leaf => Children::None,
        types::RawChild::Reference(reference) => Children::Reference(reference.inner().clone()),
        types::RawChild::Rows(rows) => Children::Inline(rows.iter().map(elaborate_row).collect()),
    };

    Entry::new(Id::new(row.name.inner()), target, children).with_spans(row.span, row.target.span())
}
