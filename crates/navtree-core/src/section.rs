//! Derived sections of a navigation index.
//!
//! The data file format carries no category markers: struct references,
//! macros, typedefs, functions, and variables are distinguishable only by
//! shape and ordering. The generator emits child-bearing (compound) entries
//! first, then each member category as an alphabetically sorted group. A
//! group boundary is therefore visible exactly where the sort order resets.
//!
//! [`partition`] reconstructs that grouping: the leading compound run forms
//! one [`SectionKind::Compounds`] section, and the remaining entries are
//! split into maximal runs that are non-decreasing under
//! [`order::folded_cmp`](crate::order::folded_cmp), one
//! [`SectionKind::Members`] section per run. Two adjacent categories whose
//! boundary happens not to break the order are indistinguishable from a
//! single category; this is a limit of the format, not of the parser.

use std::{cmp::Ordering, ops::Range};

use log::debug;

use crate::entry::Entry;

/// The kind of a derived section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    /// The leading run of child-bearing entries (struct/class references).
    Compounds,
    /// One sorted run of leaf member entries (macros, typedefs, ...).
    Members,
}

/// A contiguous range of entries forming one derived section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    kind: SectionKind,
    range: Range<usize>,
}

impl Section {
    fn new(kind: SectionKind, range: Range<usize>) -> Self {
        Self { kind, range }
    }

    /// The section kind.
    pub fn kind(&self) -> SectionKind {
        self.kind
    }

    /// Index range into the document's entry slice.
    pub fn range(&self) -> Range<usize> {
        self.range.clone()
    }

    /// Number of entries in the section.
    pub fn len(&self) -> usize {
        self.range.len()
    }

    /// Whether the section is empty (never produced by [`partition`]).
    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }
}

/// Partition a flat entry list into derived sections.
///
/// The leading compound entries form a single `Compounds` section; the
/// rest is split into maximal case-fold-sorted runs of `Members`. Equal
/// names continue a run, since overloads repeat a name with distinct
/// anchors.
pub fn partition(entries: &[Entry]) -> Vec<Section> {
    let mut sections = Vec::new();

    let compounds_end = entries
        .iter()
        .position(|entry| !entry.is_compound())
        .unwrap_or(entries.len());
    if compounds_end > 0 {
        sections.push(Section::new(SectionKind::Compounds, 0..compounds_end));
    }

    let mut start = compounds_end;
    for i in compounds_end + 1..entries.len() {
        let order = entries[i - 1].name().folded_cmp(&entries[i].name());
        if order == Ordering::Greater {
            sections.push(Section::new(SectionKind::Members, start..i));
            start = i;
        }
    }
    if start < entries.len() {
        sections.push(Section::new(SectionKind::Members, start..entries.len()));
    }

    debug!(sections = sections.len(), entries = entries.len(); "Partitioned entries");
    sections
}
