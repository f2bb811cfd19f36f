//! Summary statistics for a parsed index.

use std::fmt;

use navtree_core::{document::Document, section::SectionKind};

/// Per-document entry counts, derived from the document's sections.
///
/// Counts cover the top-level entries only; inline children belong to their
/// parent's row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    compounds: usize,
    member_sections: Vec<usize>,
    total: usize,
}

impl Summary {
    /// Compute the summary of a document.
    pub fn of(document: &Document) -> Self {
        let mut compounds = 0;
        let mut member_sections = Vec::new();

        for section in document.sections() {
            match section.kind() {
                SectionKind::Compounds => compounds = section.len(),
                SectionKind::Members => member_sections.push(section.len()),
            }
        }

        Self {
            compounds,
            member_sections,
            total: document.entries().len(),
        }
    }

    /// Number of compound (child-bearing) entries.
    pub fn compounds(&self) -> usize {
        self.compounds
    }

    /// Entry count of each derived member section, in file order.
    pub fn member_sections(&self) -> &[usize] {
        &self.member_sections
    }

    /// Total number of top-level entries.
    pub fn total(&self) -> usize {
        self.total
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} compounds, member sections {:?}, {} entries",
            self.compounds, self.member_sections, self.total
        )
    }
}
