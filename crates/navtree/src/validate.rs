//! Structural lints over a parsed document.
//!
//! These checks verify the invariants a generator-emitted index always
//! satisfies: unique targets, unique (name, target) rows, a single leading
//! group of compound references in alphabetical order, and optionally a
//! fixed number of member sections. Violations produce the parser crate's
//! [`Diagnostic`] values with labeled source spans.

use std::cmp::Ordering;

use indexmap::IndexMap;
use log::debug;

use navtree_core::{
    document::Document, entry::Entry, identifier::Id, section::SectionKind, span::Span,
};
use navtree_parser::error::{Diagnostic, DiagnosticCollector, ErrorCode};

use crate::config::LintConfig;

/// Run all lints over a document.
///
/// Returns every diagnostic found, errors and warnings, in check order.
pub(crate) fn lint(document: &Document, config: &LintConfig) -> Vec<Diagnostic> {
    let mut collector = DiagnosticCollector::new();

    check_duplicate_targets(document, &mut collector);
    check_duplicate_entries(document, &mut collector);
    check_compound_placement(document, &mut collector);
    check_compound_order(document, &mut collector);
    check_member_sections(document, config, &mut collector);
    check_unlinked_leaves(document, &mut collector);

    let diagnostics = collector.into_diagnostics();
    debug!(diagnostics = diagnostics.len(); "Lint finished");
    diagnostics
}

/// Visit every entry in the document, inline children included.
fn walk<'a>(entries: &'a [Entry], visit: &mut impl FnMut(&'a Entry)) {
    for entry in entries {
        visit(entry);
        walk(entry.children().entries(), visit);
    }
}

/// E200: every non-null target must be unique within the file.
///
/// Rows that duplicate the name as well are left to the duplicate-entry
/// check, which reports the whole row once.
fn check_duplicate_targets(document: &Document, collector: &mut DiagnosticCollector) {
    let mut seen: IndexMap<&str, (Id, Span)> = IndexMap::new();

    walk(document.entries(), &mut |entry| {
        let Some(target) = entry.target() else {
            return;
        };
        match seen.get(target.as_str()) {
            Some((first_name, _)) if *first_name == entry.name() => {}
            Some((_, first_span)) => {
                collector.emit(
                    Diagnostic::error(format!(
                        "target `{}` is used more than once",
                        target.as_str()
                    ))
                    .with_code(ErrorCode::E200)
                    .with_label(entry.target_span(), "duplicate target")
                    .with_secondary_label(*first_span, "first used here")
                    .with_help("every target must be unique within the file"),
                );
            }
            None => {
                seen.insert(target.as_str(), (entry.name(), entry.target_span()));
            }
        }
    });
}

/// E201: no two rows may share both name and target.
fn check_duplicate_entries(document: &Document, collector: &mut DiagnosticCollector) {
    let mut seen: IndexMap<(Id, Option<&str>), Span> = IndexMap::new();

    walk(document.entries(), &mut |entry| {
        let key = (entry.name(), entry.target().map(|t| t.as_str()));
        match seen.get(&key) {
            Some(first_span) => {
                collector.emit(
                    Diagnostic::error(format!("entry `{}` is duplicated", entry.name()))
                        .with_code(ErrorCode::E201)
                        .with_label(entry.span(), "duplicate entry")
                        .with_secondary_label(*first_span, "first defined here")
                        .with_help("remove the duplicated row"),
                );
            }
            None => {
                seen.insert(key, entry.span());
            }
        }
    });
}

/// E202: compound references form a single leading group.
fn check_compound_placement(document: &Document, collector: &mut DiagnosticCollector) {
    let entries = document.entries();
    let Some(first_member) = entries.iter().position(|entry| !entry.is_compound()) else {
        return;
    };

    for entry in &entries[first_member..] {
        if entry.is_compound() {
            collector.emit(
                Diagnostic::error(format!(
                    "compound reference `{}` appears after member entries",
                    entry.name()
                ))
                .with_code(ErrorCode::E202)
                .with_label(entry.span(), "compound reference here")
                .with_secondary_label(entries[first_member].span(), "first member entry here")
                .with_help("compound references belong at the top of the file"),
            );
        }
    }
}

/// E203: the compound group is sorted.
fn check_compound_order(document: &Document, collector: &mut DiagnosticCollector) {
    let entries = document.entries();
    let compounds_end = entries
        .iter()
        .position(|entry| !entry.is_compound())
        .unwrap_or(entries.len());

    for pair in entries[..compounds_end].windows(2) {
        if pair[0].name().folded_cmp(&pair[1].name()) == Ordering::Greater {
            collector.emit(
                Diagnostic::error(format!(
                    "compound reference `{}` is out of alphabetical order",
                    pair[1].name()
                ))
                .with_code(ErrorCode::E203)
                .with_label(pair[1].span(), "out of order")
                .with_secondary_label(pair[0].span(), "sorts after this entry")
                .with_help("compound references are sorted case-insensitively"),
            );
        }
    }
}

/// E204: the derived member section count matches the configured expectation.
fn check_member_sections(
    document: &Document,
    config: &LintConfig,
    collector: &mut DiagnosticCollector,
) {
    let Some(expected) = config.expected_member_sections() else {
        return;
    };

    let member_runs: Vec<_> = document
        .sections()
        .into_iter()
        .filter(|section| section.kind() == SectionKind::Members)
        .collect();
    if member_runs.len() == expected {
        return;
    }

    let mut diag = Diagnostic::error(format!(
        "expected {expected} member sections, found {}",
        member_runs.len()
    ))
    .with_code(ErrorCode::E204)
    .with_help("a member group that breaks alphabetical order splits into extra sections");

    if member_runs.len() > expected {
        let run = &member_runs[expected];
        let entry = &document.entries()[run.range().start];
        diag = diag.with_label(entry.span(), "this entry starts an unexpected section");
    } else if let Some(last) = document.entries().last() {
        diag = diag.with_label(last.span(), "sections end here");
    }

    collector.emit(diag);
}

/// Warning: a leaf entry without a target cannot be navigated to.
fn check_unlinked_leaves(document: &Document, collector: &mut DiagnosticCollector) {
    walk(document.entries(), &mut |entry| {
        if entry.target().is_none() && !entry.is_compound() {
            collector.emit(
                Diagnostic::warning(format!("entry `{}` has no target", entry.name()))
                    .with_label(entry.target_span(), "cannot be navigated to"),
            );
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lint_source(source: &str) -> Vec<Diagnostic> {
        let document = navtree_parser::parse(source).expect("should parse");
        lint(&document, &LintConfig::default())
    }

    fn codes(diagnostics: &[Diagnostic]) -> Vec<Option<ErrorCode>> {
        diagnostics.iter().map(Diagnostic::code).collect()
    }

    #[test]
    fn test_clean_document() {
        let source = r#"var _v =
[
    [ "astc_header", "structastc__header.html", "structastc__header" ],
    [ "GL_CHECK", "_v.html#a1", null ],
    [ "LOG_TAG", "_v.html#a2", null ]
];"#;
        assert!(lint_source(source).is_empty());
    }

    #[test]
    fn test_duplicate_target() {
        let source = r#"var _v =
[
    [ "GL_CHECK", "_v.html#a1", null ],
    [ "LOG_TAG", "_v.html#a1", null ]
];"#;
        let diagnostics = lint_source(source);
        assert_eq!(codes(&diagnostics), vec![Some(ErrorCode::E200)]);
        // Primary label sits on the second use; secondary on the first.
        assert_eq!(diagnostics[0].labels().len(), 2);
    }

    #[test]
    fn test_duplicate_entry_reported_once() {
        let source = r#"var _v =
[
    [ "GL_CHECK", "_v.html#a1", null ],
    [ "GL_CHECK", "_v.html#a1", null ]
];"#;
        // Identical rows trigger the duplicate-entry check, not the
        // duplicate-target check.
        let diagnostics = lint_source(source);
        assert_eq!(codes(&diagnostics), vec![Some(ErrorCode::E201)]);
    }

    #[test]
    fn test_overloads_are_not_duplicates() {
        let source = r#"var _v =
[
    [ "load_shader", "_v.html#a1", null ],
    [ "load_shader", "_v.html#a2", null ]
];"#;
        assert!(lint_source(source).is_empty());
    }

    #[test]
    fn test_misplaced_compound() {
        let source = r#"var _v =
[
    [ "GL_CHECK", "_v.html#a1", null ],
    [ "astc_header", "structastc__header.html", "structastc__header" ]
];"#;
        let diagnostics = lint_source(source);
        assert_eq!(codes(&diagnostics), vec![Some(ErrorCode::E202)]);
    }

    #[test]
    fn test_unsorted_compounds() {
        let source = r#"var _v =
[
    [ "texture_set", "structtexture__set.html", "structtexture__set" ],
    [ "astc_header", "structastc__header.html", "structastc__header" ],
    [ "GL_CHECK", "_v.html#a1", null ]
];"#;
        let diagnostics = lint_source(source);
        assert_eq!(codes(&diagnostics), vec![Some(ErrorCode::E203)]);
    }

    #[test]
    fn test_section_count_mismatch() {
        let source = r#"var _v =
[
    [ "MALLOC_CHECK", "_v.html#a1", null ],
    [ "create_program", "_v.html#a2", null ]
];"#;
        let document = navtree_parser::parse(source).expect("should parse");

        // Two sorted runs derive from this file; expecting one flags it.
        let diagnostics = lint(&document, &LintConfig::new(Some(1)));
        assert_eq!(codes(&diagnostics), vec![Some(ErrorCode::E204)]);

        let diagnostics = lint(&document, &LintConfig::new(Some(2)));
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_unlinked_leaf_is_a_warning() {
        let source = r#"var _v =
[
    [ "orphan", null, null ]
];"#;
        let diagnostics = lint_source(source);
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].severity().is_warning());
        assert_eq!(diagnostics[0].code(), None);
    }

    #[test]
    fn test_duplicate_target_found_in_nested_children() {
        let source = r#"var NAVTREE =
[
  [ "Demo", "index.html", [
    [ "Files", "files.html", null ],
    [ "More", "files.html", null ]
  ] ]
];"#;
        let diagnostics = lint_source(source);
        assert_eq!(codes(&diagnostics), vec![Some(ErrorCode::E200)]);
    }
}
