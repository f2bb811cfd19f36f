//! End-to-end properties over a real generator-emitted index fragment.
//!
//! The fixture is the navigation fragment for an ASTC texture demo header:
//! 3 struct references followed by four member groups (41 macros, 2
//! typedefs, 4 functions, 2 variables), 52 rows in total.

use proptest::prelude::*;

use navtree::{IndexBuilder, Summary, config::AppConfig};
use navtree_core::{
    document::Document,
    entry::{Children, Entry, Target},
    identifier::Id,
};

const ASTC_FIXTURE: &str = include_str!("data/astc_textures_8h.js");

#[test]
fn fixture_round_trips_byte_identically() {
    let builder = IndexBuilder::default();
    let document = builder.parse(ASTC_FIXTURE).expect("fixture should parse");
    assert_eq!(builder.render_js(&document), ASTC_FIXTURE);
}

#[test]
fn fixture_is_clean_under_lints() {
    let builder = IndexBuilder::default();
    let document = builder.parse(ASTC_FIXTURE).expect("fixture should parse");

    builder
        .check(&document, ASTC_FIXTURE)
        .expect("fixture should satisfy every invariant");
    assert!(builder.lint(&document).is_empty());
}

#[test]
fn fixture_summary_matches_the_enumerable_counts() {
    let builder = IndexBuilder::default();
    let document = builder.parse(ASTC_FIXTURE).expect("fixture should parse");
    let summary = Summary::of(&document);

    assert_eq!(document.name(), "_astc_textures_8h");
    assert_eq!(summary.compounds(), 3);
    assert_eq!(summary.member_sections(), &[41, 2, 4, 2]);
    assert_eq!(summary.total(), 52);
}

#[test]
fn fixture_anchors_are_unique() {
    let document = IndexBuilder::default()
        .parse(ASTC_FIXTURE)
        .expect("fixture should parse");

    let mut anchors: Vec<&str> = document
        .entries()
        .iter()
        .filter_map(|entry| entry.target().and_then(Target::anchor))
        .collect();
    let total = anchors.len();
    anchors.sort_unstable();
    anchors.dedup();
    assert_eq!(anchors.len(), total);
}

#[test]
fn fixture_compound_rows_come_first() {
    let document = IndexBuilder::default()
        .parse(ASTC_FIXTURE)
        .expect("fixture should parse");

    let entries = document.entries();
    assert!(entries[..3].iter().all(Entry::is_compound));
    assert!(entries[3..].iter().all(|entry| !entry.is_compound()));
}

// Strategy for generated documents: names, optional targets, and an
// occasional reference or nested child list.
fn entry_strategy(depth: u32) -> BoxedStrategy<Entry> {
    let name = "[A-Za-z_][A-Za-z0-9_]{0,12}";
    let target = proptest::option::of("[a-z0-9_]{1,10}\\.html(#a[0-9a-f]{1,8})?");

    let leaf = (name, target.clone()).prop_map(|(name, target)| {
        Entry::new(Id::new(&name), target.map(Target::new), Children::None)
    });

    if depth == 0 {
        return leaf.boxed();
    }

    let reference = (name, target.clone(), "[a-z_]{1,10}").prop_map(|(name, target, child)| {
        Entry::new(
            Id::new(&name),
            target.map(Target::new),
            Children::Reference(child),
        )
    });

    let nested = (
        name,
        target,
        prop::collection::vec(entry_strategy(depth - 1), 1..4),
    )
        .prop_map(|(name, target, children)| {
            Entry::new(
                Id::new(&name),
                target.map(Target::new),
                Children::Inline(children),
            )
        });

    prop_oneof![4 => leaf, 1 => reference, 1 => nested].boxed()
}

proptest! {
    // Rendering is a fixpoint: whatever the writer emits, the parser reads
    // back to a model that renders identically.
    #[test]
    fn prop_render_parse_render_fixpoint(
        entries in prop::collection::vec(entry_strategy(2), 0..12),
    ) {
        let document = Document::new("_generated", entries).expect("valid name");
        let builder = IndexBuilder::new(AppConfig::default());

        let first = builder.render_js(&document);
        let reparsed = builder.parse(&first).expect("writer output should parse");
        let second = builder.render_js(&reparsed);

        prop_assert_eq!(first, second);
    }
}
