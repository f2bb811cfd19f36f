//! Canonical serializer for navigation-tree data files.
//!
//! The writer reproduces the generator's own formatting: header line
//! `var <name> =`, the opening `[` on its own line, one row per line with
//! `indent_width × depth` leading spaces, `[ "name", target, child ]`
//! framing, a comma after every row but the last in its array, and a final
//! `];` with no trailing newline unless configured. Strings are escaped
//! minimally (`\\` and `\"`), matching the generator's output, so
//! re-serializing a parsed file is byte-identical.

use navtree_core::{
    document::Document,
    entry::{Children, Entry},
};

use crate::config::FormatConfig;

/// Render a document in canonical form.
pub(crate) fn render(document: &Document, config: &FormatConfig) -> String {
    let mut out = String::new();

    out.push_str("var ");
    document.name().with_str(|name| out.push_str(name));
    out.push_str(" =\n[\n");

    render_rows(&mut out, document.entries(), 1, config);

    out.push_str("];");
    if config.trailing_newline() {
        out.push('\n');
    }
    out
}

fn render_rows(out: &mut String, entries: &[Entry], depth: usize, config: &FormatConfig) {
    let last = entries.len().saturating_sub(1);
    for (index, entry) in entries.iter().enumerate() {
        render_entry(out, entry, depth, config);
        if index != last {
            out.push(',');
        }
        out.push('\n');
    }
}

fn render_entry(out: &mut String, entry: &Entry, depth: usize, config: &FormatConfig) {
    push_indent(out, depth, config);
    out.push_str("[ ");

    entry.name().with_str(|name| push_quoted(out, name));
    out.push_str(", ");

    match entry.target() {
        Some(target) => push_quoted(out, target.as_str()),
        None => out.push_str("null"),
    }
    out.push_str(", ");

    match entry.children() {
        Children::None => out.push_str("null ]"),
        Children::Reference(reference) => {
            push_quoted(out, reference);
            out.push_str(" ]");
        }
        Children::Inline(children) => {
            out.push_str("[\n");
            render_rows(out, children, depth + 1, config);
            push_indent(out, depth, config);
            out.push_str("] ]");
        }
    }
}

fn push_indent(out: &mut String, depth: usize, config: &FormatConfig) {
    for _ in 0..depth * config.indent_width() {
        out.push(' ');
    }
}

fn push_quoted(out: &mut String, text: &str) {
    out.push('"');
    for ch in text.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            other => out.push(other),
        }
    }
    out.push('"');
}

#[cfg(test)]
mod tests {
    use navtree_core::{
        entry::{Children, Entry, Target},
        identifier::Id,
    };

    use super::*;

    fn leaf(name: &str, target: Option<&str>) -> Entry {
        Entry::new(Id::new(name), target.map(Target::new), Children::None)
    }

    fn document(name: &str, entries: Vec<Entry>) -> Document {
        Document::new(name, entries).expect("valid name")
    }

    #[test]
    fn test_render_empty() {
        let rendered = render(&document("_x", Vec::new()), &FormatConfig::default());
        assert_eq!(rendered, "var _x =\n[\n];");
    }

    #[test]
    fn test_render_leaf_rows() {
        let doc = document(
            "_astc_textures_8h",
            vec![
                leaf("FREE_CHECK", Some("_astc_textures_8h.html#abbb2fc8")),
                leaf("GL_CHECK", None),
            ],
        );
        let rendered = render(&doc, &FormatConfig::default());
        assert_eq!(
            rendered,
            "var _astc_textures_8h =\n\
             [\n\
             \x20   [ \"FREE_CHECK\", \"_astc_textures_8h.html#abbb2fc8\", null ],\n\
             \x20   [ \"GL_CHECK\", null, null ]\n\
             ];"
        );
    }

    #[test]
    fn test_render_reference_child() {
        let entry = Entry::new(
            Id::new("astc_header"),
            Some(Target::new("structastc__header.html")),
            Children::Reference("structastc__header".to_string()),
        );
        let rendered = render(&document("_v", vec![entry]), &FormatConfig::default());
        assert_eq!(
            rendered,
            "var _v =\n\
             [\n\
             \x20   [ \"astc_header\", \"structastc__header.html\", \"structastc__header\" ]\n\
             ];"
        );
    }

    #[test]
    fn test_render_nested_children() {
        let parent = Entry::new(
            Id::new("Demo"),
            Some(Target::new("index.html")),
            Children::Inline(vec![
                leaf("Classes", Some("annotated.html")),
                leaf("Files", Some("files.html")),
            ]),
        );
        let rendered = render(
            &document("NAVTREE", vec![parent]),
            &FormatConfig::new(2, false),
        );
        assert_eq!(
            rendered,
            "var NAVTREE =\n\
             [\n\
             \x20 [ \"Demo\", \"index.html\", [\n\
             \x20   [ \"Classes\", \"annotated.html\", null ],\n\
             \x20   [ \"Files\", \"files.html\", null ]\n\
             \x20 ] ]\n\
             ];"
        );
    }

    #[test]
    fn test_render_escapes() {
        let doc = document("_v", vec![leaf(r#"operator\"()"#, None)]);
        let rendered = render(&doc, &FormatConfig::default());
        assert!(rendered.contains(r#"[ "operator\\\"()", null, null ]"#));
    }

    #[test]
    fn test_trailing_newline() {
        let rendered = render(&document("_x", Vec::new()), &FormatConfig::new(4, true));
        assert_eq!(rendered, "var _x =\n[\n];\n");
    }
}
