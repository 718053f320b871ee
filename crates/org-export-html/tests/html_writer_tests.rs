//! Tests for the HTML writer's tag filtering.
//!
//! These tests exercise include/exclude tag selection end to end: full
//! subtree inclusion, exclusion precedence, and the title-only skeleton
//! rendering of ancestors above a selected headline.

use org_export_html::filter::resolve_include_tags;
use org_export_html::{ExportConfig, render};
use org_export_types::{Document, Headline, Node, Text};
use std::collections::BTreeSet;

fn headline(level: u32, title: &str, tags: &[&str], children: Vec<Node>) -> Node {
    Node::Headline(
        Headline::new(level, Node::Text(Text::plain(title)))
            .with_tags(tags.iter().copied())
            .with_children(children),
    )
}

fn text(s: &str) -> Node {
    Node::Text(Text::plain(s))
}

fn tags(names: &[&str]) -> Option<BTreeSet<String>> {
    Some(names.iter().map(|t| t.to_string()).collect())
}

fn render_naked(doc: &Document, config: ExportConfig) -> String {
    let config = ExportConfig {
        naked: true,
        ..config
    };
    render(doc, &config).expect("render failed").html
}

/// A document with a selected headline two levels below an untagged one:
///
/// * Top            (untagged, has body text)
///   * Middle       (untagged, has body text)
///     * Deep       (:export:, has body text)
///   * Sibling      (untagged, has body text)
fn deep_selection_doc() -> Document {
    let deep = headline(3, "Deep", &["export"], vec![text("deep body")]);
    let middle = headline(2, "Middle", &[], vec![text("middle body"), deep]);
    let sibling = headline(2, "Sibling", &[], vec![text("sibling body")]);
    let top = headline(1, "Top", &[], vec![text("top body"), middle, sibling]);
    Document::new(vec![top])
}

#[test]
fn test_no_filters_renders_everything() {
    let html = render_naked(&deep_selection_doc(), ExportConfig::default());
    assert!(html.contains("<h1>Top</h1>"));
    assert!(html.contains("top body"));
    assert!(html.contains("sibling body"));
    assert!(html.contains("deep body"));
}

#[test]
fn test_partial_inclusion_renders_skeleton_above_match() {
    let config = ExportConfig {
        include_tags: tags(&["export"]),
        ..Default::default()
    };
    let html = render_naked(&deep_selection_doc(), config);

    // Ancestors of the match keep their headings only.
    assert!(html.contains("<h1>Top</h1>"));
    assert!(html.contains("<h2>Middle</h2>"));
    assert!(!html.contains("top body"));
    assert!(!html.contains("middle body"));

    // The untagged sibling branch disappears entirely.
    assert!(!html.contains("Sibling"));
    assert!(!html.contains("sibling body"));

    // The selected headline renders in full.
    assert!(html.contains("<h3>Deep</h3>"));
    assert!(html.contains("deep body"));
}

#[test]
fn test_included_subtree_renders_completely() {
    // The matched headline's untagged descendants are part of the
    // selected subtree and render in full.
    let grandchild = headline(3, "Grandchild", &[], vec![text("grandchild body")]);
    let child = headline(2, "Child", &[], vec![text("child body"), grandchild]);
    let selected = headline(1, "Selected", &["export"], vec![text("selected body"), child]);
    let doc = Document::new(vec![selected]);

    let config = ExportConfig {
        include_tags: tags(&["export"]),
        ..Default::default()
    };
    let html = render_naked(&doc, config);

    assert!(html.contains("selected body"));
    assert!(html.contains("<h2>Child</h2>"));
    assert!(html.contains("child body"));
    assert!(html.contains("grandchild body"));
}

#[test]
fn test_exclude_tag_drops_subtree() {
    let secret = headline(2, "Secret", &["noexport"], vec![text("secret body")]);
    let public = headline(2, "Public", &[], vec![text("public body")]);
    let top = headline(1, "Top", &[], vec![secret, public]);
    let doc = Document::new(vec![top]);

    let config = ExportConfig {
        exclude_tags: tags(&["noexport"]),
        ..Default::default()
    };
    let html = render_naked(&doc, config);

    assert!(!html.contains("Secret"));
    assert!(!html.contains("secret body"));
    assert!(html.contains("public body"));
}

#[test]
fn test_exclude_beats_include_on_same_headline() {
    let both = headline(
        1,
        "Both",
        &["export", "noexport"],
        vec![text("conflicted body")],
    );
    let doc = Document::new(vec![both]);

    let config = ExportConfig {
        include_tags: tags(&["export"]),
        exclude_tags: tags(&["noexport"]),
        ..Default::default()
    };
    let html = render_naked(&doc, config);
    assert_eq!(html, "");
}

#[test]
fn test_exclude_prunes_inside_included_subtree() {
    let secret = headline(2, "Secret", &["noexport"], vec![text("secret body")]);
    let selected = headline(1, "Selected", &["export"], vec![text("kept body"), secret]);
    let doc = Document::new(vec![selected]);

    let config = ExportConfig {
        include_tags: tags(&["export"]),
        exclude_tags: tags(&["noexport"]),
        ..Default::default()
    };
    let html = render_naked(&doc, config);

    assert!(html.contains("kept body"));
    assert!(!html.contains("secret body"));
}

#[test]
fn test_skeleton_drops_non_selecting_headline_children() {
    // Under a skeleton heading, only the headline children leading to a
    // match survive; other headline children are dropped even though
    // they are headings.
    let matching = headline(2, "Matching", &["export"], vec![text("matching body")]);
    let unrelated = headline(2, "Unrelated", &[], vec![text("unrelated body")]);
    let top = headline(1, "Top", &[], vec![matching, unrelated]);
    let doc = Document::new(vec![top]);

    let config = ExportConfig {
        include_tags: tags(&["export"]),
        ..Default::default()
    };
    let html = render_naked(&doc, config);

    assert!(html.contains("<h1>Top</h1>"));
    assert!(html.contains("matching body"));
    assert!(!html.contains("Unrelated"));
}

#[test]
fn test_resolve_include_tags_end_to_end() {
    // No headline carries the tag, so a caller that normalizes first
    // renders the whole document instead of an empty one.
    let doc = deep_selection_doc();
    let config = ExportConfig {
        include_tags: tags(&["unused"]),
        ..Default::default()
    };

    let raw = render_naked(&doc, config.clone());
    assert_eq!(raw, "");

    let resolved = resolve_include_tags(&doc, &config);
    let html = render_naked(&doc, resolved);
    assert!(html.contains("top body"));
    assert!(html.contains("deep body"));
}

#[test]
fn test_rendering_is_deterministic() {
    let config = ExportConfig {
        naked: true,
        include_tags: tags(&["export"]),
        ..Default::default()
    };
    let doc = deep_selection_doc();
    let first = render(&doc, &config).expect("render failed").html;
    let second = render(&doc, &config).expect("render failed").html;
    assert_eq!(first, second);
}
