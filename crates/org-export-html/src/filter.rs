/*
 * filter.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Tag-based subtree selection for headline export.
 *
 * Consulted by the HTML writer at every headline. Exclude tags win over
 * include tags; include tags select whole subtrees; a headline that only
 * *contains* a selected headline renders as a title-only skeleton so the
 * selected subtree keeps its hierarchy context.
 */

use crate::options::ExportConfig;
use org_export_types::{Document, Headline, Node};
use std::collections::BTreeSet;

/// What the writer should do with one headline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Render the heading and its body in full.
    Full {
        /// This headline carried an include tag itself, which satisfies
        /// the include filter for its whole subtree.
        satisfies_include: bool,
    },
    /// Render the heading title only, keeping just the direct headline
    /// children whose own subtree contains a selected tag.
    Skeleton,
    /// Render nothing.
    Skip,
}

/// Classify one headline against the configured tag filters.
///
/// `include_satisfied` is true inside a subtree whose root already
/// matched an include tag; the include filter is inert there and only
/// exclude tags still prune.
pub fn classify(
    headline: &Headline,
    config: &ExportConfig,
    include_satisfied: bool,
) -> Disposition {
    // Exclusion is checked first and wins over any inclusion.
    if let Some(exclude) = config.exclude_tags() {
        if intersects(&headline.tags, exclude) {
            return Disposition::Skip;
        }
    }

    let include = match config.include_tags() {
        Some(include) if !include_satisfied => include,
        _ => {
            return Disposition::Full {
                satisfies_include: false,
            };
        }
    };

    if intersects(&headline.tags, include) {
        return Disposition::Full {
            satisfies_include: true,
        };
    }

    if subtree_selects(&headline.children, include) {
        Disposition::Skeleton
    } else {
        Disposition::Skip
    }
}

/// True if the headline's own subtree contains a selected tag: its own
/// tags, or any descendant headline's tags. This is the retention test
/// for skeleton children.
pub fn headline_selects(headline: &Headline, selected: &BTreeSet<String>) -> bool {
    intersects(&headline.tags, selected) || subtree_selects(&headline.children, selected)
}

/// True if any headline anywhere under `nodes` carries one of `selected`.
pub fn subtree_selects(nodes: &[Node], selected: &BTreeSet<String>) -> bool {
    nodes.iter().any(|node| {
        if let Node::Headline(headline) = node {
            if intersects(&headline.tags, selected) {
                return true;
            }
        }
        subtree_selects(node.children(), selected)
    })
}

/// Normalize a configuration against a concrete tree: the include set is
/// dropped when no headline in the tree carries any of its tags, so a
/// stray `--include-tag` does not select an empty document.
///
/// The engine assumes its caller has done this; the CLI calls it before
/// rendering.
pub fn resolve_include_tags(document: &Document, config: &ExportConfig) -> ExportConfig {
    let mut resolved = config.clone();
    if let Some(include) = config.include_tags() {
        if !subtree_selects(&document.children, include) {
            resolved.include_tags = None;
        }
    }
    resolved
}

fn intersects(tags: &BTreeSet<String>, selected: &BTreeSet<String>) -> bool {
    tags.iter().any(|tag| selected.contains(tag))
}
