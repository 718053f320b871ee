/*
 * options.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Export configuration.
 *
 * One immutable value per render call, threaded through the writer
 * context. Empty tag sets mean "no filter", so the accessors normalize
 * them to `None` and the rest of the engine never sees an empty set.
 */

use std::collections::BTreeSet;

/// Configuration for one HTML export call.
#[derive(Debug, Clone, Default)]
pub struct ExportConfig {
    /// Emit only the rendered body, without the document envelope.
    pub naked: bool,
    /// Heading tags that select subtrees for export.
    ///
    /// Callers are expected to clear this when no headline in the tree
    /// carries any of the tags (see `filter::resolve_include_tags`); the
    /// engine trusts that precondition.
    pub include_tags: Option<BTreeSet<String>>,
    /// Heading tags that force subtrees out of the export.
    pub exclude_tags: Option<BTreeSet<String>>,
    /// Document title for the envelope; a fixed placeholder is used when
    /// absent.
    pub title: Option<String>,
    /// Stylesheet URL for the envelope's link element.
    pub stylesheet_url: Option<String>,
}

impl ExportConfig {
    /// The include-tag set, with `Some(empty)` normalized to `None`.
    pub fn include_tags(&self) -> Option<&BTreeSet<String>> {
        self.include_tags.as_ref().filter(|tags| !tags.is_empty())
    }

    /// The exclude-tag set, with `Some(empty)` normalized to `None`.
    pub fn exclude_tags(&self) -> Option<&BTreeSet<String>> {
        self.exclude_tags.as_ref().filter(|tags| !tags.is_empty())
    }
}
