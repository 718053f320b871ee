/*
 * headline.rs
 * Copyright (c) 2025 Posit, PBC
 */

use crate::node::{Node, Nodes};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A titled, leveled section node.
///
/// `tags` are the headline's own tags only; parsers do not propagate
/// ancestor tags down, and the export engine relies on that.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Headline {
    /// Heading depth, 1-based. Consistency with nesting is the parser's
    /// responsibility; consumers trust it.
    pub level: u32,
    /// The heading title, typically a `Text` node.
    pub title: Box<Node>,
    pub tags: BTreeSet<String>,
    /// The section body: content nodes and nested headlines.
    pub children: Nodes,
}

impl Headline {
    pub fn new(level: u32, title: Node) -> Self {
        Self {
            level,
            title: Box::new(title),
            tags: BTreeSet::new(),
            children: Vec::new(),
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_children(mut self, children: Nodes) -> Self {
        self.children = children;
        self
    }
}
