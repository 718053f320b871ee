/*
 * block.rs
 * Copyright (c) 2025 Posit, PBC
 */

use crate::node::Nodes;
use serde::{Deserialize, Serialize};

/// A named block (`#+BEGIN_name` ... `#+END_name`) whose content is kept
/// verbatim by the parser, not parsed into the tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    /// Block type as written in the source, e.g. "SRC" or "QUOTE".
    pub name: String,
    pub raw_content: String,
}

/// A colon-prefixed example line run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShortExample {
    pub example: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub content: String,
}

/// A property drawer; not surfaced in HTML output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Drawer {
    pub name: String,
    pub children: Nodes,
}

/// A footnote definition; not surfaced in HTML output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Footnote {
    pub label: String,
    pub children: Nodes,
}

/// An in-buffer setting (`#+KEY: value`); not surfaced in HTML output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Setting {
    pub key: String,
    pub value: String,
}
