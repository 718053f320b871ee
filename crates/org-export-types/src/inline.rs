/*
 * inline.rs
 * Copyright (c) 2025 Posit, PBC
 */

use crate::node::{Node, Nodes};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TextStyle {
    None,
    Bold,
    Italic,
    Underline,
    Strike,
    Code,
    Verbatim,
}

/// A run of styled text with optional nested inline children.
///
/// Children render after the text itself, inside the same style wrapper
/// when one applies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Text {
    pub style: TextStyle,
    pub text: String,
    pub children: Nodes,
}

impl Text {
    /// An unstyled text node with no children.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            style: TextStyle::None,
            text: text.into(),
            children: Vec::new(),
        }
    }

    pub fn styled(style: TextStyle, text: impl Into<String>) -> Self {
        Self {
            style,
            text: text.into(),
            children: Vec::new(),
        }
    }
}

/// A hyperlink, either to an absolute URL or to a named target in the
/// same document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    /// URL or in-document target name. The writer distinguishes the two
    /// by whether the string starts with a URL scheme.
    pub target: String,
    /// Visible link content; the raw target string is shown when absent.
    pub description: Option<Box<Node>>,
}

/// A named anchor that links can reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Target {
    pub name: String,
}

/// A radio target; not surfaced in HTML output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadioTarget {
    pub name: String,
}

/// A timestamp, pre-formatted for display by the parser.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Timestamp {
    pub value: String,
}

/// A time range, pre-formatted for display by the parser.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeRange {
    pub value: String,
}
