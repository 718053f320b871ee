/*
 * lib.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Org document tree type definitions for org-export.
 *
 * This crate provides pure data type definitions for the parsed org
 * document tree. It has minimal dependencies (serde only) and can be used
 * by any crate that needs to build or consume org trees: parsers produce
 * them, the HTML export engine consumes them.
 *
 * The tree is a closed tagged union (`Node`) plus a `Document` root. The
 * engine treats it as read-only; nothing here carries render state.
 */

pub mod block;
pub mod custom;
pub mod document;
pub mod headline;
pub mod inline;
pub mod list;
pub mod node;
pub mod table;

// Re-export commonly used types at the crate root
pub use block::{Block, Comment, Drawer, Footnote, Setting, ShortExample};
pub use custom::CustomNode;
pub use document::Document;
pub use headline::Headline;
pub use inline::{Link, RadioTarget, Target, Text, TextStyle, TimeRange, Timestamp};
pub use list::{List, ListItem, ListKind};
pub use node::{Node, Nodes};
pub use table::{Table, TableCell, TableRow};
