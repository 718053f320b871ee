/*
 * node.rs
 * Copyright (c) 2025 Posit, PBC
 */

use crate::block::{Block, Comment, Drawer, Footnote, Setting, ShortExample};
use crate::custom::CustomNode;
use crate::document::Document;
use crate::headline::Headline;
use crate::inline::{Link, RadioTarget, Target, Text, TimeRange, Timestamp};
use crate::list::{List, ListItem};
use crate::table::{Table, TableCell, TableRow};
use serde::{Deserialize, Serialize};

/// A single node in the parsed org document tree.
///
/// The union is closed: every kind a parser can produce has a variant
/// here, and `Custom` carries anything newer than this crate so that
/// consumers can degrade gracefully instead of failing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    Document(Document),
    Headline(Headline),
    Block(Block),
    ShortExample(ShortExample),
    Comment(Comment),
    Drawer(Drawer),
    Footnote(Footnote),
    List(List),
    ListItem(ListItem),
    RadioTarget(RadioTarget),
    Setting(Setting),
    Table(Table),
    TableRow(TableRow),
    TableCell(TableCell),
    TableVLine,
    Target(Target),
    Text(Text),
    Link(Link),
    TimeRange(TimeRange),
    Timestamp(Timestamp),

    /// Forward-compatibility arm for node kinds this crate does not know.
    ///
    /// Parsers ahead of this crate serialize unknown kinds as `Custom`
    /// with the kind name and whatever children they parsed.
    Custom(CustomNode),
}

pub type Nodes = Vec<Node>;

impl Node {
    /// The kind name of this node, as a parser would report it.
    pub fn kind(&self) -> &str {
        match self {
            Node::Document(_) => "Document",
            Node::Headline(_) => "Headline",
            Node::Block(_) => "Block",
            Node::ShortExample(_) => "ShortExample",
            Node::Comment(_) => "Comment",
            Node::Drawer(_) => "Drawer",
            Node::Footnote(_) => "Footnote",
            Node::List(_) => "List",
            Node::ListItem(_) => "ListItem",
            Node::RadioTarget(_) => "RadioTarget",
            Node::Setting(_) => "Setting",
            Node::Table(_) => "Table",
            Node::TableRow(_) => "TableRow",
            Node::TableCell(_) => "TableCell",
            Node::TableVLine => "TableVLine",
            Node::Target(_) => "Target",
            Node::Text(_) => "Text",
            Node::Link(_) => "Link",
            Node::TimeRange(_) => "TimeRange",
            Node::Timestamp(_) => "Timestamp",
            Node::Custom(custom) => &custom.kind,
        }
    }

    /// The node's ordered children, empty for leaf kinds.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Document(d) => &d.children,
            Node::Headline(h) => &h.children,
            Node::Drawer(d) => &d.children,
            Node::Footnote(f) => &f.children,
            Node::List(l) => &l.children,
            Node::ListItem(i) => &i.children,
            Node::Table(t) => &t.children,
            Node::TableRow(r) => &r.children,
            Node::TableCell(c) => &c.children,
            Node::Text(t) => &t.children,
            Node::Custom(c) => &c.children,
            _ => &[],
        }
    }
}
