/*
 * list.rs
 * Copyright (c) 2025 Posit, PBC
 */

use crate::node::{Node, Nodes};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ListKind {
    Description,
    Ordered,
    Unordered,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct List {
    pub kind: ListKind,
    /// Item nodes, normally all `ListItem`.
    pub children: Nodes,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListItem {
    /// Description term for items in a description list.
    pub term: Option<Box<Node>>,
    /// Checkbox state marker as written in the source, e.g. "X", "-" or " ".
    pub check_state: Option<String>,
    /// The item body.
    pub children: Nodes,
}

impl ListItem {
    pub fn new(children: Nodes) -> Self {
        Self {
            term: None,
            check_state: None,
            children,
        }
    }
}
