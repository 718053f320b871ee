/*
 * table.rs
 * Copyright (c) 2025 Posit, PBC
 */

use crate::node::Nodes;
use serde::{Deserialize, Serialize};

/// A table; children are `TableRow` nodes (and `TableVLine` separators,
/// which carry no renderable content).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub children: Nodes,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    pub children: Nodes,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableCell {
    pub children: Nodes,
}
