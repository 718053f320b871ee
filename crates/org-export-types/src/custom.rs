/*
 * custom.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Forward-compatibility node for kinds this crate does not know.
 */

use crate::node::Nodes;
use serde::{Deserialize, Serialize};

/// A node of a kind newer than this crate.
///
/// Consumers that have no handler for `kind` are expected to fall back to
/// the children and report the kind name as a diagnostic rather than fail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomNode {
    /// The kind name as the parser reported it.
    pub kind: String,
    pub children: Nodes,
}
