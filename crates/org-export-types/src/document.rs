/*
 * document.rs
 * Copyright (c) 2025 Posit, PBC
 */

use crate::node::Nodes;
use serde::{Deserialize, Serialize};

/// The root of a parsed org document.
///
/// A document is just its ordered top-level nodes; title and other export
/// concerns live in the export configuration, not in the tree.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Document {
    pub children: Nodes,
}

impl Document {
    pub fn new(children: Nodes) -> Self {
        Self { children }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inline::Text;
    use crate::node::Node;

    // The JSON shape below is the on-disk tree contract the CLI reads;
    // variant names are serde's default external tags.
    #[test]
    fn test_tree_json_contract() {
        let doc = Document::new(vec![Node::Text(Text::plain("hello"))]);
        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["children"][0]["Text"]["text"], "hello");
        assert_eq!(json["children"][0]["Text"]["style"], "None");

        let back: Document = serde_json::from_value(json).unwrap();
        assert_eq!(back, doc);
    }

    #[test]
    fn test_unit_variant_round_trips() {
        let doc = Document::new(vec![Node::TableVLine]);
        let json = serde_json::to_string(&doc).unwrap();
        let back: Document = serde_json::from_str(&json).unwrap();
        assert_eq!(back, doc);
    }
}
