//! Property tests for tree indexing.

use proptest::prelude::*;
use serde_json::Value;

use crate::trees::{build, forest, to_json};

/// `refKey` fields in depth-first pre-order
fn written_keys(nodes: &[Value], out: &mut Vec<String>) {
    for node in nodes {
        if let Some(key) = node["refKey"].as_str() {
            out.push(key.to_string());
        }
        if let Some(children) = node["children"].as_array() {
            written_keys(children, out);
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: every node gets exactly one entry, iterated in pre-order,
    /// and the key written onto the caller's node matches it.
    #[test]
    fn property_index_covers_tree_in_pre_order(shape in forest()) {
        let mut tree = to_json(&shape);
        let index = build(&mut tree, &[]);

        let mut written = Vec::new();
        written_keys(&tree, &mut written);
        let indexed: Vec<String> = index.keys().map(ToString::to_string).collect();

        prop_assert_eq!(indexed, written);
    }

    /// PROPERTY: rebuilding from the same tree yields an equal index and
    /// leaves the tree unchanged.
    #[test]
    fn property_rebuild_is_idempotent(shape in forest()) {
        let mut tree = to_json(&shape);
        let first = build(&mut tree, &[]);
        let snapshot = tree.clone();
        let second = build(&mut tree, &[]);

        prop_assert_eq!(first, second);
        prop_assert_eq!(tree, snapshot);
    }

    /// PROPERTY: parent and children links agree with each other and with
    /// the structural keys.
    #[test]
    fn property_links_are_consistent(shape in forest()) {
        let mut tree = to_json(&shape);
        let index = build(&mut tree, &[]);

        for node in &index {
            prop_assert_eq!(node.parent.clone(), node.ref_key.parent());
            for child in index.children(&node.ref_key) {
                prop_assert_eq!(child.parent.as_ref(), Some(&node.ref_key));
                prop_assert_eq!(child.layer(), node.layer() + 1);
            }
        }
    }
}
