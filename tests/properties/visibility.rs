//! Property tests for search visibility.

use proptest::prelude::*;

use checktree::domain::services::filter;
use checktree::JsonAccessor;

use crate::trees::{build, forest, to_json, words};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: a node is visible iff it or some descendant has a label
    /// containing the keyword (case-insensitive); a blank keyword shows all.
    #[test]
    fn property_visibility_promotes_matches(shape in forest(), keyword in words()) {
        let mut tree = to_json(&shape);
        let index = build(&mut tree, &[]);
        let visibility = filter(&JsonAccessor::default(), &tree, &keyword);

        let needle = keyword.to_lowercase();
        let matches = |label: &str| {
            keyword.trim().is_empty() || label.to_lowercase().contains(&needle)
        };

        for node in &index {
            let expected = matches(&node.label)
                || index
                    .iter()
                    .any(|d| d.ref_key.is_descendant_of(&node.ref_key) && matches(&d.label));
            prop_assert_eq!(
                visibility.is_visible(&node.ref_key),
                expected,
                "node {} ({}) for keyword {:?}",
                node.ref_key,
                node.label,
                keyword
            );
        }
        prop_assert_eq!(visibility.len(), index.len());
    }
}
