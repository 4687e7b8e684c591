//! Property tests for check-state propagation.

use proptest::prelude::*;
use serde_json::Value;

use checktree::domain::services::toggle;
use checktree::{RefKey, TreeIndex};

use crate::trees::{
    build, build_with_uncheckable_leaves, build_with_uncheckable_nodes, checkable_keys, forest,
    script, to_json,
};

fn run_script(
    index: TreeIndex<Value>,
    keys: &[RefKey],
    steps: &[(prop::sample::Index, bool)],
    cascade: bool,
) -> TreeIndex<Value> {
    let mut current = index;
    for (pick, checked) in steps {
        let key = &keys[pick.index(keys.len())];
        current = toggle(&current, key, *checked, cascade);
    }
    current
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: toggling a node under cascade sets every checkable descendant to the same value.
    #[test]
    fn property_cascade_down_reaches_whole_subtree(
        shape in forest(),
        picks in prop::collection::vec(any::<bool>(), 0..6),
        target in any::<prop::sample::Index>(),
        checked in any::<bool>(),
    ) {
        let mut tree = to_json(&shape);
        let (index, _) = build_with_uncheckable_leaves(&mut tree, &picks);
        let keys = checkable_keys(&index);
        prop_assume!(!keys.is_empty());

        let key = &keys[target.index(keys.len())];
        let next = toggle(&index, key, checked, true);

        prop_assert_eq!(next.get(key).unwrap().check, checked);
        for node in next.iter().filter(|n| n.ref_key.is_descendant_of(key) && !n.uncheckable) {
            prop_assert_eq!(node.check, checked, "descendant {} not cascaded", node.ref_key);
        }
    }

    /// PROPERTY: after any toggle sequence under cascade, a parent is checked
    /// exactly when all of its checkable children are.
    #[test]
    fn property_parents_agree_with_children(
        shape in forest(),
        picks in prop::collection::vec(any::<bool>(), 0..6),
        steps in script(),
    ) {
        let mut tree = to_json(&shape);
        let (index, _) = build_with_uncheckable_leaves(&mut tree, &picks);
        let keys = checkable_keys(&index);
        prop_assume!(!keys.is_empty());

        let result = run_script(index, &keys, &steps, true);

        for node in result.iter().filter(|n| n.has_children()) {
            let checkable: Vec<bool> = result
                .children(&node.ref_key)
                .filter(|c| !c.uncheckable)
                .map(|c| c.check)
                .collect();
            if checkable.is_empty() {
                continue;
            }
            let all = checkable.iter().all(|c| *c);
            prop_assert_eq!(node.check, all, "parent {} disagrees with children", node.ref_key);
            prop_assert_eq!(node.check_all, all);
        }
    }

    /// PROPERTY: checking a node under cascade leaves each checkable ancestor
    /// checked exactly when all of its checkable direct children are, even
    /// when uncheckable groups sit on the path.
    #[test]
    fn property_check_completes_ancestors(
        shape in forest(),
        picks in prop::collection::vec(any::<bool>(), 0..6),
        steps in script(),
        target in any::<prop::sample::Index>(),
    ) {
        let mut tree = to_json(&shape);
        let (index, _) = build_with_uncheckable_nodes(&mut tree, &picks);
        let keys = checkable_keys(&index);
        prop_assume!(!keys.is_empty());

        let before = run_script(index, &keys, &steps, true);
        let key = &keys[target.index(keys.len())];
        let result = toggle(&before, key, true, true);

        for ancestor in result.ancestors(key) {
            let node = result.get(&ancestor).unwrap();
            if node.uncheckable {
                continue;
            }
            let all = result
                .children(&ancestor)
                .filter(|c| !c.uncheckable)
                .all(|c| c.check);
            prop_assert_eq!(node.check, all, "ancestor {} disagrees with children", ancestor);
        }
    }

    /// PROPERTY: uncheckable nodes never end up checked.
    #[test]
    fn property_uncheckable_never_checked(
        shape in forest(),
        picks in prop::collection::vec(any::<bool>(), 1..6),
        steps in script(),
        cascade in any::<bool>(),
    ) {
        let mut tree = to_json(&shape);
        let (index, _) = build_with_uncheckable_nodes(&mut tree, &picks);
        let keys = checkable_keys(&index);
        prop_assume!(!keys.is_empty());

        let result = run_script(index, &keys, &steps, cascade);
        prop_assert!(result.iter().filter(|n| n.uncheckable).all(|n| !n.check));
    }

    /// PROPERTY: without cascade a toggle changes the target's flag and nothing else.
    #[test]
    fn property_cascade_off_touches_only_target(
        shape in forest(),
        target in any::<prop::sample::Index>(),
        checked in any::<bool>(),
    ) {
        let mut tree = to_json(&shape);
        let index = build(&mut tree, &[]);
        let keys = checkable_keys(&index);
        let key = &keys[target.index(keys.len())];

        let next = toggle(&index, key, checked, false);
        for (before, after) in index.iter().zip(next.iter()) {
            if &before.ref_key == key {
                prop_assert_eq!(after.check, checked);
            } else {
                prop_assert_eq!(before.check, after.check);
            }
        }
    }

    /// PROPERTY: repeating a toggle with the same value changes nothing.
    #[test]
    fn property_toggle_is_idempotent(
        shape in forest(),
        picks in prop::collection::vec(any::<bool>(), 0..6),
        target in any::<prop::sample::Index>(),
        checked in any::<bool>(),
        cascade in any::<bool>(),
    ) {
        let mut tree = to_json(&shape);
        let (index, _) = build_with_uncheckable_nodes(&mut tree, &picks);
        let keys = checkable_keys(&index);
        prop_assume!(!keys.is_empty());
        let key = &keys[target.index(keys.len())];

        let once = toggle(&index, key, checked, cascade);
        let twice = toggle(&once, key, checked, cascade);
        prop_assert_eq!(once, twice);
    }
}
