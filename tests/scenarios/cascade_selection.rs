//! Scenario: Cascading Selection
//!
//! Journey: A user works through the tree `A[B[C, D]]` with cascade on.
//!
//! Steps:
//! 1. Checks the root and sees every node checked
//! 2. Unchecks the root, then checks a single leaf
//! 3. Checks the sibling leaf and sees the parents complete

use checktree::{CheckState, CheckTreeOptions, ValueReportMode};

use crate::common::*;

/// SCENARIO: checking the root selects the whole tree
#[test]
fn scenario_root_selection_reports_by_mode() {
    let mut all = engine(
        abcd(),
        CheckTreeOptions::new().with_report_mode(ValueReportMode::All),
    );
    let reported = all.select(&key("0-0"), true).unwrap();
    assert_eq!(reported, values(&["a", "b", "c", "d"]));

    let mut only_parent = engine(abcd(), CheckTreeOptions::new());
    let reported = only_parent.select(&key("0-0"), true).unwrap();
    assert_eq!(reported, values(&["a"]), "children are implied by the root");

    for raw in ["0-0", "0-0-0", "0-0-0-0", "0-0-0-1"] {
        assert_eq!(only_parent.check_state(&key(raw)), CheckState::Checked, "{}", raw);
    }
}

/// SCENARIO: a single leaf makes every ancestor indeterminate
#[test]
fn scenario_single_leaf_is_indeterminate_upwards() {
    let mut tree = engine(abcd(), CheckTreeOptions::new());

    // Step 1: check everything, then clear it again
    tree.select(&key("0-0"), true).unwrap();
    let cleared = tree.select(&key("0-0"), false).unwrap();
    assert!(cleared.is_empty());
    assert!(!tree.has_value());

    // Step 2: check C alone
    let reported = tree.select(&key("0-0-0-0"), true).unwrap();
    assert_eq!(reported, values(&["c"]));
    assert_eq!(tree.check_state(&key("0-0-0")), CheckState::Indeterminate);
    assert_eq!(tree.check_state(&key("0-0")), CheckState::Indeterminate);
    assert_eq!(tree.check_state(&key("0-0-0-1")), CheckState::Unchecked);

    // Step 3: check D, completing B and A
    let reported = tree.select(&key("0-0-0-1"), true).unwrap();
    assert_eq!(reported, values(&["a"]));
    assert_eq!(tree.check_state(&key("0-0-0")), CheckState::Checked);
    assert_eq!(tree.check_state(&key("0-0")), CheckState::Checked);
}

/// SCENARIO: an uncheckable sibling does not block completion
#[test]
fn scenario_uncheckable_sibling_is_ignored() {
    let mut tree = engine(
        abcd(),
        CheckTreeOptions::new().with_uncheckable_item_values(values(&["d"])),
    );

    let reported = tree.select(&key("0-0-0-0"), true).unwrap();

    assert_eq!(reported, values(&["a"]));
    assert_eq!(tree.check_state(&key("0-0-0")), CheckState::Checked);
    assert_eq!(tree.check_state(&key("0-0")), CheckState::Checked);
    assert!(!tree.node(&key("0-0-0-1")).unwrap().check);
}

/// SCENARIO: a disabled node refuses clicks and keeps its state
#[test]
fn scenario_disabled_node_rejects_selection() {
    let mut tree = engine(
        abcd(),
        CheckTreeOptions::new().with_disabled_item_values(values(&["c"])),
    );

    let err = tree.select(&key("0-0-0-0"), true).unwrap_err();

    assert!(err.to_string().contains("0-0-0-0"), "error: {}", err);
    assert_eq!(tree.check_state(&key("0-0-0-0")), CheckState::Unchecked);
    assert!(tree.selected_values().is_empty());

    // Its parent is still clickable and still cascades into it
    tree.select(&key("0-0-0"), true).unwrap();
    assert_eq!(tree.check_state(&key("0-0-0-0")), CheckState::Checked);
}
