//! Scenario: Lazily Loaded Subtree
//!
//! Journey: A team node arrives without members. The user checks the team,
//! opens it, and the caller splices the fetched members in.

use std::rc::Rc;

use checktree::{CheckState, CheckTreeEvent, CheckTreeOptions, RecordingEventSink};
use serde_json::{json, Value};

use crate::common::*;

fn org() -> Vec<Value> {
    vec![json!({"label": "Org", "value": "org", "children": [
        {"label": "Team", "value": "team"}
    ]})]
}

/// SCENARIO: loaded members inherit the team's selection
#[test]
fn scenario_loaded_children_inherit_selection() {
    let sink = Rc::new(RecordingEventSink::<Value>::new());
    let mut tree = engine(org(), CheckTreeOptions::new()).with_event_sink(Rc::clone(&sink));
    let team = key("0-0-0");

    // Step 1: checking the only member completes the org
    let reported = tree.select(&team, true).unwrap();
    assert_eq!(reported, values(&["org"]));

    // Step 2: opening a node without children leaves it closed for now
    tree.toggle_expand(&team, true).unwrap();
    assert!(!tree.is_expanded(&team));
    let expanded = sink.take().into_iter().find_map(|event| match event {
        CheckTreeEvent::Expanded { ref_key, layer, value, .. } => Some((ref_key, layer, value)),
        _ => None,
    });
    assert_eq!(expanded, Some((team.clone(), 1, json!("team"))));

    // Step 3: the caller splices the fetched members in
    tree.concat_children(
        &team,
        vec![
            json!({"label": "Ana", "value": "ana"}),
            json!({"label": "Ben", "value": "ben"}),
        ],
    )
    .unwrap();

    assert!(tree.is_expanded(&team));
    assert_eq!(tree.check_state(&key("0-0-0-0")), CheckState::Checked);
    assert_eq!(tree.check_state(&key("0-0-0-1")), CheckState::Checked);
    assert_eq!(tree.data()[0]["children"][0]["children"][1]["refKey"], "0-0-0-1");

    // Step 4: unchecking one member breaks the chain upwards
    let reported = tree.select(&key("0-0-0-1"), false).unwrap();
    assert_eq!(reported, values(&["ana"]));
    assert_eq!(tree.check_state(&key("0-0")), CheckState::Indeterminate);
}
