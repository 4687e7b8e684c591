//! Random tree generation shared by the property tests.

use proptest::prelude::*;
use serde_json::{json, Value};

use checktree::domain::services::{flatten, FlattenOptions};
use checktree::{JsonAccessor, RefKey, TreeIndex};

const WORDS: &[&str] = &["apple", "bob", "car", "Dog", "eel", "fig"];

/// Tree shape without labels or values
#[derive(Debug, Clone)]
pub enum Shape {
    Leaf,
    Branch(Vec<Shape>),
}

pub fn shape() -> impl Strategy<Value = Shape> {
    Just(Shape::Leaf).prop_recursive(4, 40, 4, |inner| {
        prop::collection::vec(inner, 1..4).prop_map(Shape::Branch)
    })
}

pub fn forest() -> impl Strategy<Value = Vec<Shape>> {
    prop::collection::vec(shape(), 1..4)
}

/// Materialize a forest with unique values `v0`, `v1`, ... in pre-order.
///
/// Labels cycle through a small word list so keywords hit several nodes.
pub fn to_json(forest: &[Shape]) -> Vec<Value> {
    let mut counter = 0;
    forest.iter().map(|s| node(s, &mut counter)).collect()
}

fn node(shape: &Shape, counter: &mut usize) -> Value {
    let n = *counter;
    *counter += 1;
    let label = format!("{}{}", WORDS[n % WORDS.len()], n);
    match shape {
        Shape::Leaf => json!({"label": label, "value": format!("v{}", n)}),
        Shape::Branch(children) => {
            let children: Vec<Value> = children.iter().map(|c| node(c, counter)).collect();
            json!({"label": label, "value": format!("v{}", n), "children": children})
        }
    }
}

pub fn build(tree: &mut [Value], uncheckable: &[Value]) -> TreeIndex<Value> {
    flatten(
        &JsonAccessor::default(),
        tree,
        &FlattenOptions {
            uncheckable_item_values: uncheckable,
            expand_all: false,
        },
    )
}

/// Leaf values selected by cycling through `picks`
pub fn pick_leaves(index: &TreeIndex<Value>, picks: &[bool]) -> Vec<Value> {
    if picks.is_empty() {
        return Vec::new();
    }
    index
        .iter()
        .filter(|n| !n.has_children())
        .enumerate()
        .filter(|(i, _)| picks[i % picks.len()])
        .map(|(_, n)| n.value.clone())
        .collect()
}

/// Index of `tree` with a random subset of leaves made uncheckable
pub fn build_with_uncheckable_leaves(
    tree: &mut [Value],
    picks: &[bool],
) -> (TreeIndex<Value>, Vec<Value>) {
    let plain = build(tree, &[]);
    let uncheckable = pick_leaves(&plain, picks);
    (build(tree, &uncheckable), uncheckable)
}

/// Values of any nodes, groups included, selected by cycling through `picks`
pub fn pick_nodes(index: &TreeIndex<Value>, picks: &[bool]) -> Vec<Value> {
    if picks.is_empty() {
        return Vec::new();
    }
    index
        .iter()
        .enumerate()
        .filter(|(i, _)| picks[i % picks.len()])
        .map(|(_, n)| n.value.clone())
        .collect()
}

/// Index of `tree` with a random subset of nodes, groups included, made uncheckable
pub fn build_with_uncheckable_nodes(
    tree: &mut [Value],
    picks: &[bool],
) -> (TreeIndex<Value>, Vec<Value>) {
    let plain = build(tree, &[]);
    let uncheckable = pick_nodes(&plain, picks);
    (build(tree, &uncheckable), uncheckable)
}

/// Keys of nodes that can be toggled (checkable), in pre-order
pub fn checkable_keys(index: &TreeIndex<Value>) -> Vec<RefKey> {
    index
        .iter()
        .filter(|n| !n.uncheckable)
        .map(|n| n.ref_key.clone())
        .collect()
}

/// Toggle script: (which checkable node, checked?) pairs
pub fn script() -> impl Strategy<Value = Vec<(prop::sample::Index, bool)>> {
    prop::collection::vec((any::<prop::sample::Index>(), any::<bool>()), 1..12)
}

pub fn words() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("  ".to_string()),
        prop::sample::select(WORDS).prop_map(str::to_string),
        "[a-gA-G0-9]{1,3}",
    ]
}
