#![no_main]

use libfuzzer_sys::fuzz_target;

use checktree::domain::services::{filter, flatten, serialize, toggle, unserialize, FlattenOptions};
use checktree::infrastructure::parse_tree;
use checktree::{JsonAccessor, RefKey, ValueReportMode};

fuzz_target!(|data: &[u8]| {
    let Ok(content) = std::str::from_utf8(data) else {
        return;
    };
    // Any JSON array is a tree; odd nodes must never panic the engine
    let Ok(mut tree) = parse_tree(content) else {
        return;
    };

    let accessor = JsonAccessor::default();
    let uncheckable = vec![serde_json::json!(null)];
    let options = FlattenOptions {
        uncheckable_item_values: &uncheckable,
        expand_all: false,
    };
    let mut index = flatten(&accessor, &mut tree, &options);

    let keys: Vec<RefKey> = index.keys().cloned().collect();
    for (i, key) in keys.iter().enumerate() {
        index = toggle(&index, key, i % 3 != 0, i % 2 == 0);
    }

    for mode in [ValueReportMode::OnlyParent, ValueReportMode::All] {
        let values = serialize(&index, mode, &uncheckable);
        unserialize(&mut index, &values, true, &uncheckable);
    }

    let _ = filter(&accessor, &tree, "a");
});
