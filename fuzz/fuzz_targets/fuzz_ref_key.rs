#![no_main]

use libfuzzer_sys::fuzz_target;

use checktree::RefKey;

fuzz_target!(|data: &[u8]| {
    if let Ok(raw) = std::str::from_utf8(data) {
        // Parsed keys must print back to a key that parses the same
        if let Ok(key) = raw.parse::<RefKey>() {
            let again: RefKey = key.to_string().parse().expect("display output parses");
            assert_eq!(key, again);
        }
    }
});
