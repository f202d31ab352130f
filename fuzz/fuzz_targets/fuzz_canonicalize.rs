#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Arbitrary input must be rejected cleanly, never panic
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let _ = sfx::Alphabet::default().canonicalize(text);
    if let Ok(tree) = sfx::SuffixTree::new(text) {
        let _ = tree.find(text);
        let _ = tree.find_all("a");
    }
});
