#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use sfx::{Alphabet, SuffixTree};

#[derive(Debug, Arbitrary)]
struct Input {
    alphabet_size: u8,
    text: Vec<u8>,
    pattern: Vec<u8>,
}

fuzz_target!(|input: Input| {
    // Small alphabets produce the most repeats, hence the most splits
    let size = input.alphabet_size % 8 + 1;
    let Ok(alphabet) = Alphabet::new('a', size) else {
        return;
    };
    let to_text = |bytes: &[u8]| -> String {
        bytes.iter().map(|b| (b'a' + b % size) as char).collect()
    };
    let text = to_text(&input.text);
    let pattern = to_text(&input.pattern);

    let tree = SuffixTree::with_alphabet(&text, alphabet).unwrap();
    let found = tree.find(&pattern).unwrap();
    assert_eq!(found.is_some(), text.contains(pattern.as_str()));
    if let Some(position) = found {
        assert!(text[position..].starts_with(pattern.as_str()));
    }
    assert_eq!(tree.stats().leaf_count, text.len() + 1);
});
