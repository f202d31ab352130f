//! A finished tree is immutable and can be queried from many threads.

use rayon::prelude::*;
use sfx::tree::SuffixTree;
use std::sync::Arc;
use std::thread;

#[test]
fn test_shared_across_threads() {
    let text = "abracadabra".repeat(50);
    let tree = Arc::new(SuffixTree::new(&text).unwrap());

    let handles: Vec<_> = ["abra", "cad", "dabr", "zz", "aa"]
        .into_iter()
        .map(|pattern| {
            let tree = Arc::clone(&tree);
            thread::spawn(move || (pattern, tree.find_all(pattern).unwrap()))
        })
        .collect();

    for handle in handles {
        let (pattern, positions) = handle.join().unwrap();
        let expected: Vec<usize> = text.match_indices(pattern).map(|(i, _)| i).collect();
        // match_indices skips overlaps, which none of these patterns have
        assert_eq!(positions, expected, "pattern {}", pattern);
    }
}

#[test]
fn test_scoped_threads_borrow_tree() {
    let text = "mississippi";
    let tree = SuffixTree::new(text).unwrap();

    thread::scope(|scope| {
        for start in 0..text.len() {
            let tree = &tree;
            scope.spawn(move || {
                let suffix = &text[start..];
                let found = tree.find(suffix).unwrap().unwrap();
                assert!(text[found..].starts_with(suffix));
            });
        }
    });
}

#[test]
fn test_parallel_queries_match_sequential() {
    let text = "abcabxabcdabcabxabcd";
    let tree = SuffixTree::new(text).unwrap();
    let patterns: Vec<String> = (0..text.len())
        .flat_map(|i| (i + 1..=text.len()).map(move |j| text[i..j].to_string()))
        .chain(["cdx".to_string(), "xx".to_string()])
        .collect();

    let sequential: Vec<_> = patterns.iter().map(|p| tree.find(p).unwrap()).collect();
    let parallel: Vec<_> = patterns.par_iter().map(|p| tree.find(p).unwrap()).collect();
    assert_eq!(sequential, parallel);
}
