//! Pattern matching over a finished tree
//!
//! A pattern is matched by walking down from the root, one symbol at a time,
//! comparing against edge labels in the text. Work is proportional to the
//! pattern length; the text length does not matter.

use super::suffix_tree::SuffixTree;
use super::types::{Edge, NodeId};
use crate::alphabet::Symbol;
use crate::error::TreeResult;

/// Sentinel returned by [`SuffixTree::match_position`] when a pattern is absent
pub const NOT_FOUND: i64 = -1;

/// Where a matched pattern ends in the tree
#[derive(Debug, Clone, Copy)]
enum Locus {
    /// Exactly on a node
    Node(NodeId),
    /// Partway down (or at the end of) a leaf edge, or inside an internal edge
    Edge { parent: NodeId, edge: Edge },
}

impl SuffixTree {
    /// Walk `pattern` from the root
    ///
    /// Returns the locus reached and the text offset just past the last
    /// matched symbol.
    fn locate(&self, pattern: &[Symbol]) -> Option<(Locus, usize)> {
        let last = self.last();
        let mut node = NodeId::ROOT;
        let mut current: Option<Edge> = None;
        let mut offset = 0;
        let mut end = 0;

        for &symbol in pattern {
            let edge = match current {
                Some(edge) => edge,
                None => {
                    offset = 0;
                    *self.node(node).child(symbol)?
                }
            };

            if *self.symbols().get(edge.from + offset)? != symbol {
                return None;
            }
            offset += 1;
            end = edge.from + offset;

            current = Some(edge);
            if end > edge.to(last) {
                if let Some(tail) = edge.tail {
                    node = tail;
                    current = None;
                }
            }
        }

        let locus = match current {
            Some(edge) => Locus::Edge { parent: node, edge },
            None => Locus::Node(node),
        };
        Some((locus, end))
    }

    /// Visit the suffix start of every leaf below `locus`
    fn for_each_leaf(&self, locus: Locus, mut visit: impl FnMut(usize)) {
        let mut stack = match locus {
            Locus::Node(node) => vec![node],
            Locus::Edge { parent, edge } => match edge.tail {
                Some(tail) => vec![tail],
                None => {
                    visit(edge.from - self.node(parent).depth);
                    return;
                }
            },
        };

        while let Some(id) = stack.pop() {
            let node = self.node(id);
            for (_, edge) in node.edges() {
                match edge.tail {
                    Some(tail) => stack.push(tail),
                    None => visit(edge.from - node.depth),
                }
            }
        }
    }

    /// Find some occurrence of a canonical pattern
    ///
    /// The empty pattern matches at offset 0.
    pub fn find_symbols(&self, pattern: &[Symbol]) -> Option<usize> {
        let (_, end) = self.locate(pattern)?;
        Some(end - pattern.len())
    }

    /// Find the start of some occurrence of `pattern`
    ///
    /// Any occurrence may be returned, not necessarily the leftmost one.
    /// Returns `Ok(None)` if the pattern does not occur, and `Ok(Some(0))` for
    /// the empty pattern.
    pub fn find(&self, pattern: &str) -> TreeResult<Option<usize>> {
        let symbols = self.alphabet().canonicalize_pattern(pattern)?;
        Ok(self.find_symbols(&symbols))
    }

    /// Like [`find`](Self::find), with absence reported as [`NOT_FOUND`]
    pub fn match_position(&self, pattern: &str) -> TreeResult<i64> {
        Ok(self
            .find(pattern)?
            .map_or(NOT_FOUND, |position| position as i64))
    }

    /// Check if `pattern` occurs in the text
    pub fn contains(&self, pattern: &str) -> TreeResult<bool> {
        Ok(self.find(pattern)?.is_some())
    }

    /// Start offsets of every occurrence, ascending
    ///
    /// The empty pattern occurs at every offset from 0 to the text length
    /// inclusive.
    pub fn find_all(&self, pattern: &str) -> TreeResult<Vec<usize>> {
        let symbols = self.alphabet().canonicalize_pattern(pattern)?;
        let mut positions = Vec::new();
        if let Some((locus, _)) = self.locate(&symbols) {
            self.for_each_leaf(locus, |start| positions.push(start));
        }
        positions.sort_unstable();
        Ok(positions)
    }

    /// Number of occurrences of `pattern`
    pub fn count(&self, pattern: &str) -> TreeResult<usize> {
        let symbols = self.alphabet().canonicalize_pattern(pattern)?;
        let mut count = 0;
        if let Some((locus, _)) = self.locate(&symbols) {
            self.for_each_leaf(locus, |_| count += 1);
        }
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TreeError;

    fn naive_positions(text: &str, pattern: &str) -> Vec<usize> {
        (0..=text.len())
            .filter(|&i| text[i..].starts_with(pattern))
            .collect()
    }

    #[test]
    fn test_scenarios() {
        let cases = [
            ("abbabababa", "aba", 3),
            ("abbabababa", "abbc", NOT_FOUND),
            ("abcabxabcd", "cd", 8),
            ("abcabxabcd", "cdx", NOT_FOUND),
            ("abcdefabxybcdmnabcdex", "cd", 2),
            ("abcdefabxybcdmnabcdex", "cdx", NOT_FOUND),
            ("a", "a", 0),
            ("a", "b", NOT_FOUND),
        ];

        for (text, pattern, expected) in cases {
            let tree = SuffixTree::new(text).unwrap();
            assert_eq!(
                tree.match_position(pattern).unwrap(),
                expected,
                "text {:?} pattern {:?}",
                text,
                pattern
            );
        }
    }

    #[test]
    fn test_found_position_is_an_occurrence() {
        let text = "abcdefabxybcdmnabcdex";
        let tree = SuffixTree::new(text).unwrap();
        for start in 0..text.len() {
            for end in start + 1..=text.len() {
                let pattern = &text[start..end];
                let position = tree.find(pattern).unwrap().unwrap();
                assert_eq!(&text[position..position + pattern.len()], pattern);
            }
        }
    }

    #[test]
    fn test_pattern_longer_than_text() {
        let tree = SuffixTree::new("ab").unwrap();
        assert_eq!(tree.find("abab").unwrap(), None);
        assert_eq!(tree.find("ab").unwrap(), Some(0));
    }

    #[test]
    fn test_empty_pattern() {
        let tree = SuffixTree::new("abc").unwrap();
        assert_eq!(tree.find("").unwrap(), Some(0));
        assert_eq!(tree.match_position("").unwrap(), 0);
        assert_eq!(tree.find_all("").unwrap(), vec![0, 1, 2, 3]);
        assert_eq!(tree.count("").unwrap(), 4);
    }

    #[test]
    fn test_empty_text() {
        let tree = SuffixTree::new("").unwrap();
        assert_eq!(tree.find("").unwrap(), Some(0));
        assert_eq!(tree.find("a").unwrap(), None);
        assert_eq!(tree.find_all("").unwrap(), vec![0]);
    }

    #[test]
    fn test_invalid_pattern() {
        let tree = SuffixTree::new("abc").unwrap();
        assert_eq!(
            tree.find("aB"),
            Err(TreeError::InvalidSymbol { ch: 'B', position: 1 })
        );
    }

    #[test]
    fn test_terminator_never_matches_past_the_end() {
        let tree = SuffixTree::new("ab").unwrap();
        assert_eq!(tree.find_symbols(&[1, 26]), Some(1));
        assert_eq!(tree.find_symbols(&[1, 26, 0]), None);
    }

    #[test]
    fn test_find_all_matches_naive() {
        let texts = ["abbabababa", "mississippi", "aaaaaa", "abcabxabcd"];
        let patterns = ["a", "ab", "aba", "ss", "issi", "aaa", "b", "x", "abcd", "zz"];

        for text in texts {
            let tree = SuffixTree::new(text).unwrap();
            for pattern in patterns {
                let expected = naive_positions(text, pattern);
                assert_eq!(tree.find_all(pattern).unwrap(), expected, "{} in {}", pattern, text);
                assert_eq!(tree.count(pattern).unwrap(), expected.len());
                assert_eq!(tree.contains(pattern).unwrap(), !expected.is_empty());
            }
        }
    }

    #[test]
    fn test_find_all_single_leaf() {
        let tree = SuffixTree::new("abcd").unwrap();
        assert_eq!(tree.find_all("bc").unwrap(), vec![1]);
        assert_eq!(tree.find_all("d").unwrap(), vec![3]);
    }
}
