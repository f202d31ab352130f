//! Finished suffix tree
//!
//! A [`SuffixTree`] owns the canonical text and the node arena produced by
//! the builder. It is immutable after construction, so shared references
//! can be queried from any number of threads.

use super::builder::SuffixTreeBuilder;
use super::types::{Node, NodeId, TreeConfig};
use crate::alphabet::{Alphabet, Symbol};
use crate::error::TreeResult;

/// Suffix tree over a text, terminated by a unique symbol
#[derive(Debug, Clone)]
pub struct SuffixTree {
    alphabet: Alphabet,
    /// Canonical text including the terminator
    text: Vec<Symbol>,
    /// Root first, then internal nodes in creation order
    nodes: Vec<Node>,
}

impl SuffixTree {
    /// Build a tree over lowercase latin text
    pub fn new(text: &str) -> TreeResult<Self> {
        SuffixTreeBuilder::with_defaults().build(text)
    }

    /// Build a tree over text in the given alphabet
    pub fn with_alphabet(text: &str, alphabet: Alphabet) -> TreeResult<Self> {
        SuffixTreeBuilder::new(TreeConfig { alphabet }).build(text)
    }

    pub(crate) fn from_parts(alphabet: Alphabet, text: Vec<Symbol>, nodes: Vec<Node>) -> Self {
        Self {
            alphabet,
            text,
            nodes,
        }
    }

    pub fn alphabet(&self) -> Alphabet {
        self.alphabet
    }

    /// Canonical text, terminator included
    #[inline]
    pub fn symbols(&self) -> &[Symbol] {
        &self.text
    }

    /// Length of the indexed text in characters (terminator excluded)
    #[inline]
    pub fn len(&self) -> usize {
        self.text.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Offset of the terminator; open leaf edges end here
    #[inline]
    pub(crate) fn last(&self) -> usize {
        self.text.len() - 1
    }

    #[inline]
    pub fn root(&self) -> &Node {
        &self.nodes[NodeId::ROOT.index()]
    }

    #[inline]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    /// Root and internal nodes; leaves are represented by tail-less edges
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Decode `text[from..=to]` back into characters
    ///
    /// The terminator is rendered as `$`.
    pub fn label(&self, from: usize, to: usize) -> String {
        self.text[from..=to]
            .iter()
            .map(|&symbol| self.alphabet.character(symbol).unwrap_or('$'))
            .collect()
    }
}
