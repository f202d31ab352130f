//! Types for suffix tree construction
//!
//! Nodes live in an append-only arena and refer to each other by index, so
//! suffix links and edge tails stay valid while the arena grows.

use crate::alphabet::{Alphabet, Symbol};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Index of a node in the tree arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// The root is always the first node in the arena
    pub const ROOT: NodeId = NodeId(0);

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// End of an edge label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeEnd {
    /// Label ends at this offset (inclusive)
    Bounded(usize),
    /// Leaf label; runs through the final symbol of the text
    Open,
}

impl EdgeEnd {
    /// Resolve to an inclusive offset given the last offset of the text
    #[inline]
    pub fn resolve(self, last: usize) -> usize {
        match self {
            EdgeEnd::Bounded(to) => to,
            EdgeEnd::Open => last,
        }
    }
}

/// Labeled edge from a node to its child
///
/// The label is `text[from..=end]`. A leaf edge has no tail node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub from: usize,
    pub end: EdgeEnd,
    pub tail: Option<NodeId>,
}

impl Edge {
    /// New leaf edge starting at `from`
    pub fn leaf(from: usize) -> Self {
        Self {
            from,
            end: EdgeEnd::Open,
            tail: None,
        }
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.tail.is_none()
    }

    /// Inclusive end offset
    #[inline]
    pub fn to(&self, last: usize) -> usize {
        self.end.resolve(last)
    }

    /// Number of symbols on the label
    #[inline]
    pub fn len(&self, last: usize) -> usize {
        self.to(last) - self.from + 1
    }
}

/// Explicit position in the tree
#[derive(Debug, Clone)]
pub struct Node {
    /// Number of symbols on the path from the root
    pub depth: usize,
    /// Node spelling this node's string minus its first symbol
    pub suffix_link: Option<NodeId>,
    /// One optional edge per symbol (alphabet plus terminator)
    children: Box<[Option<Edge>]>,
}

impl Node {
    pub fn new(depth: usize, symbol_count: usize) -> Self {
        Self {
            depth,
            suffix_link: None,
            children: vec![None; symbol_count].into_boxed_slice(),
        }
    }

    #[inline]
    pub fn child(&self, symbol: Symbol) -> Option<&Edge> {
        self.children.get(symbol as usize)?.as_ref()
    }

    #[inline]
    pub(crate) fn set_child(&mut self, symbol: Symbol, edge: Edge) {
        self.children[symbol as usize] = Some(edge);
    }

    /// Existing child edges in symbol order
    pub fn edges(&self) -> impl Iterator<Item = (Symbol, &Edge)> + '_ {
        self.children
            .iter()
            .enumerate()
            .filter_map(|(symbol, edge)| Some((symbol as Symbol, edge.as_ref()?)))
    }

    pub fn child_count(&self) -> usize {
        self.children.iter().filter(|edge| edge.is_some()).count()
    }
}

/// Builder cursor: where the next symbol has to be inserted
///
/// With `length == 0` the cursor sits on `node` itself. Otherwise it lies
/// `length` symbols down the child edge of `node` keyed by `edge`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivePoint {
    pub node: NodeId,
    pub edge: Option<Symbol>,
    pub length: usize,
}

impl Default for ActivePoint {
    fn default() -> Self {
        Self {
            node: NodeId::ROOT,
            edge: None,
            length: 0,
        }
    }
}

impl ActivePoint {
    #[inline]
    pub fn is_explicit(&self) -> bool {
        self.length == 0
    }
}

/// Configuration for building a tree
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeConfig {
    /// Alphabet used for the text and every pattern
    #[serde(default)]
    pub alphabet: Alphabet,
}

impl TreeConfig {
    /// Load a configuration from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path)
            .with_context(|| format!("Failed to open config {}", path.display()))?;
        let config: TreeConfig = serde_json::from_reader(std::io::BufReader::new(file))
            .with_context(|| format!("Invalid config {}", path.display()))?;
        // Re-validate: a deserialized alphabet bypasses Alphabet::new
        Alphabet::new(config.alphabet.first, config.alphabet.size)?;
        Ok(config)
    }
}
