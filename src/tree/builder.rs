//! Suffix tree builder
//!
//! Builds a suffix tree over a canonicalized text with Ukkonen's online
//! algorithm. The text is consumed one symbol per phase; within a phase the
//! builder runs extensions for every suffix that is not yet explicit in the
//! tree, driven by the active point.
//!
//! Each extension falls into one of four cases:
//!
//! 1. The active point is on a node that has no edge for the phase symbol:
//!    a leaf edge is added.
//! 2. The active point is on a node that already has that edge: the suffix
//!    is implicitly present and the phase ends.
//! 3. The active point is inside an edge and the next label symbol matches:
//!    same as case 2.
//! 4. The active point is inside an edge and the next label symbol differs:
//!    the edge is split by a new internal node that gets a leaf for the
//!    phase symbol.
//!
//! After cases 1 and 4 the active point moves to the next shorter suffix:
//! along the root edge by one symbol when the active node is the root
//! (rule 1), otherwise through the active node's suffix link (rule 3).
//! Internal nodes created one after another in the same phase are chained by
//! suffix links (rule 2).
//!
//! Total work is O(n): every normalization step moves the active point down
//! a node that is later left through a suffix link, which drops the depth by
//! at most one.

use super::suffix_tree::SuffixTree;
use super::types::*;
use super::visitor::{BuildVisitor, NoopVisitor};
use crate::alphabet::Symbol;
use crate::error::TreeResult;

/// Builder for constructing suffix trees from text
pub struct SuffixTreeBuilder {
    config: TreeConfig,
}

impl SuffixTreeBuilder {
    /// Create a new builder with the given configuration
    pub fn new(config: TreeConfig) -> Self {
        Self { config }
    }

    /// Create a builder for the lowercase latin alphabet
    pub fn with_defaults() -> Self {
        Self::new(TreeConfig::default())
    }

    pub fn config(&self) -> &TreeConfig {
        &self.config
    }

    /// Build a tree over `text`
    pub fn build(&self, text: &str) -> TreeResult<SuffixTree> {
        self.build_with_visitor(text, &mut NoopVisitor)
    }

    /// Build a tree over `text`, reporting structural events to `visitor`
    ///
    /// The text is validated before construction starts: a character outside
    /// the alphabet rejects the build and the visitor sees no events.
    pub fn build_with_visitor<V: BuildVisitor>(
        &self,
        text: &str,
        visitor: &mut V,
    ) -> TreeResult<SuffixTree> {
        let alphabet = self.config.alphabet;
        let symbols = alphabet.canonicalize(text)?;
        let nodes = Construction::new(&symbols, alphabet.symbol_count(), visitor).run();
        Ok(SuffixTree::from_parts(alphabet, symbols, nodes))
    }
}

/// Outcome of a single extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Extension {
    /// A leaf was created for the current suffix
    Resolved,
    /// The current suffix, and so every shorter one, is already present
    ShowStop,
}

/// Mutable state carried from one extension to the next
#[derive(Debug, Clone, Default)]
struct BuildState {
    active: ActivePoint,
    /// Suffixes of the processed prefix that have no leaf yet
    unresolved: usize,
    /// Internal node created earlier in this phase, waiting for its suffix link
    last_split: Option<NodeId>,
    /// Offset of the symbol being inserted
    phase: usize,
}

struct Construction<'a, V> {
    text: &'a [Symbol],
    nodes: Vec<Node>,
    symbol_count: usize,
    state: BuildState,
    visitor: &'a mut V,
}

impl<'a, V: BuildVisitor> Construction<'a, V> {
    fn new(text: &'a [Symbol], symbol_count: usize, visitor: &'a mut V) -> Self {
        // Root plus at most n - 1 internal nodes; leaves are not materialized
        let mut nodes = Vec::with_capacity(text.len().max(1));
        nodes.push(Node::new(0, symbol_count));
        Self {
            text,
            nodes,
            symbol_count,
            state: BuildState::default(),
            visitor,
        }
    }

    fn run(mut self) -> Vec<Node> {
        for phase in 0..self.text.len() {
            self.state.phase = phase;
            self.state.unresolved += 1;
            self.state.last_split = None;

            while self.state.unresolved > 0 {
                if self.extend() == Extension::ShowStop {
                    break;
                }
            }
        }

        debug_assert_eq!(self.state.unresolved, 0, "terminator must resolve every suffix");
        self.nodes
    }

    #[inline]
    fn last(&self) -> usize {
        self.text.len() - 1
    }

    #[inline]
    fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    #[inline]
    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.index()]
    }

    fn extend(&mut self) -> Extension {
        let phase = self.state.phase;
        let symbol = self.text[phase];
        let suffix_start = phase + 1 - self.state.unresolved;

        if self.normalize(phase) && self.state.active.is_explicit() {
            self.link_pending(self.state.active.node);
        }

        let active = self.state.active;
        if active.is_explicit() {
            if self.node(active.node).child(symbol).is_some() {
                self.link_pending(active.node);
                self.state.active.edge = Some(symbol);
                self.state.active.length = 1;
                self.normalize(phase + 1);
                return Extension::ShowStop;
            }

            self.insert_leaf(suffix_start, symbol);
            return Extension::Resolved;
        }

        let Some((key, edge)) = self.active_edge() else {
            debug_assert!(false, "implicit active point without an edge");
            return Extension::ShowStop;
        };

        if self.text[edge.from + active.length] == symbol {
            self.state.active.length += 1;
            self.normalize(phase + 1);
            return Extension::ShowStop;
        }

        self.split_edge(key, edge, suffix_start, symbol);
        Extension::Resolved
    }

    fn active_edge(&self) -> Option<(Symbol, Edge)> {
        let active = self.state.active;
        let key = active.edge?;
        let edge = self.node(active.node).child(key)?;
        Some((key, *edge))
    }

    /// Walk the active point down while it reaches past its edge
    ///
    /// `position` is the offset of the next symbol to insert; the active point
    /// spells `text[position - length..position]` below the active node.
    /// Returns true if the active node changed.
    fn normalize(&mut self, position: usize) -> bool {
        let last = self.last();
        let mut moved = false;

        while self.state.active.length > 0 {
            let active = self.state.active;
            let key = self.text[position - active.length];
            let Some(edge) = self.node(active.node).child(key).copied() else {
                debug_assert!(false, "active point left the tree");
                break;
            };

            let span = edge.len(last);
            if active.length < span {
                self.state.active.edge = Some(key);
                break;
            }

            // Leaf labels always outlast the active length
            let Some(tail) = edge.tail else {
                break;
            };
            self.state.active.node = tail;
            self.state.active.length -= span;
            moved = true;
        }

        if self.state.active.length == 0 {
            self.state.active.edge = None;
        }
        moved
    }

    /// Rule 2: point the pending internal node at `target`
    fn link_pending(&mut self, target: NodeId) {
        if let Some(pending) = self.state.last_split.take() {
            self.node_mut(pending).suffix_link = Some(target);
        }
    }

    /// Case 1: add a leaf below the explicit active node
    fn insert_leaf(&mut self, suffix_start: usize, symbol: Symbol) {
        let phase = self.state.phase;
        let node = self.state.active.node;
        let depth = self.node(node).depth;

        self.node_mut(node).set_child(symbol, Edge::leaf(phase));
        self.visitor.on_insert(depth, suffix_start, symbol);
        self.link_pending(node);
        self.state.unresolved -= 1;

        if node != NodeId::ROOT {
            self.follow_suffix_link();
        }
    }

    /// Case 4: split the active edge and hang a leaf off the new node
    fn split_edge(&mut self, key: Symbol, edge: Edge, suffix_start: usize, symbol: Symbol) {
        let phase = self.state.phase;
        let active = self.state.active;
        let split_at = edge.from + active.length;
        let depth = self.node(active.node).depth + active.length;
        let split = NodeId(self.nodes.len() as u32);

        let mut node = Node::new(depth, self.symbol_count);
        node.set_child(
            self.text[split_at],
            Edge {
                from: split_at,
                end: edge.end,
                tail: edge.tail,
            },
        );
        node.set_child(symbol, Edge::leaf(phase));
        self.nodes.push(node);

        self.node_mut(active.node).set_child(
            key,
            Edge {
                from: edge.from,
                end: EdgeEnd::Bounded(split_at - 1),
                tail: Some(split),
            },
        );

        self.visitor.on_split(depth, suffix_start);
        self.link_pending(split);
        self.state.last_split = Some(split);
        self.state.unresolved -= 1;

        if active.node == NodeId::ROOT {
            // Rule 1
            self.state.active.length -= 1;
            self.refresh_active_edge();
        } else {
            // Rule 3
            self.follow_suffix_link();
        }
    }

    /// Move the active node to its suffix link, or re-anchor at the root
    fn follow_suffix_link(&mut self) {
        let active = self.state.active;
        let node = self.node(active.node);
        let (link, depth) = (node.suffix_link, node.depth);
        match link {
            Some(link) => self.state.active.node = link,
            None => {
                // Spell the next suffix from the root instead
                self.state.active.length = depth + active.length - 1;
                self.state.active.node = NodeId::ROOT;
            }
        }
        self.refresh_active_edge();
    }

    fn refresh_active_edge(&mut self) {
        let length = self.state.active.length;
        self.state.active.edge = if length > 0 {
            Some(self.text[self.state.phase - length])
        } else {
            None
        };
    }
}
