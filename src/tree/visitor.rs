//! Construction observers
//!
//! A [`BuildVisitor`] is told about every leaf the builder creates, either
//! directly below an explicit node (`on_insert`) or below a freshly split
//! internal node (`on_split`). Each suffix of the text is resolved by exactly
//! one of these events. Visitors only observe; they cannot change the tree.

use crate::alphabet::Symbol;

/// Observer of structural events during construction
pub trait BuildVisitor {
    /// A leaf edge was added to an explicit node of string depth `depth`
    fn on_insert(&mut self, depth: usize, suffix_start: usize, symbol: Symbol) {
        let _ = (depth, suffix_start, symbol);
    }

    /// An edge was split, creating an internal node of string depth `depth`
    fn on_split(&mut self, depth: usize, suffix_start: usize) {
        let _ = (depth, suffix_start);
    }
}

/// Visitor that ignores every event
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopVisitor;

impl BuildVisitor for NoopVisitor {}

impl<V: BuildVisitor + ?Sized> BuildVisitor for &mut V {
    fn on_insert(&mut self, depth: usize, suffix_start: usize, symbol: Symbol) {
        (**self).on_insert(depth, suffix_start, symbol);
    }

    fn on_split(&mut self, depth: usize, suffix_start: usize) {
        (**self).on_split(depth, suffix_start);
    }
}

impl<A: BuildVisitor, B: BuildVisitor> BuildVisitor for (A, B) {
    fn on_insert(&mut self, depth: usize, suffix_start: usize, symbol: Symbol) {
        self.0.on_insert(depth, suffix_start, symbol);
        self.1.on_insert(depth, suffix_start, symbol);
    }

    fn on_split(&mut self, depth: usize, suffix_start: usize) {
        self.0.on_split(depth, suffix_start);
        self.1.on_split(depth, suffix_start);
    }
}

/// Records, per suffix start, the longest prefix shared with an earlier suffix
///
/// When suffix `j` gets its leaf, the depth of the branching point is the
/// length of the longest prefix it has in common with any suffix starting
/// before `j`.
#[derive(Debug, Clone)]
pub struct CommonPrefixVisitor {
    lengths: Vec<usize>,
}

impl CommonPrefixVisitor {
    /// Visitor for a text of `text_len` characters (terminator excluded)
    pub fn new(text_len: usize) -> Self {
        Self {
            lengths: vec![0; text_len],
        }
    }

    fn record(&mut self, depth: usize, suffix_start: usize) {
        // The terminator suffix has no slot
        if let Some(slot) = self.lengths.get_mut(suffix_start) {
            *slot = (*slot).max(depth);
        }
    }

    pub fn lengths(&self) -> &[usize] {
        &self.lengths
    }

    pub fn into_lengths(self) -> Vec<usize> {
        self.lengths
    }
}

impl BuildVisitor for CommonPrefixVisitor {
    fn on_insert(&mut self, depth: usize, suffix_start: usize, _symbol: Symbol) {
        self.record(depth, suffix_start);
    }

    fn on_split(&mut self, depth: usize, suffix_start: usize) {
        self.record(depth, suffix_start);
    }
}
