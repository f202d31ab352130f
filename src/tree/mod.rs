//! Suffix tree indexing module
//!
//! This module provides O(m) exact substring search, where m is the pattern
//! length, over a suffix tree built in O(n) time.
//!
//! ## Architecture
//!
//! - `types`: Node/edge arena model, active point, configuration
//! - `builder`: Ukkonen construction
//! - `matcher`: Pattern lookup over a finished tree
//! - `visitor`: Observers of construction events
//! - `stats`: Structural statistics

pub mod builder;
pub mod matcher;
pub mod stats;
pub mod suffix_tree;
pub mod types;
pub mod visitor;

// Re-exports for convenience
pub use builder::SuffixTreeBuilder;
pub use matcher::NOT_FOUND;
pub use stats::TreeStats;
pub use suffix_tree::SuffixTree;
pub use types::{ActivePoint, Edge, EdgeEnd, Node, NodeId, TreeConfig};
pub use visitor::{BuildVisitor, CommonPrefixVisitor, NoopVisitor};
