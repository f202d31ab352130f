//! # SFX - Suffix Tree Pattern Index
//!
//! SFX indexes a fixed text over a small alphabet so that any pattern can be
//! tested for occurrence in time proportional to the pattern length,
//! independent of the text length.
//!
//! ## Architecture
//!
//! The crate is organized into these main modules:
//!
//! - [`alphabet`] - Mapping characters to dense symbols plus a terminator
//! - [`tree`] - Ukkonen construction, matching, construction observers
//! - [`output`] - Result formatting for the command line
//! - [`utils`] - Line-based input and progress reporting
//! - [`error`] - Error types
//!
//! ## Quick Start
//!
//! ```
//! use sfx::tree::{SuffixTree, NOT_FOUND};
//!
//! let tree = SuffixTree::new("abcabxabcd").unwrap();
//! assert_eq!(tree.find("cd").unwrap(), Some(8));
//! assert_eq!(tree.match_position("cdx").unwrap(), NOT_FOUND);
//! assert_eq!(tree.find_all("ab").unwrap(), vec![0, 3, 6]);
//! ```
//!
//! ## Instrumentation
//!
//! Construction can be observed with a [`tree::BuildVisitor`]. The bundled
//! [`tree::CommonPrefixVisitor`] records, for every suffix, the length of the
//! longest prefix it shares with an earlier suffix:
//!
//! ```
//! use sfx::tree::{CommonPrefixVisitor, SuffixTreeBuilder};
//!
//! let mut visitor = CommonPrefixVisitor::new(6);
//! SuffixTreeBuilder::with_defaults()
//!     .build_with_visitor("banana", &mut visitor)
//!     .unwrap();
//! assert_eq!(visitor.lengths(), &[0, 0, 0, 3, 2, 1]);
//! ```

pub mod alphabet;
pub mod error;
pub mod output;
pub mod tree;
pub mod utils;

pub use alphabet::{Alphabet, Symbol};
pub use error::{TreeError, TreeResult};
pub use tree::{SuffixTree, SuffixTreeBuilder};
