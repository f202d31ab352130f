//! Utility functions for the command line front end
//!
//! ## Modules
//!
//! - [`input`] - Line-based reading of texts and pattern lists
//! - [`progress`] - Progress bar driven by construction events

pub mod input;
pub mod progress;

pub use input::*;
pub use progress::*;
