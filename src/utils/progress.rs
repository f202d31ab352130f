//! Build progress reporting
//!
//! [`ProgressVisitor`] advances a progress bar as suffixes get their leaves.
//! The bar becomes a no-op when the `progress` feature is disabled.

use crate::alphabet::Symbol;
use crate::tree::BuildVisitor;

#[cfg(feature = "progress")]
pub use indicatif::{ProgressBar, ProgressStyle};

#[cfg(not(feature = "progress"))]
pub use self::noop::*;

#[cfg(not(feature = "progress"))]
mod noop {
    /// No-op progress bar when `progress` feature is disabled
    #[derive(Clone)]
    pub struct ProgressBar;

    impl ProgressBar {
        pub fn new(_len: u64) -> Self {
            ProgressBar
        }

        pub fn hidden() -> Self {
            ProgressBar
        }

        pub fn set_style(&self, _style: ProgressStyle) {}
        pub fn set_message(&self, _msg: impl Into<std::borrow::Cow<'static, str>>) {}
        pub fn set_position(&self, _pos: u64) {}
        pub fn finish_and_clear(&self) {}
    }

    /// No-op progress style
    pub struct ProgressStyle;

    impl ProgressStyle {
        pub fn default_bar() -> Self {
            ProgressStyle
        }

        pub fn template(self, _template: &str) -> Result<Self, std::convert::Infallible> {
            Ok(self)
        }

        pub fn progress_chars(self, _chars: &str) -> Self {
            self
        }
    }
}

/// Redraw at most once per this many resolved suffixes
const TICK_INTERVAL: u64 = 4096;

/// Texts shorter than this build too fast to be worth a bar
pub const MIN_PROGRESS_LEN: usize = 1 << 20;

/// Visitor that reports construction progress
pub struct ProgressVisitor {
    bar: ProgressBar,
    resolved: u64,
}

impl ProgressVisitor {
    /// Progress over a text of `text_len` characters
    pub fn new(text_len: usize) -> Self {
        // Every suffix, including the terminator one, gets exactly one leaf
        let bar = ProgressBar::new(text_len as u64 + 1);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}")
        {
            bar.set_style(style.progress_chars("█▓▒░  "));
        }
        bar.set_message("Building suffix tree...");
        Self { bar, resolved: 0 }
    }

    /// Visitor that draws nothing
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
            resolved: 0,
        }
    }

    /// Suffixes resolved so far
    pub fn resolved(&self) -> u64 {
        self.resolved
    }

    fn tick(&mut self) {
        self.resolved += 1;
        if self.resolved % TICK_INTERVAL == 0 {
            self.bar.set_position(self.resolved);
        }
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl BuildVisitor for ProgressVisitor {
    fn on_insert(&mut self, _depth: usize, _suffix_start: usize, _symbol: Symbol) {
        self.tick();
    }

    fn on_split(&mut self, _depth: usize, _suffix_start: usize) {
        self.tick();
    }
}
