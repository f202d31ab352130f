//! Alphabet canonicalization
//!
//! Text is indexed over a small contiguous range of characters. Each
//! character is mapped to a dense symbol in `[0, size)` by subtracting the
//! first character of the range, and one terminator symbol (`size`) is
//! appended so that no suffix of the text is a prefix of another.

use crate::error::{TreeError, TreeResult};
use serde::{Deserialize, Serialize};

/// Canonical symbol: an alphabet index, or the terminator
pub type Symbol = u8;

/// A contiguous character range used to canonicalize text and patterns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alphabet {
    /// First character of the range (maps to symbol 0)
    pub first: char,
    /// Number of characters in the range
    pub size: u8,
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::lowercase()
    }
}

impl Alphabet {
    /// Create an alphabet of `size` characters starting at `first`
    pub fn new(first: char, size: u8) -> TreeResult<Self> {
        if size == 0 {
            return Err(TreeError::EmptyAlphabet);
        }
        Ok(Self { first, size })
    }

    /// The 26-letter latin lowercase alphabet
    pub const fn lowercase() -> Self {
        Self { first: 'a', size: 26 }
    }

    /// Symbol appended after the text; never produced by a character
    #[inline]
    pub fn terminator(&self) -> Symbol {
        self.size
    }

    /// Number of distinct symbols including the terminator
    #[inline]
    pub fn symbol_count(&self) -> usize {
        self.size as usize + 1
    }

    /// Check if a character belongs to the alphabet
    pub fn contains(&self, ch: char) -> bool {
        self.offset(ch).is_some()
    }

    #[inline]
    fn offset(&self, ch: char) -> Option<Symbol> {
        let offset = (ch as u32).checked_sub(self.first as u32)?;
        (offset < self.size as u32).then_some(offset as Symbol)
    }

    /// Map one character to its symbol
    pub fn symbol(&self, ch: char, position: usize) -> TreeResult<Symbol> {
        self.offset(ch)
            .ok_or(TreeError::InvalidSymbol { ch, position })
    }

    /// Map a symbol back to its character (`None` for the terminator)
    pub fn character(&self, symbol: Symbol) -> Option<char> {
        if symbol >= self.size {
            return None;
        }
        char::from_u32(self.first as u32 + symbol as u32)
    }

    /// Canonicalize a text and append the terminator
    ///
    /// The whole text is rejected on the first character outside the
    /// alphabet.
    pub fn canonicalize(&self, text: &str) -> TreeResult<Vec<Symbol>> {
        let mut symbols = self.canonicalize_pattern(text)?;
        symbols.push(self.terminator());
        Ok(symbols)
    }

    /// Canonicalize a pattern (no terminator)
    pub fn canonicalize_pattern(&self, pattern: &str) -> TreeResult<Vec<Symbol>> {
        let mut symbols = Vec::with_capacity(pattern.len() + 1);
        for (position, ch) in pattern.chars().enumerate() {
            symbols.push(self.symbol(ch, position)?);
        }
        Ok(symbols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonicalize_appends_terminator() {
        let alphabet = Alphabet::lowercase();
        assert_eq!(alphabet.canonicalize("abz").unwrap(), vec![0, 1, 25, 26]);
        assert_eq!(alphabet.canonicalize("").unwrap(), vec![26]);
    }

    #[test]
    fn test_pattern_has_no_terminator() {
        let alphabet = Alphabet::lowercase();
        assert_eq!(alphabet.canonicalize_pattern("ca").unwrap(), vec![2, 0]);
        assert!(alphabet.canonicalize_pattern("").unwrap().is_empty());
    }

    #[test]
    fn test_invalid_symbol_position() {
        let alphabet = Alphabet::lowercase();
        assert_eq!(
            alphabet.canonicalize("abC"),
            Err(TreeError::InvalidSymbol { ch: 'C', position: 2 })
        );
        // Characters below the first one must not wrap around
        assert_eq!(
            alphabet.canonicalize("`"),
            Err(TreeError::InvalidSymbol { ch: '`', position: 0 })
        );
        assert_eq!(
            alphabet.canonicalize_pattern("a{"),
            Err(TreeError::InvalidSymbol { ch: '{', position: 1 })
        );
    }

    #[test]
    fn test_custom_alphabet() {
        let dna = Alphabet::new('0', 4).unwrap();
        assert_eq!(dna.canonicalize("0123").unwrap(), vec![0, 1, 2, 3, 4]);
        assert!(!dna.contains('4'));
        assert_eq!(dna.terminator(), 4);
        assert_eq!(dna.symbol_count(), 5);
    }

    #[test]
    fn test_empty_alphabet_rejected() {
        assert_eq!(Alphabet::new('a', 0), Err(TreeError::EmptyAlphabet));
    }

    #[test]
    fn test_character_inverse() {
        let alphabet = Alphabet::lowercase();
        assert_eq!(alphabet.character(0), Some('a'));
        assert_eq!(alphabet.character(25), Some('z'));
        assert_eq!(alphabet.character(alphabet.terminator()), None);
    }
}
