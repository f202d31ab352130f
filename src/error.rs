//! Errors raised while canonicalizing input or building a tree

/// Result type for tree operations
pub type TreeResult<T> = Result<T, TreeError>;

/// Errors that can occur while indexing text or querying a tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// A character falls outside the configured alphabet
    InvalidSymbol {
        /// The offending character
        ch: char,
        /// Character index within the input
        position: usize,
    },
    /// An alphabet must contain at least one character
    EmptyAlphabet,
}

impl std::fmt::Display for TreeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TreeError::InvalidSymbol { ch, position } => {
                write!(f, "Invalid symbol {:?} at position {}", ch, position)
            }
            TreeError::EmptyAlphabet => write!(f, "Alphabet must not be empty"),
        }
    }
}

impl std::error::Error for TreeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = TreeError::InvalidSymbol { ch: 'Z', position: 4 };
        assert_eq!(err.to_string(), "Invalid symbol 'Z' at position 4");
        assert_eq!(TreeError::EmptyAlphabet.to_string(), "Alphabet must not be empty");
    }
}
