//! Error types for the word trie.
//!
//! Absence of a word or prefix is never an error; these variants only cover
//! misuse of the building phase.

/// Errors that can occur in word trie operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum TrieError {
    /// Insertion was attempted after the trie was compressed.
    #[error("Cannot insert '{word}' into a compressed trie; decompress it first")]
    AlreadyCompressed {
        /// The word that was rejected.
        word: String,
    },

    /// The word is longer than the trie admits.
    #[error("Word of {len} letters exceeds maximum word length of {max_len}")]
    WordTooLong {
        /// Letters in the rejected word.
        len: usize,
        /// The maximum allowed length.
        max_len: usize,
    },

    /// The word contains a letter the trie's alphabet does not admit.
    #[error("Word '{word}' contains letter '{letter}' outside the trie alphabet")]
    LetterOutsideAlphabet {
        /// The word that was rejected.
        word: String,
        /// The first offending letter.
        letter: char,
    },
}

/// Result type for word trie operations.
pub type TrieResult<T> = Result<T, TrieError>;
