//! Data structures for the word trie crate.

pub mod word_trie;

// Re-export common data structures
pub use word_trie::{TrieError, TrieResult, WordTrie};
