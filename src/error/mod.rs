//! Error module for the word trie crate.
//!
//! Each component defines its own error enum next to its code; this module
//! aggregates them into a single error type for operations that cross
//! component boundaries (reading word lists, loading configuration,
//! persisting tries through providers).

use thiserror::Error;

use crate::data_structures::word_trie::TrieError;
use crate::provider::ProviderError;

pub mod config;

/// Result type alias used across component boundaries.
pub type WordTrieResult<T> = Result<T, WordTrieError>;

/// Core error enum for the word trie crate.
#[derive(Error, Debug)]
pub enum WordTrieError {
    /// Errors occurring during configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Errors raised while building a trie.
    #[error("Trie error: {0}")]
    Trie(#[from] TrieError),

    /// Errors raised by provider selection or serialization.
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// IO errors that may occur while reading word sources.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Custom error with message for cases where specific error types are not defined.
    #[error("{0}")]
    Custom(String),
}
