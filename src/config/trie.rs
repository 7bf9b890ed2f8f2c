//! Trie construction configuration module.
//!
//! This module defines the alphabet, case policy and compression settings
//! used when building word tries.

use super::{ConfigResult, Validate};
use crate::data_structures::word_trie::Alphabet;
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Default longest word a trie accepts, in letters.
pub const DEFAULT_MAX_WORD_LEN: usize = 64;

/// Upper bound for `max_word_len`. Tree depth follows word length and the
/// traversals recurse per level, so the bound keeps them within the stack.
pub const MAX_WORD_LEN_LIMIT: usize = 512;

/// Trie construction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrieConfig {
    /// Whether words are stored and queried without case folding
    pub case_sensitive: bool,

    /// Whether stored words are restricted to `alphabet`
    pub restrict_alphabet: bool,

    /// Letters admitted when `restrict_alphabet` is set
    pub alphabet: String,

    /// Whether tries built from word lists are compressed once built
    pub compress: bool,

    /// Longest word accepted, in letters
    pub max_word_len: usize,
}

impl TrieConfig {
    /// The alphabet described by this configuration.
    pub fn alphabet(&self) -> Alphabet {
        if self.restrict_alphabet {
            Alphabet::from_letters(&self.alphabet)
        } else {
            Alphabet::Any
        }
    }
}

impl Default for TrieConfig {
    fn default() -> Self {
        Self {
            case_sensitive: false,
            restrict_alphabet: true,
            alphabet: ('a'..='z').collect(),
            compress: false,
            max_word_len: DEFAULT_MAX_WORD_LEN,
        }
    }
}

impl Validate for TrieConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.restrict_alphabet && self.alphabet.is_empty() {
            return Err(ConfigError::ValidationError(
                "alphabet cannot be empty when restrict_alphabet is set".to_string(),
            ));
        }

        if self.max_word_len == 0 || self.max_word_len > MAX_WORD_LEN_LIMIT {
            return Err(ConfigError::ValidationError(format!(
                "max_word_len must be between 1 and {MAX_WORD_LEN_LIMIT}, got {}",
                self.max_word_len
            )));
        }

        Ok(())
    }
}
