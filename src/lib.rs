//! Word Trie Library
//!
//! A set of words stored as a prefix tree. Tries are built letter by letter,
//! can be compressed so that single-child chains collapse into one node with
//! a multi-letter label, and answer membership, prefix, enumeration and
//! bounded edit-distance queries in either form.
//!
//! Tries are persisted through providers: pluggable encoders registered by
//! format name and selected by file extension or name.
//!
//! # Architecture
//!
//! - [`data_structures::word_trie`]: the tree, its compression and queries
//! - [`provider`]: the provider contract, built-in JSON/TOML providers and
//!   the provider collection
//! - [`config`]: layered configuration (defaults, file, environment)
//! - [`error`]: the aggregate error type
//! - [`logging`]: tracing subscriber setup

pub mod config;
pub mod data_structures;
pub mod error;
pub mod logging;
pub mod provider;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

pub use data_structures::word_trie::{Alphabet, FuzzyMatch, Representation, WordTrie};

/// Version information for the word trie crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library initialization function.
///
/// Validates `config`, installs the tracing subscriber and configures the
/// global provider collection.
pub fn init(config: &config::WordTrieConfig) -> error::WordTrieResult<()> {
    use crate::config::Validate;

    config.validate()?;
    logging::init_logging(&config.log)?;
    provider::configure_global(&config.provider)?;

    Ok(())
}
