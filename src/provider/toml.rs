// Copyright (c) 2025 Wordtrie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! TOML provider.

use tracing::debug;

use super::document::TrieDocument;
use super::error::{ProviderError, ProviderResult};
use super::Provider;
use crate::data_structures::word_trie::WordTrie;

/// Format name the TOML provider is registered under.
pub const TOML_FORMAT: &str = "toml";

/// Dumps and loads tries as TOML [`TrieDocument`]s, one `[[nodes]]` table
/// per node.
#[derive(Debug, Clone, Copy, Default)]
pub struct TomlProvider;

impl TomlProvider {
    fn decode_error(message: impl ToString) -> ProviderError {
        ProviderError::Decode {
            format: TOML_FORMAT.to_string(),
            message: message.to_string(),
        }
    }
}

impl Provider for TomlProvider {
    fn dump(&self, trie: &WordTrie) -> ProviderResult<Vec<u8>> {
        let document = TrieDocument::from_trie(trie);
        let text = ::toml::to_string(&document).map_err(|e| ProviderError::Encode {
            format: TOML_FORMAT.to_string(),
            message: e.to_string(),
        })?;
        debug!(format = TOML_FORMAT, bytes = text.len(), "Dumped trie");
        Ok(text.into_bytes())
    }

    fn load(&self, bytes: &[u8]) -> ProviderResult<WordTrie> {
        let text = std::str::from_utf8(bytes).map_err(Self::decode_error)?;
        let document: TrieDocument = ::toml::from_str(text).map_err(Self::decode_error)?;
        debug!(format = TOML_FORMAT, nodes = document.nodes.len(), "Loaded trie");
        document.into_trie()
    }
}
