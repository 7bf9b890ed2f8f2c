// Copyright (c) 2025 Wordtrie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! JSON provider.

use tracing::debug;

use super::document::TrieDocument;
use super::error::{ProviderError, ProviderResult};
use super::Provider;
use crate::data_structures::word_trie::WordTrie;

/// Format name the JSON provider is registered under.
pub const JSON_FORMAT: &str = "json";

/// Dumps and loads tries as JSON [`TrieDocument`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonProvider {
    pretty: bool,
}

impl JsonProvider {
    /// Creates a provider emitting compact JSON.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a provider emitting indented JSON.
    pub fn pretty() -> Self {
        Self { pretty: true }
    }
}

impl Provider for JsonProvider {
    fn dump(&self, trie: &WordTrie) -> ProviderResult<Vec<u8>> {
        let document = TrieDocument::from_trie(trie);
        let encoded = if self.pretty {
            serde_json::to_vec_pretty(&document)
        } else {
            serde_json::to_vec(&document)
        };

        let bytes = encoded.map_err(|e| ProviderError::Encode {
            format: JSON_FORMAT.to_string(),
            message: e.to_string(),
        })?;
        debug!(format = JSON_FORMAT, bytes = bytes.len(), "Dumped trie");
        Ok(bytes)
    }

    fn load(&self, bytes: &[u8]) -> ProviderResult<WordTrie> {
        let document: TrieDocument =
            serde_json::from_slice(bytes).map_err(|e| ProviderError::Decode {
                format: JSON_FORMAT.to_string(),
                message: e.to_string(),
            })?;
        debug!(format = JSON_FORMAT, nodes = document.nodes.len(), "Loaded trie");
        document.into_trie()
    }
}
