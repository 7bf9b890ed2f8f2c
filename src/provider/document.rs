// Copyright (c) 2025 Wordtrie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Serializable snapshot of a trie shared by the built-in providers.
//!
//! The tree is flattened into a pre-order list of node records; each record
//! names its children by index and node 0 is the root. Decoding rebuilds the
//! tree and rejects anything that is not a well-formed trie.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::error::{ProviderError, ProviderResult};
use crate::config::trie::{DEFAULT_MAX_WORD_LEN, MAX_WORD_LEN_LIMIT};
use crate::data_structures::word_trie::{Alphabet, Node, Representation, WordTrie};

/// Current document layout version.
pub const DOCUMENT_VERSION: u32 = 1;

/// Flattened form of a [`WordTrie`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrieDocument {
    /// Layout version, see [`DOCUMENT_VERSION`]
    pub version: u32,

    /// Whether the nodes carry compressed labels
    pub compressed: bool,

    /// Whether the trie folds case
    pub case_sensitive: bool,

    /// Admitted letters; absent when any letter is admitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alphabet: Option<String>,

    /// Longest word the trie accepts; no stored word may exceed it
    #[serde(default = "default_max_word_len")]
    pub max_word_len: usize,

    /// Nodes in pre-order, root first
    pub nodes: Vec<NodeRecord>,
}

/// One node of a [`TrieDocument`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeRecord {
    /// Letters carried by the node
    pub label: String,

    /// Whether the node ends a stored word
    pub terminal: bool,

    /// Indices of child records
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<usize>,
}

impl TrieDocument {
    /// Captures `trie` as a document.
    pub fn from_trie(trie: &WordTrie) -> Self {
        let mut nodes = Vec::with_capacity(trie.node_count());
        flatten(trie.root(), &mut nodes);

        Self {
            version: DOCUMENT_VERSION,
            compressed: trie.is_compressed(),
            case_sensitive: trie.is_case_sensitive(),
            alphabet: trie.alphabet().letters(),
            max_word_len: trie.max_word_len(),
            nodes,
        }
    }

    /// Rebuilds the trie described by this document.
    ///
    /// # Returns
    ///
    /// * `Ok(WordTrie)` - The rebuilt trie.
    /// * `Err(ProviderError::MalformedDocument)` - If the records do not form
    ///   a valid trie, or spell a word longer than `max_word_len`.
    pub fn into_trie(self) -> ProviderResult<WordTrie> {
        if self.version != DOCUMENT_VERSION {
            return Err(malformed(format!(
                "unsupported document version {}",
                self.version
            )));
        }
        if self.max_word_len == 0 || self.max_word_len > MAX_WORD_LEN_LIMIT {
            return Err(malformed(format!(
                "max_word_len {} is outside 1..={MAX_WORD_LEN_LIMIT}",
                self.max_word_len
            )));
        }
        if self.nodes.is_empty() {
            return Err(malformed("document has no root node".to_string()));
        }

        let alphabet = match &self.alphabet {
            Some(letters) => Alphabet::from_letters(letters),
            None => Alphabet::Any,
        };

        let mut rebuild = Rebuild {
            records: &self.nodes,
            claimed: vec![false; self.nodes.len()],
            alphabet: &alphabet,
            compressed: self.compressed,
            case_sensitive: self.case_sensitive,
            max_word_len: self.max_word_len,
        };
        let root = rebuild.node(0, 0)?;

        if let Some(index) = rebuild.claimed.iter().position(|claimed| !claimed) {
            return Err(malformed(format!("node {index} is unreachable from the root")));
        }

        let representation = if self.compressed {
            Representation::Compressed
        } else {
            Representation::Raw
        };

        Ok(WordTrie::from_parts(
            root,
            alphabet,
            self.case_sensitive,
            representation,
            self.max_word_len,
        ))
    }
}

fn flatten(node: &Node, nodes: &mut Vec<NodeRecord>) -> usize {
    let index = nodes.len();
    nodes.push(NodeRecord {
        label: node.label().to_string(),
        terminal: node.is_terminal(),
        children: Vec::new(),
    });

    for child in node.children() {
        let child_index = flatten(child, nodes);
        nodes[index].children.push(child_index);
    }

    index
}

fn default_max_word_len() -> usize {
    DEFAULT_MAX_WORD_LEN
}

fn malformed(message: String) -> ProviderError {
    ProviderError::MalformedDocument(message)
}

struct Rebuild<'a> {
    records: &'a [NodeRecord],
    claimed: Vec<bool>,
    alphabet: &'a Alphabet,
    compressed: bool,
    case_sensitive: bool,
    max_word_len: usize,
}

impl Rebuild<'_> {
    /// Rebuilds record `index`, whose parent path spells `depth` letters.
    ///
    /// Recursion depth is bounded by `max_word_len`, which is checked before
    /// descending into children.
    fn node(&mut self, index: usize, depth: usize) -> ProviderResult<Node> {
        let records = self.records;
        let record = records
            .get(index)
            .ok_or_else(|| malformed(format!("child index {index} is out of range")))?;

        // A second claim means shared ownership or a cycle.
        if std::mem::replace(&mut self.claimed[index], true) {
            return Err(malformed(format!("node {index} is referenced more than once")));
        }

        let is_root = index == 0;
        self.check_record(index, record, is_root)?;

        let depth = depth + record.label.chars().count();
        if depth > self.max_word_len {
            return Err(malformed(format!(
                "node {index} spells a word longer than {} letters",
                self.max_word_len
            )));
        }

        let mut children = BTreeMap::new();
        for &child_index in &record.children {
            let child = self.node(child_index, depth)?;
            let Some(first) = child.label().chars().next() else {
                return Err(malformed(format!("node {child_index} has an empty label")));
            };
            if children.insert(first, child).is_some() {
                return Err(malformed(format!(
                    "node {index} has several children starting with '{first}'"
                )));
            }
        }

        Ok(Node::from_parts(
            record.label.clone(),
            record.terminal,
            children,
        ))
    }

    fn check_record(&self, index: usize, record: &NodeRecord, is_root: bool) -> ProviderResult<()> {
        if is_root {
            return if record.label.is_empty() {
                Ok(())
            } else {
                Err(malformed("root node must have an empty label".to_string()))
            };
        }

        let letters = record.label.chars().count();
        if letters == 0 {
            return Err(malformed(format!("node {index} has an empty label")));
        }
        if !self.compressed && letters != 1 {
            return Err(malformed(format!(
                "node {index} has a multi-letter label in a raw trie"
            )));
        }
        if !self.case_sensitive && record.label.to_lowercase() != record.label {
            return Err(malformed(format!(
                "node {index} has uppercase letters in a case-folding trie"
            )));
        }
        if let Some(letter) = self.alphabet.first_foreign(&record.label) {
            return Err(malformed(format!(
                "node {index} has letter '{letter}' outside the alphabet"
            )));
        }
        if record.children.is_empty() && !record.terminal {
            return Err(malformed(format!("leaf node {index} is not terminal")));
        }
        if self.compressed && !record.terminal && record.children.len() == 1 {
            return Err(malformed(format!(
                "node {index} is an uncompressed chain link in a compressed trie"
            )));
        }

        Ok(())
    }
}
