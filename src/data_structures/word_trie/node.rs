// Copyright (c) 2025 Wordtrie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node implementation for the word trie.
//!
//! A single node type serves both representations: raw trees carry one
//! letter per label, compressed trees carry multi-letter labels. Every query
//! matches labels as a unit, so the same code answers for both shapes.

use std::collections::BTreeMap;

use super::words::Words;

/// A node in the word trie.
///
/// Children are keyed by the first letter of their label and exclusively
/// owned by their parent.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Node {
    /// Letters spelled by this node; empty only for the root
    pub(super) label: String,

    /// Whether the path up to and including this label is a stored word
    pub(super) terminal: bool,

    /// Map of first letters to child nodes
    pub(super) children: BTreeMap<char, Node>,
}

/// Where a query word ends up after walking the tree.
#[derive(Debug)]
pub(super) enum Position<'a> {
    /// The whole word was consumed exactly at the end of this node's label.
    Boundary(&'a Node),
    /// The word ran out inside this node's label, which begins at byte
    /// offset `start` of the word.
    MidLabel { node: &'a Node, start: usize },
    /// Some letter had no matching path.
    Missing,
}

impl Node {
    /// Creates an empty root node.
    pub fn root() -> Self {
        Self::default()
    }

    /// Assembles a node from its parts.
    ///
    /// Used by decoders that rebuild a tree from a validated document; the
    /// caller is responsible for keying `children` by their first letter.
    pub(crate) fn from_parts(
        label: String,
        terminal: bool,
        children: BTreeMap<char, Node>,
    ) -> Self {
        Self {
            label,
            terminal,
            children,
        }
    }

    fn letter(letter: char) -> Self {
        Self {
            label: letter.to_string(),
            ..Self::default()
        }
    }

    /// The letters carried by this node.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Whether this node ends a stored word.
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Child whose label starts with `letter`.
    pub fn child(&self, letter: char) -> Option<&Node> {
        self.children.get(&letter)
    }

    /// Children in letter order.
    pub fn children(&self) -> impl Iterator<Item = &Node> {
        self.children.values()
    }

    /// Adds the branch for `word` below this node, one letter per node.
    ///
    /// Returns `true` if the word was not stored before. The empty word marks
    /// this node itself as terminal.
    pub fn insert(&mut self, word: &str) -> bool {
        let mut node = self;
        for letter in word.chars() {
            node = node
                .children
                .entry(letter)
                .or_insert_with(|| Node::letter(letter));
        }

        let added = !node.terminal;
        node.terminal = true;
        added
    }

    /// Walks `word` down the tree, matching whole labels.
    pub(super) fn locate(&self, word: &str) -> Position<'_> {
        let mut node = self;
        let mut consumed = 0;

        loop {
            let rest = &word[consumed..];
            let Some(first) = rest.chars().next() else {
                return Position::Boundary(node);
            };
            let Some(child) = node.children.get(&first) else {
                return Position::Missing;
            };

            if rest.starts_with(child.label.as_str()) {
                consumed += child.label.len();
                node = child;
            } else if child.label.starts_with(rest) {
                return Position::MidLabel {
                    node: child,
                    start: consumed,
                };
            } else {
                return Position::Missing;
            }
        }
    }

    /// Returns `true` if `word` is stored below this node.
    pub fn contains(&self, word: &str) -> bool {
        matches!(self.locate(word), Position::Boundary(node) if node.terminal)
    }

    /// Returns `true` if some path below this node spells `word`.
    pub fn has_prefix(&self, word: &str) -> bool {
        !matches!(self.locate(word), Position::Missing)
    }

    /// Stored words that are prefixes of `word`, shortest first.
    pub fn scan<'w>(&self, word: &'w str) -> Vec<&'w str> {
        let mut found = Vec::new();
        if self.terminal {
            found.push(&word[..0]);
        }

        let mut node = self;
        let mut consumed = 0;
        while let Some(first) = word[consumed..].chars().next() {
            let Some(child) = node.children.get(&first) else {
                break;
            };
            if !word[consumed..].starts_with(child.label.as_str()) {
                break;
            }

            consumed += child.label.len();
            node = child;
            if node.terminal {
                found.push(&word[..consumed]);
            }
        }

        found
    }

    /// Lazily iterates all words stored at or below this node.
    pub fn words(&self) -> Words<'_> {
        Words::new(self, self.label.clone())
    }

    /// Lazily iterates stored words that start with `prefix`.
    pub fn completions(&self, prefix: &str) -> Words<'_> {
        match self.locate(prefix) {
            Position::Boundary(node) => Words::new(node, prefix.to_string()),
            Position::MidLabel { node, start } => {
                let mut word = prefix[..start].to_string();
                word.push_str(&node.label);
                Words::new(node, word)
            }
            Position::Missing => Words::empty(),
        }
    }

    /// Number of stored words at or below this node.
    pub fn word_count(&self) -> usize {
        usize::from(self.terminal) + self.children.values().map(Node::word_count).sum::<usize>()
    }

    /// Number of nodes in this subtree, including this one.
    pub fn node_count(&self) -> usize {
        1 + self.children.values().map(Node::node_count).sum::<usize>()
    }
}
