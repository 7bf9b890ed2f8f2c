// Copyright (c) 2025 Wordtrie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Structural compression of word trie nodes.
//!
//! Compression fuses every maximal run of non-terminal, single-child nodes
//! into one node whose label is the concatenation of the run's letters.
//! Terminal nodes, leaves and branching nodes stay boundaries, so membership
//! and prefix queries answer exactly as they did on the raw tree.

use std::collections::BTreeMap;

use super::node::Node;

impl Node {
    /// Compresses the tree rooted at this node.
    ///
    /// The root keeps its (empty) label and is never fused into its child.
    /// Running this on an already compressed tree returns it unchanged.
    pub fn compress(self) -> Node {
        self.compress_subtree(true)
    }

    fn compress_subtree(mut self, is_root: bool) -> Node {
        // Children first, so their own chains are collapsed before deciding
        // whether to absorb one of them.
        self.children = std::mem::take(&mut self.children)
            .into_iter()
            .map(|(letter, child)| (letter, child.compress_subtree(false)))
            .collect();

        if is_root || self.terminal || self.children.len() != 1 {
            return self;
        }

        match self.children.pop_first() {
            Some((_, child)) => {
                let mut label = self.label;
                label.push_str(&child.label);
                Node {
                    label,
                    terminal: child.terminal,
                    children: child.children,
                }
            }
            None => self,
        }
    }

    /// Splits every multi-letter label back into a chain of one-letter nodes.
    ///
    /// Only the last node of each chain keeps the terminal flag and children.
    pub fn decompress(self) -> Node {
        let children: BTreeMap<char, Node> = self
            .children
            .into_iter()
            .map(|(letter, child)| (letter, child.decompress()))
            .collect();

        let letters: Vec<char> = self.label.chars().collect();
        let Some((&last, leading)) = letters.split_last() else {
            return Node {
                label: self.label,
                terminal: self.terminal,
                children,
            };
        };

        let mut node = Node {
            label: last.to_string(),
            terminal: self.terminal,
            children,
        };
        let mut key = last;
        for &letter in leading.iter().rev() {
            node = Node {
                label: letter.to_string(),
                terminal: false,
                children: BTreeMap::from([(key, node)]),
            };
            key = letter;
        }
        node
    }
}
