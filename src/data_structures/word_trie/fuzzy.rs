// Copyright (c) 2025 Wordtrie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Bounded edit-distance search over trie nodes.
//!
//! The search walks the tree depth-first while carrying one row of the
//! Levenshtein matrix per branch: entry `i` of the row is the distance
//! between the letters spelled so far and the first `i` letters of the query.
//! Each letter of a label advances the row by one step. Since row minima
//! never decrease along a path, a branch is abandoned as soon as its minimum
//! exceeds the edit budget.

use super::node::Node;

/// A stored word found within the edit budget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuzzyMatch {
    /// The stored word.
    pub word: String,
    /// Its edit distance to the query.
    pub distance: usize,
}

struct FuzzySearch {
    query: Vec<char>,
    max_edits: usize,
}

impl FuzzySearch {
    fn new(query: &str, max_edits: usize) -> Self {
        Self {
            query: query.chars().collect(),
            max_edits,
        }
    }

    fn first_row(&self) -> Vec<usize> {
        (0..=self.query.len()).collect()
    }

    fn step(&self, previous: &[usize], letter: char) -> Vec<usize> {
        let mut row = Vec::with_capacity(previous.len());
        row.push(previous[0] + 1);

        for (i, &expected) in self.query.iter().enumerate() {
            let insertion = row[i] + 1;
            let deletion = previous[i + 1] + 1;
            let substitution = previous[i] + usize::from(expected != letter);
            row.push(insertion.min(deletion).min(substitution));
        }

        row
    }

    /// Advances `row` through `label`, or `None` once the branch is hopeless.
    fn advance(&self, row: &[usize], label: &str) -> Option<Vec<usize>> {
        let mut row = row.to_vec();
        for letter in label.chars() {
            row = self.step(&row, letter);
            if row.iter().min().copied().unwrap_or(0) > self.max_edits {
                return None;
            }
        }
        Some(row)
    }

    fn distance(row: &[usize]) -> usize {
        row.last().copied().unwrap_or(0)
    }

    fn any(&self, node: &Node, row: &[usize]) -> bool {
        if node.terminal && Self::distance(row) <= self.max_edits {
            return true;
        }

        node.children.values().any(|child| {
            self.advance(row, &child.label)
                .is_some_and(|next| self.any(child, &next))
        })
    }

    fn collect(&self, node: &Node, row: &[usize], word: &mut String, found: &mut Vec<FuzzyMatch>) {
        let distance = Self::distance(row);
        if node.terminal && distance <= self.max_edits {
            found.push(FuzzyMatch {
                word: word.clone(),
                distance,
            });
        }

        for child in node.children.values() {
            if let Some(next) = self.advance(row, &child.label) {
                let len = word.len();
                word.push_str(&child.label);
                self.collect(child, &next, word, found);
                word.truncate(len);
            }
        }
    }
}

impl Node {
    /// Returns `true` if some stored word is within `max_edits` insertions,
    /// deletions or substitutions of `word`.
    pub fn matches_within(&self, word: &str, max_edits: usize) -> bool {
        let search = FuzzySearch::new(word, max_edits);
        search.any(self, &search.first_row())
    }

    /// Every stored word within `max_edits` of `word`, in traversal order.
    pub fn fuzzy_matches(&self, word: &str, max_edits: usize) -> Vec<FuzzyMatch> {
        let search = FuzzySearch::new(word, max_edits);
        let mut found = Vec::new();
        let mut prefix = self.label.clone();
        search.collect(self, &search.first_row(), &mut prefix, &mut found);
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(words: &[&str]) -> Node {
        let mut root = Node::root();
        for word in words {
            root.insert(word);
        }
        root
    }

    #[test]
    fn test_zero_budget_is_membership() {
        let root = raw(&["cat", "car", "cart", "dog"]);
        for probe in ["cat", "car", "ca", "cag", "carts", "", "dog", "do"] {
            assert_eq!(root.matches_within(probe, 0), root.contains(probe), "{probe}");
        }
    }

    #[test]
    fn test_single_edit() {
        let root = raw(&["cat", "car", "cart", "dog"]);

        assert!(root.matches_within("cag", 1)); // substitution
        assert!(root.matches_within("ct", 1)); // insertion of 'a'
        assert!(root.matches_within("carts", 1)); // deletion of 's'
        assert!(!root.matches_within("cows", 1));
        assert!(root.matches_within("cows", 3));
    }

    #[test]
    fn test_empty_query_and_empty_trie() {
        let root = raw(&["ab"]);
        assert!(!root.matches_within("", 1));
        assert!(root.matches_within("", 2));

        assert!(!Node::root().matches_within("anything", 100));
    }

    #[test]
    fn test_compressed_labels() {
        let root = raw(&["kitten", "sitting", "mitten"]).compress();
        assert!(root.matches_within("sitten", 1));
        assert!(!root.matches_within("sittn", 0));
        assert!(root.matches_within("kitchen", 2));
    }

    #[test]
    fn test_fuzzy_matches_reports_distances() {
        let root = raw(&["cat", "car", "cart", "dog"]);
        let found = root.fuzzy_matches("cat", 1);

        assert_eq!(
            found,
            vec![
                FuzzyMatch { word: "car".to_string(), distance: 1 },
                FuzzyMatch { word: "cart".to_string(), distance: 1 },
                FuzzyMatch { word: "cat".to_string(), distance: 0 },
            ]
        );
    }
}
