//! Lazy depth-first enumeration of stored words.

use super::node::Node;

/// Iterator over the words stored below a node.
///
/// Words are produced in pre-order: a terminal node yields its word before
/// any word of its subtree, and children are visited in letter order.
/// Calling [`Node::words`] again starts a fresh traversal.
#[derive(Debug, Clone)]
pub struct Words<'a> {
    /// Pending nodes, each paired with the word spelled up to its label end
    stack: Vec<(&'a Node, String)>,

    /// Words still allowed to be produced; `None` when unbounded
    remaining: Option<usize>,
}

impl<'a> Words<'a> {
    pub(super) fn new(start: &'a Node, word: String) -> Self {
        Self {
            stack: vec![(start, word)],
            remaining: None,
        }
    }

    pub(super) fn empty() -> Self {
        Self {
            stack: Vec::new(),
            remaining: None,
        }
    }

    /// Caps the number of produced words. A limit of 0 means unbounded.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.remaining = (limit > 0).then_some(limit);
        self
    }
}

impl Iterator for Words<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.remaining == Some(0) {
            return None;
        }

        while let Some((node, word)) = self.stack.pop() {
            for child in node.children.values().rev() {
                let mut child_word = String::with_capacity(word.len() + child.label.len());
                child_word.push_str(&word);
                child_word.push_str(&child.label);
                self.stack.push((child, child_word));
            }

            if node.terminal {
                if let Some(remaining) = self.remaining.as_mut() {
                    *remaining -= 1;
                }
                return Some(word);
            }
        }

        None
    }
}
