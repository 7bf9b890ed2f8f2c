//! Alphabet restriction for word tries.

use std::collections::BTreeSet;

/// The set of letters a trie admits in its labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Alphabet {
    /// Every letter is admitted.
    Any,
    /// Only the listed letters are admitted.
    Letters(BTreeSet<char>),
}

impl Alphabet {
    /// Lowercase ASCII letters `a` through `z`.
    pub fn lowercase_ascii() -> Self {
        Self::Letters(('a'..='z').collect())
    }

    /// Builds an alphabet from the distinct letters of `letters`.
    pub fn from_letters(letters: &str) -> Self {
        Self::Letters(letters.chars().collect())
    }

    /// Returns `true` if `letter` belongs to the alphabet.
    pub fn admits(&self, letter: char) -> bool {
        match self {
            Self::Any => true,
            Self::Letters(letters) => letters.contains(&letter),
        }
    }

    /// Returns the first letter of `word` outside the alphabet, if any.
    pub fn first_foreign(&self, word: &str) -> Option<char> {
        word.chars().find(|&letter| !self.admits(letter))
    }

    /// The admitted letters in order, or `None` for [`Alphabet::Any`].
    pub fn letters(&self) -> Option<String> {
        match self {
            Self::Any => None,
            Self::Letters(letters) => Some(letters.iter().collect()),
        }
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::lowercase_ascii()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_lowercase_ascii() {
        let alphabet = Alphabet::default();
        assert!(alphabet.admits('a'));
        assert!(alphabet.admits('z'));
        assert!(!alphabet.admits('A'));
        assert!(!alphabet.admits('é'));
        assert_eq!(
            alphabet.letters().as_deref(),
            Some("abcdefghijklmnopqrstuvwxyz")
        );
    }

    #[test]
    fn test_first_foreign() {
        let alphabet = Alphabet::from_letters("acgt");
        assert_eq!(alphabet.first_foreign("gattaca"), None);
        assert_eq!(alphabet.first_foreign("gatuaca"), Some('u'));
        assert_eq!(Alphabet::Any.first_foreign("Ünïcode"), None);
        assert_eq!(Alphabet::Any.letters(), None);
    }
}
