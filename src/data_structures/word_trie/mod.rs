//! Word Trie Implementation
//!
//! This module provides a trie over words of a fixed alphabet with fast
//! membership, prefix, scan and fuzzy queries. A trie is built one word at a
//! time in its raw form (one letter per node) and can then be compressed,
//! collapsing non-branching chains into multi-letter nodes. Both forms answer
//! every query identically.
//!
//! # Example
//!
//! ```
//! use wordtrie::data_structures::word_trie::WordTrie;
//!
//! let mut trie = WordTrie::new();
//! for word in ["cat", "car", "cart", "dog"] {
//!     trie.insert(word).unwrap();
//! }
//!
//! assert!(trie.contains("car"));
//! assert!(!trie.contains("ca"));
//! assert!(trie.has_prefix("ca"));
//! assert_eq!(trie.scan("cart"), vec!["car", "cart"]);
//! assert!(trie.matches_within("cag", 1));
//!
//! let trie = trie.compress();
//! assert!(trie.contains("cart"));
//! assert_eq!(trie.len(), 4);
//! ```

mod alphabet;
mod compress;
mod error;
mod fuzzy;
mod node;
mod words;

use std::borrow::Cow;
use std::io::BufRead;

use tracing::{debug, info, trace};

use crate::config::trie::{TrieConfig, MAX_WORD_LEN_LIMIT};
use crate::error::WordTrieResult;

pub use alphabet::Alphabet;
pub use error::{TrieError, TrieResult};
pub use fuzzy::FuzzyMatch;
pub use node::Node;
pub use words::Words;

/// Which node shape currently backs a trie.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Representation {
    /// One letter per node; accepts insertions.
    Raw,
    /// Non-branching chains collapsed into multi-letter nodes; read-only.
    Compressed,
}

/// A trie of words over a declared alphabet.
///
/// Key features:
/// * Incremental construction, one letter per node
/// * Compression of non-branching chains into multi-letter nodes
/// * Case-insensitive lookups (configurable)
/// * Prefix, scan and bounded edit-distance queries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordTrie {
    /// The root node; its label is always empty
    root: Node,

    /// Letters admitted in stored words
    alphabet: Alphabet,

    /// Whether words are stored and queried as given
    case_sensitive: bool,

    /// Shape of the nodes below `root`
    representation: Representation,

    /// Longest word accepted by `insert`, in letters
    max_word_len: usize,
}

impl WordTrie {
    /// Creates an empty raw trie over lowercase ASCII letters that folds
    /// words to lowercase.
    pub fn new() -> Self {
        Self::with_config(&TrieConfig::default())
    }

    /// Creates an empty raw trie with the alphabet and case policy of `config`.
    pub fn with_config(config: &TrieConfig) -> Self {
        Self {
            root: Node::root(),
            alphabet: config.alphabet(),
            case_sensitive: config.case_sensitive,
            representation: Representation::Raw,
            max_word_len: config.max_word_len.min(MAX_WORD_LEN_LIMIT),
        }
    }

    /// Creates an empty, case-insensitive raw trie over `alphabet`.
    pub fn with_alphabet(alphabet: Alphabet) -> Self {
        Self {
            alphabet,
            ..Self::new()
        }
    }

    /// Sets whether words are stored and queried without case folding.
    pub fn case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    /// Builds a trie from a sequence of words.
    ///
    /// Construction stops at the first rejected word. The result is
    /// compressed when `config.compress` is set.
    ///
    /// # Arguments
    ///
    /// * `words` - The words to insert, in order.
    /// * `config` - Alphabet, case policy and compression setting.
    pub fn from_words<I, S>(words: I, config: &TrieConfig) -> TrieResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Self::with_config(config);
        for word in words {
            trie.insert(word)?;
        }
        Ok(trie.finish(config))
    }

    /// Builds a trie from a line-oriented word source, one word per line.
    ///
    /// Surrounding whitespace is trimmed and blank lines are skipped.
    ///
    /// # Returns
    ///
    /// * `Ok(WordTrie)` - The trie holding every word read.
    /// * `Err(WordTrieError)` - If reading failed or a word was rejected.
    pub fn from_reader<R: BufRead>(reader: R, config: &TrieConfig) -> WordTrieResult<Self> {
        let mut trie = Self::with_config(config);
        let mut lines = 0usize;
        for line in reader.lines() {
            let line = line?;
            lines += 1;
            let word = line.trim();
            if word.is_empty() {
                continue;
            }
            trie.insert(word)?;
        }

        info!(lines, words = trie.len(), "Loaded word list");
        Ok(trie.finish(config))
    }

    pub(crate) fn from_parts(
        root: Node,
        alphabet: Alphabet,
        case_sensitive: bool,
        representation: Representation,
        max_word_len: usize,
    ) -> Self {
        Self {
            root,
            alphabet,
            case_sensitive,
            representation,
            max_word_len,
        }
    }

    fn finish(self, config: &TrieConfig) -> Self {
        if config.compress {
            self.compress()
        } else {
            self
        }
    }

    fn normalize<'w>(&self, word: &'w str) -> Cow<'w, str> {
        if self.case_sensitive {
            Cow::Borrowed(word)
        } else {
            Cow::Owned(word.to_lowercase())
        }
    }

    /// Inserts a word into the trie.
    ///
    /// # Arguments
    ///
    /// * `word` - The word to insert. The empty word is allowed.
    ///
    /// # Returns
    ///
    /// * `Ok(bool)` - `true` if the word is new, `false` if it was already stored.
    /// * `Err(TrieError)` - If the trie is compressed, the word is longer than
    ///   the maximum word length or has a letter outside the alphabet.
    pub fn insert<W: AsRef<str>>(&mut self, word: W) -> TrieResult<bool> {
        let word = self.normalize(word.as_ref());

        if self.representation == Representation::Compressed {
            return Err(TrieError::AlreadyCompressed {
                word: word.into_owned(),
            });
        }

        let len = word.chars().count();
        if len > self.max_word_len {
            return Err(TrieError::WordTooLong {
                len,
                max_len: self.max_word_len,
            });
        }

        if let Some(letter) = self.alphabet.first_foreign(&word) {
            return Err(TrieError::LetterOutsideAlphabet {
                word: word.into_owned(),
                letter,
            });
        }

        let added = self.root.insert(&word);
        trace!(word = %word, added, "Inserted word");
        Ok(added)
    }

    /// Returns `true` if `word` is stored.
    pub fn contains(&self, word: &str) -> bool {
        self.root.contains(&self.normalize(word))
    }

    /// Returns `true` if some stored word starts with `prefix`.
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.root.has_prefix(&self.normalize(prefix))
    }

    /// Stored words that are prefixes of `word`, shortest first.
    pub fn scan(&self, word: &str) -> Vec<String> {
        let word = self.normalize(word);
        self.root
            .scan(&word)
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Lazily iterates every stored word.
    pub fn words(&self) -> Words<'_> {
        self.root.words()
    }

    /// Lazily iterates at most `limit` stored words; 0 means unbounded.
    pub fn words_with_limit(&self, limit: usize) -> Words<'_> {
        self.root.words().with_limit(limit)
    }

    /// Lazily iterates stored words starting with `prefix`.
    pub fn completions(&self, prefix: &str) -> Words<'_> {
        self.root.completions(&self.normalize(prefix))
    }

    /// Returns `true` if some stored word is within `max_edits` edits of `word`.
    pub fn matches_within(&self, word: &str, max_edits: usize) -> bool {
        self.root.matches_within(&self.normalize(word), max_edits)
    }

    /// Every stored word within `max_edits` edits of `word`, with its distance.
    pub fn fuzzy_matches(&self, word: &str, max_edits: usize) -> Vec<FuzzyMatch> {
        self.root.fuzzy_matches(&self.normalize(word), max_edits)
    }

    /// Number of stored words.
    ///
    /// This requires traversing the entire trie, so it's an O(n) operation.
    pub fn len(&self) -> usize {
        self.root.word_count()
    }

    /// Returns `true` if no word is stored.
    pub fn is_empty(&self) -> bool {
        self.root.is_leaf() && !self.root.is_terminal()
    }

    /// Number of nodes, including the root.
    pub fn node_count(&self) -> usize {
        self.root.node_count()
    }

    /// Collapses non-branching chains into multi-letter nodes.
    ///
    /// Compressing an already compressed trie returns it unchanged.
    pub fn compress(self) -> Self {
        if self.representation == Representation::Compressed {
            return self;
        }

        let before = self.root.node_count();
        let root = self.root.compress();
        debug!(before, after = root.node_count(), "Compressed trie");

        Self {
            root,
            representation: Representation::Compressed,
            ..self
        }
    }

    /// Restores the one-letter-per-node form so the trie accepts insertions.
    pub fn decompress(self) -> Self {
        if self.representation == Representation::Raw {
            return self;
        }

        let root = self.root.decompress();
        debug!(nodes = root.node_count(), "Decompressed trie");

        Self {
            root,
            representation: Representation::Raw,
            ..self
        }
    }

    /// Returns `true` if the trie is in its compressed form.
    pub fn is_compressed(&self) -> bool {
        self.representation == Representation::Compressed
    }

    /// The node shape currently backing this trie.
    pub fn representation(&self) -> Representation {
        self.representation
    }

    /// The alphabet stored words are restricted to.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Whether words are stored and queried without case folding.
    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// Longest word accepted by [`WordTrie::insert`], in letters.
    pub fn max_word_len(&self) -> usize {
        self.max_word_len
    }

    /// The root node.
    pub fn root(&self) -> &Node {
        &self.root
    }
}

impl Default for WordTrie {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn sample() -> WordTrie {
        let mut trie = WordTrie::new();
        for word in ["cat", "car", "cart", "dog"] {
            trie.insert(word).unwrap();
        }
        trie
    }

    #[test]
    fn test_trie_basic_operations() {
        let mut trie = WordTrie::new();

        // Test initial state
        assert!(trie.is_empty());
        assert_eq!(trie.len(), 0);

        // Test insertion
        assert!(trie.insert("hello").unwrap());
        assert_eq!(trie.len(), 1);
        assert!(!trie.is_empty());

        // Test retrieval
        assert!(trie.contains("hello"));
        assert!(!trie.contains("nonexistent"));

        // Test case-insensitivity
        assert!(trie.contains("HELLO"));
        assert!(!trie.insert("Hello").unwrap());
        assert_eq!(trie.len(), 1);
    }

    #[test]
    fn test_documented_example() {
        let trie = sample();

        assert!(trie.contains("car"));
        assert!(!trie.contains("ca"));
        assert!(trie.has_prefix("ca"));
        assert_eq!(trie.scan("cart"), vec!["car", "cart"]);
        assert!(trie.matches_within("cag", 1));

        let mut words: Vec<String> = trie.words().collect();
        words.sort();
        assert_eq!(words, vec!["car", "cart", "cat", "dog"]);
    }

    #[test]
    fn test_case_sensitive_trie() {
        let mut trie = WordTrie::with_alphabet(Alphabet::Any).case_sensitive(true);
        trie.insert("Rust").unwrap();

        assert!(trie.contains("Rust"));
        assert!(!trie.contains("rust"));
        assert_eq!(trie.scan("Rustacean"), vec!["Rust"]);
    }

    #[test]
    fn test_rejects_letters_outside_alphabet() {
        let mut trie = WordTrie::with_alphabet(Alphabet::from_letters("acgt"));

        assert!(trie.insert("gattaca").unwrap());
        assert_eq!(
            trie.insert("uracil"),
            Err(TrieError::LetterOutsideAlphabet {
                word: "uracil".to_string(),
                letter: 'u',
            })
        );
        assert_eq!(trie.len(), 1);

        // Foreign letters in queries are simply not found.
        assert!(!trie.contains("uracil"));
    }

    #[test]
    fn test_rejects_words_over_max_length() {
        let config = TrieConfig {
            max_word_len: 5,
            ..TrieConfig::default()
        };
        let mut trie = WordTrie::with_config(&config);

        assert!(trie.insert("abcde").unwrap());
        assert_eq!(
            trie.insert("abcdef"),
            Err(TrieError::WordTooLong { len: 6, max_len: 5 })
        );
        assert_eq!(trie.len(), 1);

        // Far longer words are rejected before touching the tree
        let mut trie = WordTrie::new();
        assert_eq!(
            trie.insert("a".repeat(50_000)),
            Err(TrieError::WordTooLong {
                len: 50_000,
                max_len: trie.max_word_len(),
            })
        );
        assert!(trie.is_empty());
        assert_eq!(trie.node_count(), 1);
    }

    #[test]
    fn test_max_word_len_is_capped() {
        let config = TrieConfig {
            max_word_len: usize::MAX,
            ..TrieConfig::default()
        };
        assert_eq!(WordTrie::with_config(&config).max_word_len(), MAX_WORD_LEN_LIMIT);
    }

    #[test]
    fn test_insert_into_compressed_trie_is_rejected() {
        let mut trie = sample().compress();

        assert_eq!(
            trie.insert("cow"),
            Err(TrieError::AlreadyCompressed {
                word: "cow".to_string()
            })
        );
        assert!(!trie.contains("cow"));

        let mut trie = trie.decompress();
        assert!(trie.insert("cow").unwrap());
        assert!(trie.contains("cow"));
        assert!(trie.contains("cart"));
    }

    #[test]
    fn test_compress_preserves_queries() {
        let raw = sample();
        let compressed = raw.clone().compress();

        assert!(compressed.is_compressed());
        assert_eq!(compressed.representation(), Representation::Compressed);
        assert!(compressed.node_count() < raw.node_count());

        for probe in ["", "c", "ca", "car", "cart", "carts", "cat", "d", "dog", "dot"] {
            assert_eq!(raw.contains(probe), compressed.contains(probe), "{probe}");
            assert_eq!(raw.has_prefix(probe), compressed.has_prefix(probe), "{probe}");
        }

        assert_eq!(compressed.clone().compress(), compressed);
    }

    #[test]
    fn test_from_words_stops_at_first_error() {
        let config = TrieConfig::default();
        let result = WordTrie::from_words(["alpha", "be7a", "gamma"], &config);
        assert!(matches!(
            result,
            Err(TrieError::LetterOutsideAlphabet { letter: '7', .. })
        ));
    }

    #[test]
    fn test_from_words_with_compression() {
        let config = TrieConfig {
            compress: true,
            ..TrieConfig::default()
        };
        let trie = WordTrie::from_words(["under", "understand"], &config).unwrap();

        assert!(trie.is_compressed());
        assert_eq!(trie.node_count(), 3);
        assert_eq!(trie.scan("understanding"), vec!["under", "understand"]);
    }

    #[test]
    fn test_from_reader() {
        let source = Cursor::new("apple\n  banana \n\ncherry\n");
        let trie = WordTrie::from_reader(source, &TrieConfig::default()).unwrap();

        assert_eq!(trie.len(), 3);
        assert!(trie.contains("banana"));
        assert!(!trie.is_compressed());
    }

    #[test]
    fn test_completions_and_limits() {
        let trie = sample().compress();

        let words: Vec<String> = trie.completions("CA").collect();
        assert_eq!(words, vec!["car", "cart", "cat"]);

        assert_eq!(trie.words_with_limit(2).count(), 2);
        assert_eq!(trie.words_with_limit(0).count(), 4);
    }

    #[test]
    fn test_fuzzy_matches() {
        let trie = sample();
        let words: Vec<String> = trie
            .fuzzy_matches("dig", 1)
            .into_iter()
            .map(|m| m.word)
            .collect();
        assert_eq!(words, vec!["dog"]);
    }
}
