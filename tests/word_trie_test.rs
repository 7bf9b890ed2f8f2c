// Copyright (c) 2025 Wordtrie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Integration tests for the word trie and its providers.

use std::io::Cursor;

use test_case::test_case;
use wordtrie::config::trie::TrieConfig;
use wordtrie::data_structures::word_trie::TrieError;
use wordtrie::provider::{Provider, ProviderCollection, ProviderError, TrieDocument};
use wordtrie::{Alphabet, WordTrie};

const WORDS: [&str; 7] = ["a", "an", "and", "ant", "antler", "bat", "batch"];

fn build(compress: bool) -> WordTrie {
    let config = TrieConfig {
        compress,
        ..TrieConfig::default()
    };
    WordTrie::from_words(WORDS, &config).unwrap()
}

#[test_case("a", true ; "single letter word")]
#[test_case("an", true ; "word that is also a prefix")]
#[test_case("antler", true ; "longest word")]
#[test_case("ANT", true ; "case folded")]
#[test_case("antl", false ; "stops mid label")]
#[test_case("antlers", false ; "runs past a leaf")]
#[test_case("b", false ; "prefix only")]
#[test_case("", false ; "empty word not stored")]
#[test_case("cat", false ; "absent branch")]
fn test_contains(word: &str, expected: bool) {
    assert_eq!(build(false).contains(word), expected);
    assert_eq!(build(true).contains(word), expected);
}

#[test_case("", true ; "empty prefix")]
#[test_case("antl", true ; "inside compressed label")]
#[test_case("batc", true ; "inside leaf label")]
#[test_case("bats", false ; "diverges inside label")]
#[test_case("c", false ; "absent first letter")]
fn test_has_prefix(prefix: &str, expected: bool) {
    assert_eq!(build(false).has_prefix(prefix), expected);
    assert_eq!(build(true).has_prefix(prefix), expected);
}

#[test_case("antlers", &["a", "an", "ant", "antler"] ; "every member prefix")]
#[test_case("and", &["a", "an", "and"] ; "word itself included")]
#[test_case("batter", &["bat"] ; "diverges after member")]
#[test_case("zebra", &[] ; "nothing matches")]
fn test_scan(word: &str, expected: &[&str]) {
    assert_eq!(build(false).scan(word), expected);
    assert_eq!(build(true).scan(word), expected);
}

#[test_case("antlr", 1, true ; "one deletion away")]
#[test_case("bitch", 1, true ; "one substitution away")]
#[test_case("bt", 1, true ; "one insertion away")]
#[test_case("antlers", 0, false ; "exact only")]
#[test_case("xyzzy", 2, false ; "too far")]
fn test_matches_within(word: &str, max_edits: usize, expected: bool) {
    assert_eq!(build(false).matches_within(word, max_edits), expected);
    assert_eq!(build(true).matches_within(word, max_edits), expected);
}

#[test]
fn test_word_enumeration() {
    let trie = build(true);

    let all: Vec<String> = trie.words().collect();
    assert_eq!(all, WORDS);

    let first_three: Vec<String> = trie.words_with_limit(3).collect();
    assert_eq!(first_three, vec!["a", "an", "and"]);

    let completions: Vec<String> = trie.completions("ant").collect();
    assert_eq!(completions, vec!["ant", "antler"]);

    assert_eq!(trie.completions("q").count(), 0);
}

#[test]
fn test_compression_shape() {
    let raw = build(false);
    let compressed = build(true);

    assert_eq!(raw.len(), WORDS.len());
    assert_eq!(compressed.len(), WORDS.len());
    // root, a, n, d, t, ler, bat, ch
    assert_eq!(compressed.node_count(), 8);

    let bat = compressed.root().child('b').unwrap();
    assert_eq!(bat.label(), "bat");
    assert!(bat.is_terminal());
}

#[test]
fn test_empty_word() {
    let mut trie = WordTrie::new();
    assert!(trie.insert("").unwrap());
    assert!(trie.contains(""));
    assert_eq!(trie.scan("abc"), vec![""]);
    assert_eq!(trie.len(), 1);
}

#[test]
fn test_from_reader_rejects_foreign_letters() {
    let config = TrieConfig::default();
    let source = Cursor::new("alpha\nbeta\ngamma-ray\n");

    let err = WordTrie::from_reader(source, &config).unwrap_err();
    assert!(err.to_string().contains("gamma-ray"), "{err}");
}

#[test]
fn test_custom_alphabet() {
    let mut trie = WordTrie::with_alphabet(Alphabet::from_letters("01"));
    assert!(trie.insert("0110").unwrap());
    assert!(matches!(
        trie.insert("012"),
        Err(TrieError::LetterOutsideAlphabet { letter: '2', .. })
    ));
}

#[test_case("words.json" ; "json by extension")]
#[test_case("words.toml" ; "toml by extension")]
#[test_case("words.txt" ; "unknown extension uses default")]
fn test_provider_round_trip(path: &str) {
    let providers = ProviderCollection::builtin();

    for trie in [build(false), build(true)] {
        let bytes = providers.dump(path, &trie).unwrap();
        let loaded = providers.load(path, &bytes).unwrap();
        assert_eq!(loaded, trie);
        assert_eq!(loaded.words().collect::<Vec<_>>(), WORDS);
    }
}

#[test]
fn test_provider_rejects_malformed_input() {
    let json = ProviderCollection::builtin().provider_for("json").unwrap();

    assert!(matches!(
        json.load(b"{ not json"),
        Err(ProviderError::Decode { .. })
    ));

    let mut document = TrieDocument::from_trie(&build(false));
    document.nodes[1].children.push(0);
    let bytes = serde_json::to_vec(&document).unwrap();
    assert!(matches!(
        json.load(&bytes),
        Err(ProviderError::MalformedDocument(_))
    ));
}

#[test]
fn test_long_words_are_rejected() {
    let config = TrieConfig {
        max_word_len: 8,
        ..TrieConfig::default()
    };
    let source = Cursor::new("short\n\nextraordinary\n");

    let err = WordTrie::from_reader(source, &config).unwrap_err();
    assert!(err.to_string().contains("maximum word length of 8"), "{err}");

    let mut trie = WordTrie::new();
    assert!(matches!(
        trie.insert("a".repeat(50_000)),
        Err(TrieError::WordTooLong { len: 50_000, .. })
    ));
    assert_eq!(trie.len(), 0);
}
