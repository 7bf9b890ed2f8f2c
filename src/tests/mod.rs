//! Crate-internal test suites.
//!
//! - Configuration loading against real files
//! - Provider collection behavior with mocked providers
//! - Property-based tests of the trie using proptest


pub use test_utils::{
    create_test_dir, probe_strategy, raw_trie, word_list_strategy, word_strategy, TestFixture,
};
