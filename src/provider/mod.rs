//! Persistence providers for word tries.
//!
//! A provider turns a [`WordTrie`] into bytes and back. Providers are
//! registered by format name in a [`ProviderCollection`], which picks one by
//! file extension or by name. The built-in `json` and `toml` providers share
//! the [`TrieDocument`] layout.
//!
//! A process-wide collection is available through [`global`]; it starts out
//! as [`ProviderCollection::builtin`] and can be rebuilt from configuration
//! with [`configure_global`].

use once_cell::sync::Lazy;
use parking_lot::RwLock;
use tracing::info;

use crate::config::provider::ProviderConfig;
use crate::data_structures::word_trie::WordTrie;

mod collection;
mod document;
mod error;
mod json;
mod toml;

pub use collection::ProviderCollection;
pub use document::{NodeRecord, TrieDocument, DOCUMENT_VERSION};
pub use error::{ProviderError, ProviderResult};
pub use self::json::{JsonProvider, JSON_FORMAT};
pub use self::toml::{TomlProvider, TOML_FORMAT};

/// Dumps and loads tries in one external format.
///
/// `load` must accept whatever `dump` produced and rebuild an equal trie.
#[cfg_attr(test, mockall::automock)]
pub trait Provider: Send + Sync {
    /// Encodes `trie`.
    fn dump(&self, trie: &WordTrie) -> ProviderResult<Vec<u8>>;

    /// Decodes a trie from `bytes`.
    fn load(&self, bytes: &[u8]) -> ProviderResult<WordTrie>;
}

static GLOBAL_PROVIDERS: Lazy<RwLock<ProviderCollection>> =
    Lazy::new(|| RwLock::new(ProviderCollection::builtin()));

/// The process-wide provider collection.
pub fn global() -> &'static RwLock<ProviderCollection> {
    &GLOBAL_PROVIDERS
}

/// Replaces the process-wide collection with one built from `config`.
///
/// On error the current collection is left in place.
pub fn configure_global(config: &ProviderConfig) -> ProviderResult<()> {
    let collection = ProviderCollection::from_config(config)?;
    info!(
        default = %config.default_format,
        pretty_json = config.pretty_json,
        "Configured global provider collection"
    );
    *GLOBAL_PROVIDERS.write() = collection;
    Ok(())
}
