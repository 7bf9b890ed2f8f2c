// Copyright (c) 2025 Wordtrie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Registry mapping format names to providers.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use tracing::{debug, warn};

use super::error::{ProviderError, ProviderResult};
use super::json::{JsonProvider, JSON_FORMAT};
use super::toml::{TomlProvider, TOML_FORMAT};
use super::Provider;
use crate::config::provider::ProviderConfig;
use crate::data_structures::word_trie::WordTrie;

type Entry = (String, Arc<dyn Provider>);

/// A named set of providers keyed by format, with a validated default.
///
/// Formats keep their registration order. The default always names a
/// registered format, or is `None` when the collection is empty.
#[derive(Clone)]
pub struct ProviderCollection {
    name: String,
    providers: Vec<Entry>,
    default: Option<String>,
    configured_providers: Vec<Entry>,
    configured_default: Option<String>,
}

impl ProviderCollection {
    /// Creates a collection from `providers`.
    ///
    /// The default is `default` when given, otherwise the first registered
    /// format.
    ///
    /// # Returns
    ///
    /// * `Ok(ProviderCollection)` - The collection.
    /// * `Err(ProviderError::DefaultNotRegistered)` - If `default` names a
    ///   format that is not among `providers`.
    pub fn new<N, I, F>(name: N, providers: I, default: Option<&str>) -> ProviderResult<Self>
    where
        N: Into<String>,
        I: IntoIterator<Item = (F, Arc<dyn Provider>)>,
        F: Into<String>,
    {
        let mut collection = Self::empty(name.into());
        for (format, provider) in providers {
            collection.add(format, provider);
        }

        let default = match default {
            Some(format) if collection.contains(format) => Some(format.to_string()),
            Some(format) => return Err(ProviderError::DefaultNotRegistered(format.to_string())),
            None => collection.formats().first().map(|format| format.to_string()),
        };
        Ok(collection.configured_with(default))
    }

    /// The built-in providers: `json` (default) and `toml`.
    pub fn builtin() -> Self {
        let mut collection = Self::empty("provider".to_string());
        collection.add(JSON_FORMAT, Arc::new(JsonProvider::new()));
        collection.add(TOML_FORMAT, Arc::new(TomlProvider));
        collection.configured_with(Some(JSON_FORMAT.to_string()))
    }

    /// The built-in providers with the default and JSON style from `config`.
    ///
    /// # Returns
    ///
    /// * `Err(ProviderError::DefaultNotRegistered)` - If the configured
    ///   default format has no built-in provider.
    pub fn from_config(config: &ProviderConfig) -> ProviderResult<Self> {
        let json = if config.pretty_json {
            JsonProvider::pretty()
        } else {
            JsonProvider::new()
        };
        let providers: [Entry; 2] = [
            (JSON_FORMAT.to_string(), Arc::new(json) as Arc<dyn Provider>),
            (TOML_FORMAT.to_string(), Arc::new(TomlProvider) as Arc<dyn Provider>),
        ];
        Self::new("provider", providers, Some(&config.default_format))
    }

    fn empty(name: String) -> Self {
        Self {
            name,
            providers: Vec::new(),
            default: None,
            configured_providers: Vec::new(),
            configured_default: None,
        }
    }

    /// Sets `default` and records the current state as the one `reset` restores.
    fn configured_with(mut self, default: Option<String>) -> Self {
        self.configured_providers = self.providers.clone();
        self.configured_default = default.clone();
        self.default = default;
        self
    }

    /// The collection's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Registered formats, in registration order.
    pub fn formats(&self) -> Vec<&str> {
        self.providers.iter().map(|(format, _)| format.as_str()).collect()
    }

    /// Number of registered formats.
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// Returns `true` if no provider is registered.
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Returns `true` if `format` is registered.
    pub fn contains(&self, format: &str) -> bool {
        self.providers.iter().any(|(registered, _)| registered == format)
    }

    /// Provider registered for `format`.
    pub fn get(&self, format: &str) -> Option<Arc<dyn Provider>> {
        self.providers
            .iter()
            .find(|(registered, _)| registered == format)
            .map(|(_, provider)| Arc::clone(provider))
    }

    /// Provider registered for `format`, as an error when missing.
    pub fn provider_for(&self, format: &str) -> ProviderResult<Arc<dyn Provider>> {
        self.get(format)
            .ok_or_else(|| ProviderError::UnknownFormat(format.to_string()))
    }

    /// Registers `provider` under `format`, replacing any provider already
    /// registered for it. The default is left unchanged.
    pub fn add<F: Into<String>>(&mut self, format: F, provider: Arc<dyn Provider>) {
        let format = format.into();
        match self.providers.iter_mut().find(|(registered, _)| *registered == format) {
            Some(entry) => entry.1 = provider,
            None => self.providers.push((format, provider)),
        }
    }

    /// Format of the default provider.
    pub fn default_format(&self) -> Option<&str> {
        self.default.as_deref()
    }

    /// The default provider.
    pub fn default_provider(&self) -> Option<Arc<dyn Provider>> {
        self.default.as_deref().and_then(|format| self.get(format))
    }

    /// Changes the default provider.
    ///
    /// `None` is only accepted while the collection is empty. On error the
    /// previous default is kept.
    pub fn set_default(&mut self, format: Option<&str>) -> ProviderResult<()> {
        match format {
            Some(format) if self.contains(format) => {
                self.default = Some(format.to_string());
                Ok(())
            }
            Some(format) => Err(ProviderError::DefaultNotRegistered(format.to_string())),
            None if self.is_empty() => {
                self.default = None;
                Ok(())
            }
            None => Err(ProviderError::MissingDefault),
        }
    }

    /// Provider for `path`, chosen by file extension.
    ///
    /// Unknown or missing extensions fall back to the default provider.
    pub fn resolve<P: AsRef<Path>>(&self, path: P) -> Option<Arc<dyn Provider>> {
        let path = path.as_ref();
        let extension = path.extension().and_then(|ext| ext.to_str());

        if let Some(provider) = extension.and_then(|format| self.get(format)) {
            return Some(provider);
        }

        warn!(
            path = %path.display(),
            default = ?self.default,
            "No provider for file extension, using default"
        );
        self.default_provider()
    }

    /// Dumps `trie` with the provider resolved for `path`.
    pub fn dump<P: AsRef<Path>>(&self, path: P, trie: &WordTrie) -> ProviderResult<Vec<u8>> {
        self.resolve_strict(path.as_ref())?.dump(trie)
    }

    /// Loads a trie from `bytes` with the provider resolved for `path`.
    pub fn load<P: AsRef<Path>>(&self, path: P, bytes: &[u8]) -> ProviderResult<WordTrie> {
        self.resolve_strict(path.as_ref())?.load(bytes)
    }

    fn resolve_strict(&self, path: &Path) -> ProviderResult<Arc<dyn Provider>> {
        self.resolve(path)
            .ok_or_else(|| ProviderError::UnknownFormat(path.display().to_string()))
    }

    /// Restores the providers and default the collection was created with.
    pub fn reset(&mut self) {
        self.providers = self.configured_providers.clone();
        self.default = self.configured_default.clone();
        debug!(name = %self.name, "Provider collection reset");
    }
}

impl fmt::Debug for ProviderCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderCollection")
            .field("name", &self.name)
            .field("formats", &self.formats())
            .field("default", &self.default)
            .finish()
    }
}
