// Copyright (c) 2025 Wordtrie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for trie providers and the provider collection.

/// Errors that can occur while selecting or running a provider.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum ProviderError {
    /// No provider is registered for the requested format
    #[error("No provider registered for format '{0}'")]
    UnknownFormat(String),

    /// A default was requested for a format that is not registered
    #[error("Cannot use '{0}' as default provider: format is not registered")]
    DefaultNotRegistered(String),

    /// The default was cleared while providers are still registered
    #[error("A default provider is required while providers are registered")]
    MissingDefault,

    /// The trie could not be encoded
    #[error("Failed to encode trie as {format}: {message}")]
    Encode {
        /// Format of the failing provider
        format: String,
        /// Underlying encoder message
        message: String,
    },

    /// The bytes could not be decoded
    #[error("Failed to decode {format} trie: {message}")]
    Decode {
        /// Format of the failing provider
        format: String,
        /// Underlying decoder message
        message: String,
    },

    /// The bytes decoded but do not describe a valid trie
    #[error("Malformed trie document: {0}")]
    MalformedDocument(String),
}

/// Result type for provider operations
pub type ProviderResult<T> = std::result::Result<T, ProviderError>;
