//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

use crate::config::LogConfig;
use crate::error::{WordTrieError, WordTrieResult};

/// Installs the global tracing subscriber described by `config`.
///
/// `RUST_LOG`, when set, overrides the configured level.
///
/// # Returns
///
/// * `Ok(())` - If the subscriber was installed
/// * `Err(WordTrieError::Custom)` - If a global subscriber is already set
pub fn init_logging(config: &LogConfig) -> WordTrieResult<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(config.source_location)
        .with_line_number(config.source_location)
        .with_thread_names(true);

    let result = if config.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };

    result.map_err(|e| WordTrieError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}
