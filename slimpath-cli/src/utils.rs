//! Utility functions for CLI operations.
//!
//! Configuration loading, store selection and the short-name lookup shared
//! by the commands.

use crate::error::CliError;
use slimpath::store::{open_store, EnvironmentStore};
use slimpath::{Config, ConfigBuilder, IdentityShortener, PathShortener, StoreKind, SystemShortener};
use std::path::PathBuf;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the data directory location.
    pub data_dir: Option<PathBuf>,

    /// Override the store backend.
    pub store: Option<StoreKind>,
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Command flags and global options (highest priority)
/// 2. Environment variables
/// 3. `config.yaml` in the data directory
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions, overrides: Config) -> Result<Config, CliError> {
    let mut cli = overrides;
    if global.store.is_some() {
        cli.store = global.store;
    }

    let mut builder = ConfigBuilder::new().with_cli_overrides(cli);
    if let Some(ref data_dir) = global.data_dir {
        builder = builder.with_data_dir(data_dir);
    }

    builder
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Open the store the configuration selects.
pub fn open_configured_store(config: &Config) -> Result<Box<dyn EnvironmentStore>, CliError> {
    let store = open_store(config)?;
    log::debug!("using {} store", config.store_kind());
    Ok(store)
}

/// The short-name lookup to apply, honoring `shorten: false`.
pub fn select_shortener(config: &Config) -> Box<dyn PathShortener> {
    if config.shorten_enabled() {
        Box::new(SystemShortener::new())
    } else {
        Box::new(IdentityShortener)
    }
}
