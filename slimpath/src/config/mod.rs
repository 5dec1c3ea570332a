//! Configuration system for slimpath.
//!
//! This module provides layered configuration with support for:
//! - a YAML configuration file (`~/.slimpath/config.yaml`)
//! - `SLIMPATH_*` environment variable overrides
//! - command-line and programmatic overrides via [`ConfigBuilder`]
//! - validation of the merged result
//!
//! # Configuration Precedence
//!
//! Highest to lowest:
//!
//! 1. Programmatic overrides (`ConfigBuilder::with_config`)
//! 2. Command-line overrides (`ConfigBuilder::with_cli_overrides`)
//! 3. Environment variables (`SLIMPATH_*`)
//! 4. `config.yaml` in the data directory
//! 5. Built-in defaults
//!
//! # Examples
//!
//! ```no_run
//! use slimpath::config::ConfigBuilder;
//!
//! let config = ConfigBuilder::new().build().unwrap();
//! println!("Normalizing {} in {} scope(s)", config.variable(), config.scope_selection());
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{default_data_dir, ConfigLoader, ConfigSource, CONFIG_FILE_NAME};
pub use merger::ConfigMerger;
pub use schema::{Config, StoreKind, DEFAULT_VARIABLE};
pub use validator::ConfigValidator;
