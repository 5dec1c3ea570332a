//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `SLIMPATH_*` environment variables that
//! override configuration file values.

use std::env;

use crate::config::schema::{Config, StoreKind};
use crate::error::{Error, Result};
use crate::scope::ScopeSelection;

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use slimpath::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if any environment variable value is invalid
    /// (e.g., an unknown scope or an invalid boolean).
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(variable) = env::var("SLIMPATH_VARIABLE") {
            config.variable = Some(variable);
        }

        if let Ok(separator) = env::var("SLIMPATH_SEPARATOR") {
            config.separator = Some(separator);
        }

        if let Ok(scope) = env::var("SLIMPATH_SCOPE") {
            config.scopes = Some(ScopeSelection::parse(&scope).map_err(|message| {
                Error::Validation {
                    field: "SLIMPATH_SCOPE".into(),
                    message,
                }
            })?);
        }

        if let Ok(val) = env::var("SLIMPATH_DRY_RUN") {
            config.dry_run = Some(Self::parse_bool("SLIMPATH_DRY_RUN", &val)?);
        }

        if let Ok(val) = env::var("SLIMPATH_STRICT") {
            config.strict = Some(Self::parse_bool("SLIMPATH_STRICT", &val)?);
        }

        if let Ok(val) = env::var("SLIMPATH_SHORTEN") {
            config.shorten = Some(Self::parse_bool("SLIMPATH_SHORTEN", &val)?);
        }

        if let Ok(store) = env::var("SLIMPATH_STORE") {
            config.store = Some(StoreKind::parse(&store).map_err(|message| {
                Error::Validation {
                    field: "SLIMPATH_STORE".into(),
                    message,
                }
            })?);
        }

        Ok(())
    }

    /// Parse a boolean value from a string.
    ///
    /// Accepts: true/1/yes/on for true, false/0/no/off for false (case-insensitive).
    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }
}
