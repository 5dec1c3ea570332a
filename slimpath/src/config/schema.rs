//! Configuration schema definitions.
//!
//! Every field is optional so that partial configurations from different
//! sources can be layered; the accessor methods supply the defaults.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::path::DEFAULT_SEPARATOR;
use crate::scope::ScopeSelection;

/// Name of the variable normalized when none is configured.
pub const DEFAULT_VARIABLE: &str = "Path";

/// Complete configuration structure.
///
/// # Examples
///
/// ```
/// use slimpath::config::Config;
/// use slimpath::ScopeSelection;
///
/// let config = Config {
///     scopes: Some(ScopeSelection::User),
///     dry_run: Some(true),
///     ..Default::default()
/// };
/// assert_eq!(config.variable(), "Path");
/// assert_eq!(config.separator(), ';');
/// assert!(config.is_dry_run());
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Name of the delimited variable to normalize.
    pub variable: Option<String>,

    /// Entry separator; must be exactly one character.
    pub separator: Option<String>,

    /// Which scopes to update.
    pub scopes: Option<ScopeSelection>,

    /// Build and report the plan without writing anything.
    pub dry_run: Option<bool>,

    /// Treat any failed scope as a failed run.
    pub strict: Option<bool>,

    /// Replace entries with their short form.
    pub shorten: Option<bool>,

    /// Directory holding `config.yaml` and the file store.
    pub data_dir: Option<PathBuf>,

    /// Backend holding the environment variables.
    pub store: Option<StoreKind>,
}

impl Config {
    /// The configured variable name, or [`DEFAULT_VARIABLE`].
    #[must_use]
    pub fn variable(&self) -> &str {
        self.variable.as_deref().unwrap_or(DEFAULT_VARIABLE)
    }

    /// The configured separator, or `;`.
    ///
    /// Only the first character is used; validation rejects anything longer.
    #[must_use]
    pub fn separator(&self) -> char {
        self.separator
            .as_deref()
            .and_then(|s| s.chars().next())
            .unwrap_or(DEFAULT_SEPARATOR)
    }

    /// The configured scope selection, or both scopes.
    #[must_use]
    pub fn scope_selection(&self) -> ScopeSelection {
        self.scopes.unwrap_or_default()
    }

    /// Whether this is a dry run.
    #[must_use]
    pub fn is_dry_run(&self) -> bool {
        self.dry_run.unwrap_or(false)
    }

    /// Whether failed scopes should fail the run.
    #[must_use]
    pub fn is_strict(&self) -> bool {
        self.strict.unwrap_or(false)
    }

    /// Whether short-name lookup is enabled.
    #[must_use]
    pub fn shorten_enabled(&self) -> bool {
        self.shorten.unwrap_or(true)
    }

    /// The configured store, or the platform default.
    #[must_use]
    pub fn store_kind(&self) -> StoreKind {
        self.store.unwrap_or_default()
    }

    /// The configured data directory, if any.
    #[must_use]
    pub fn data_dir(&self) -> Option<&Path> {
        self.data_dir.as_deref()
    }
}

/// Which backend stores the environment variables.
///
/// # Examples
///
/// ```
/// use slimpath::config::StoreKind;
///
/// assert_eq!(StoreKind::parse("FILE").unwrap(), StoreKind::File);
/// assert!(StoreKind::parse("sqlite").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreKind {
    /// The Windows registry.
    Registry,
    /// Per-scope YAML files under the data directory.
    File,
}

impl StoreKind {
    /// Parses a store kind from a string (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not `registry` or `file`.
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "registry" => Ok(Self::Registry),
            "file" => Ok(Self::File),
            _ => Err(format!("invalid store: {s}")),
        }
    }
}

impl Default for StoreKind {
    fn default() -> Self {
        if cfg!(windows) {
            Self::Registry
        } else {
            Self::File
        }
    }
}

impl fmt::Display for StoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Registry => write!(f, "registry"),
            Self::File => write!(f, "file"),
        }
    }
}
