//! Scope-qualified environment variable storage.
//!
//! The orchestration layer never touches process-global state directly; it
//! reads and writes variables through an [`EnvironmentStore`] passed in by
//! the caller.
//!
//! Three backends are provided:
//!
//! - [`RegistryStore`] (Windows only): the real user and machine
//!   environments in the registry
//! - [`FileStore`]: one YAML document per scope under a data directory
//! - [`MemoryStore`]: in-process, for tests and embedding
//!
//! Variable names are compared case-insensitively by every backend.

mod file;
mod memory;
#[cfg(windows)]
#[allow(unsafe_code)]
mod registry;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::{default_data_dir, Config, StoreKind};
use crate::error::Result;
use crate::scope::Scope;

pub use file::FileStore;
pub use memory::MemoryStore;
#[cfg(windows)]
pub use registry::RegistryStore;

/// Reads and writes environment variables in a given scope.
#[cfg_attr(test, mockall::automock)]
pub trait EnvironmentStore {
    /// Read `name` from `scope`; `Ok(None)` when it is not set.
    ///
    /// # Errors
    ///
    /// Returns an error if the scope cannot be read.
    fn get(&self, name: &str, scope: Scope) -> Result<Option<String>>;

    /// Write `value` to `name` in `scope`, creating it if needed.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::PermissionDenied`] when the caller may not
    /// modify `scope`, or another error if the write fails.
    fn set(&self, name: &str, value: &str, scope: Scope) -> Result<()>;

    /// Every variable in `scope` as `(name, value)` pairs.
    ///
    /// # Errors
    ///
    /// Returns an error if the scope cannot be enumerated.
    fn list(&self, scope: Scope) -> Result<Vec<(String, String)>>;

    /// Tell running programs that the environment changed.
    ///
    /// # Errors
    ///
    /// Backends that cannot notify return an error; the default does nothing.
    fn broadcast_change(&self) -> Result<()> {
        Ok(())
    }
}

/// Open the store selected by `config`.
///
/// The file store lives in the configured data directory, or
/// `~/.slimpath` when none is set.
///
/// # Errors
///
/// Returns an error if the registry store is requested on a platform
/// without one, or the default data directory cannot be determined.
pub fn open_store(config: &Config) -> Result<Box<dyn EnvironmentStore>> {
    match config.store_kind() {
        StoreKind::File => {
            let data_dir = match config.data_dir() {
                Some(dir) => dir.to_path_buf(),
                None => default_data_dir()?,
            };
            log::debug!("using file store in {}", data_dir.display());
            Ok(Box::new(FileStore::new(data_dir)))
        }
        #[cfg(windows)]
        StoreKind::Registry => Ok(Box::new(RegistryStore::new())),
        #[cfg(not(windows))]
        StoreKind::Registry => Err(crate::Error::Validation {
            field: "store".into(),
            message: "the registry store is only available on Windows".into(),
        }),
    }
}

/// A set of variables with case-insensitive names.
///
/// Overwriting a variable keeps the spelling of the existing name.
///
/// # Examples
///
/// ```
/// use slimpath::store::Variables;
///
/// let mut vars = Variables::default();
/// vars.set("Path", "a;b");
/// vars.set("PATH", "c");
/// assert_eq!(vars.get("path"), Some("c"));
/// assert_eq!(vars.iter().next(), Some(("Path", "c")));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Variables(BTreeMap<String, String>);

impl Variables {
    /// Look up a variable, ignoring case.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Set a variable, reusing an existing name that matches ignoring case.
    pub fn set(&mut self, name: &str, value: &str) {
        let key = self
            .0
            .keys()
            .find(|key| key.eq_ignore_ascii_case(name))
            .cloned()
            .unwrap_or_else(|| name.to_string());
        self.0.insert(key, value.to_string());
    }

    /// Iterate `(name, value)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no variables.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Owned `(name, value)` pairs.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        self.0
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }
}
