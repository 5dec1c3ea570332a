//! YAML-file environment store.
//!
//! Each scope is a YAML mapping of variable names to values stored under a
//! data directory:
//!
//! ```text
//! <data_dir>/user.yaml
//! <data_dir>/system.yaml
//! ```
//!
//! A missing file reads as an empty scope. Writes rewrite the whole file.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::scope::Scope;
use crate::store::{EnvironmentStore, Variables};

/// An environment store backed by per-scope YAML files.
///
/// # Examples
///
/// ```no_run
/// use slimpath::store::{EnvironmentStore, FileStore};
/// use slimpath::Scope;
///
/// let store = FileStore::new("/tmp/slimpath-data");
/// store.set("Path", r"C:\Windows", Scope::User).unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct FileStore {
    data_dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `data_dir`. Nothing is created until the
    /// first write.
    #[must_use]
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// The directory holding the scope files.
    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Path of the YAML file for `scope`.
    #[must_use]
    pub fn scope_file(&self, scope: Scope) -> PathBuf {
        self.data_dir.join(format!("{scope}.yaml"))
    }

    fn load(&self, scope: Scope, variable: &str) -> Result<Variables> {
        let path = self.scope_file(scope);
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Variables::default()),
            Err(e) => return Err(Error::from_io(&e, scope, variable)),
        };

        if contents.trim().is_empty() {
            return Ok(Variables::default());
        }

        serde_yaml::from_str(&contents).map_err(|e| Error::Store {
            scope,
            message: format!("invalid YAML in {}: {e}", path.display()),
        })
    }

    fn save(&self, scope: Scope, variable: &str, vars: &Variables) -> Result<()> {
        let contents = serde_yaml::to_string(vars)?;
        fs::create_dir_all(&self.data_dir).map_err(|e| Error::from_io(&e, scope, variable))?;
        fs::write(self.scope_file(scope), contents).map_err(|e| Error::from_io(&e, scope, variable))
    }
}

impl EnvironmentStore for FileStore {
    fn get(&self, name: &str, scope: Scope) -> Result<Option<String>> {
        Ok(self.load(scope, name)?.get(name).map(str::to_string))
    }

    fn set(&self, name: &str, value: &str, scope: Scope) -> Result<()> {
        let mut vars = self.load(scope, name)?;
        vars.set(name, value);
        self.save(scope, name, &vars)
    }

    fn list(&self, scope: Scope) -> Result<Vec<(String, String)>> {
        Ok(self.load(scope, "")?.to_pairs())
    }
}
