//! In-memory environment store.

use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};

use crate::error::{Error, Result};
use crate::scope::Scope;
use crate::store::{EnvironmentStore, Variables};

/// An environment store held entirely in memory.
///
/// Writes can be made to fail per scope, which makes it the workhorse for
/// testing how failures in one scope are isolated from the other.
///
/// # Examples
///
/// ```
/// use slimpath::store::{EnvironmentStore, MemoryStore};
/// use slimpath::Scope;
///
/// let store = MemoryStore::new();
/// store.insert(Scope::User, "Path", "a;b");
/// store.deny_writes(Scope::System);
///
/// assert_eq!(store.get("PATH", Scope::User).unwrap().as_deref(), Some("a;b"));
/// assert!(store.set("Path", "x", Scope::System).unwrap_err().is_permission_denied());
/// ```
#[derive(Debug, Default)]
pub struct MemoryStore {
    scopes: RefCell<BTreeMap<Scope, Variables>>,
    failures: RefCell<HashMap<Scope, Failure>>,
    writes: RefCell<Vec<(Scope, String)>>,
}

#[derive(Debug, Clone)]
enum Failure {
    Denied,
    Broken(String),
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a variable without recording it as a write.
    pub fn insert(&self, scope: Scope, name: &str, value: &str) {
        self.scopes
            .borrow_mut()
            .entry(scope)
            .or_default()
            .set(name, value);
    }

    /// Make every write to `scope` fail with a permission error.
    pub fn deny_writes(&self, scope: Scope) {
        self.failures.borrow_mut().insert(scope, Failure::Denied);
    }

    /// Make every read and write of `scope` fail with `message`.
    pub fn break_scope(&self, scope: Scope, message: &str) {
        self.failures
            .borrow_mut()
            .insert(scope, Failure::Broken(message.to_string()));
    }

    /// Names written so far, in order, with their scope.
    #[must_use]
    pub fn writes(&self) -> Vec<(Scope, String)> {
        self.writes.borrow().clone()
    }

    /// A snapshot of every variable in `scope`.
    #[must_use]
    pub fn snapshot(&self, scope: Scope) -> Variables {
        self.scopes
            .borrow()
            .get(&scope)
            .cloned()
            .unwrap_or_default()
    }

    fn check_broken(&self, scope: Scope) -> Result<()> {
        match self.failures.borrow().get(&scope) {
            Some(Failure::Broken(message)) => Err(Error::Store {
                scope,
                message: message.clone(),
            }),
            _ => Ok(()),
        }
    }
}

impl EnvironmentStore for MemoryStore {
    fn get(&self, name: &str, scope: Scope) -> Result<Option<String>> {
        self.check_broken(scope)?;
        Ok(self
            .scopes
            .borrow()
            .get(&scope)
            .and_then(|vars| vars.get(name))
            .map(str::to_string))
    }

    fn set(&self, name: &str, value: &str, scope: Scope) -> Result<()> {
        self.check_broken(scope)?;
        if matches!(self.failures.borrow().get(&scope), Some(Failure::Denied)) {
            return Err(Error::PermissionDenied {
                scope,
                variable: name.to_string(),
            });
        }
        self.insert(scope, name, value);
        self.writes.borrow_mut().push((scope, name.to_string()));
        Ok(())
    }

    fn list(&self, scope: Scope) -> Result<Vec<(String, String)>> {
        self.check_broken(scope)?;
        Ok(self.snapshot(scope).to_pairs())
    }
}
