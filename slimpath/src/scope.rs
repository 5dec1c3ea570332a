//! Environment scopes.
//!
//! A PATH variable lives in one of two scopes: the current user's
//! environment or the machine-wide system environment. Updates are always
//! applied user first, then system.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The environment scope a variable is read from or written to.
///
/// # Examples
///
/// ```
/// use slimpath::Scope;
///
/// assert_eq!(Scope::User.to_string(), "user");
/// assert_eq!(Scope::System.label(), "SYSTEM");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    /// Per-user environment (`HKCU\Environment` on Windows).
    User,
    /// Machine-wide environment; writing usually requires elevation.
    System,
}

impl Scope {
    /// Both scopes in processing order.
    pub const ALL: [Self; 2] = [Self::User, Self::System];

    /// Uppercase label used on status lines.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::User => "USER",
            Self::System => "SYSTEM",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::User => write!(f, "user"),
            Self::System => write!(f, "system"),
        }
    }
}

/// Which scopes an update should touch.
///
/// # Examples
///
/// ```
/// use slimpath::{Scope, ScopeSelection};
///
/// assert_eq!(ScopeSelection::All.scopes(), vec![Scope::User, Scope::System]);
/// assert_eq!(ScopeSelection::parse("system").unwrap(), ScopeSelection::System);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScopeSelection {
    /// Only the user scope.
    User,
    /// Only the system scope.
    System,
    /// User scope, then system scope.
    #[default]
    All,
}

impl ScopeSelection {
    /// Expand the selection into the ordered list of scopes to process.
    #[must_use]
    pub fn scopes(self) -> Vec<Scope> {
        match self {
            Self::User => vec![Scope::User],
            Self::System => vec![Scope::System],
            Self::All => Scope::ALL.to_vec(),
        }
    }

    /// Parses a selection from a string (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not `user`, `system` or `all`.
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "user" => Ok(Self::User),
            "system" | "machine" => Ok(Self::System),
            "all" | "both" => Ok(Self::All),
            _ => Err(format!("invalid scope: {s}")),
        }
    }
}

impl fmt::Display for ScopeSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::User => write!(f, "user"),
            Self::System => write!(f, "system"),
            Self::All => write!(f, "all"),
        }
    }
}
