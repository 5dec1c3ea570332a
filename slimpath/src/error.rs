//! Error types for the slimpath library.
//!
//! This module provides the error hierarchy for all operations in the
//! slimpath library, using `thiserror` for ergonomic error handling.

use thiserror::Error;

use crate::scope::Scope;

/// Result type alias for operations that may fail with a slimpath error.
///
/// # Examples
///
/// ```
/// use slimpath::{Error, Result};
///
/// fn example_operation() -> Result<String> {
///     Ok("C:\\Windows".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the slimpath library.
#[derive(Debug, Error)]
pub enum Error {
    /// Writing a variable was refused because the caller lacks privileges.
    #[error("permission denied writing '{variable}' in {scope} scope")]
    PermissionDenied {
        /// The scope that refused the write.
        scope: Scope,
        /// The variable being written.
        variable: String,
    },

    /// The environment store failed for a reason other than permissions.
    #[error("{scope} environment store error: {message}")]
    Store {
        /// The scope being accessed.
        scope: Scope,
        /// A description of the failure.
        message: String,
    },

    /// The platform short-name lookup failed for a path.
    #[error("short path lookup failed for '{path}' (code {code})")]
    ShortenFailed {
        /// The path that could not be shortened.
        path: String,
        /// The platform error code.
        code: u32,
    },

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A configuration error occurred.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Check if error is permission-related.
    ///
    /// # Examples
    ///
    /// ```
    /// use slimpath::{Error, Scope};
    ///
    /// let err = Error::PermissionDenied {
    ///     scope: Scope::System,
    ///     variable: "Path".to_string(),
    /// };
    /// assert!(err.is_permission_denied());
    /// ```
    #[must_use]
    pub fn is_permission_denied(&self) -> bool {
        matches!(self, Self::PermissionDenied { .. })
    }

    /// Map an I/O error raised while accessing `scope` into a store error.
    ///
    /// Permission failures become [`Error::PermissionDenied`] so callers can
    /// report them distinctly.
    #[must_use]
    pub fn from_io(err: &std::io::Error, scope: Scope, variable: &str) -> Self {
        if err.kind() == std::io::ErrorKind::PermissionDenied {
            Self::PermissionDenied {
                scope,
                variable: variable.to_string(),
            }
        } else {
            Self::Store {
                scope,
                message: err.to_string(),
            }
        }
    }
}
