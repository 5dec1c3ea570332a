//! Canonical short-form lookup for path entries.
//!
//! The short form of a path is platform-defined: on Windows it is the 8.3
//! alias returned by `GetShortPathNameW`, elsewhere there is no such concept
//! and the lookup is the identity. The lookup sits behind [`PathShortener`]
//! so normalization can be tested with a fake.

use std::path::Path;

use crate::error::Result;

/// Looks up the canonical short form of a single path entry.
///
/// Implementations return the input unchanged for paths that do not exist
/// and for empty input. Errors are allowed; the normalizer absorbs them and
/// keeps the original entry.
///
/// Any `Fn(&str) -> String` closure is a shortener, which keeps tests short:
///
/// ```
/// use slimpath::path::{normalize, PathShortener};
///
/// let upper = |p: &str| p.to_uppercase();
/// assert_eq!(upper.shorten("abc").unwrap(), "ABC");
/// assert_eq!(normalize(Some("a;A;b"), &upper), "A;B");
/// ```
pub trait PathShortener {
    /// Return the short form of `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the platform lookup fails for an existing path.
    fn shorten(&self, path: &str) -> Result<String>;
}

impl<F> PathShortener for F
where
    F: Fn(&str) -> String,
{
    fn shorten(&self, path: &str) -> Result<String> {
        Ok(self(path))
    }
}

/// A shortener that never changes its input.
///
/// Used when shortening is disabled and on platforms without short names.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityShortener;

impl PathShortener for IdentityShortener {
    fn shorten(&self, path: &str) -> Result<String> {
        Ok(path.to_string())
    }
}

/// The platform short-name lookup.
///
/// Only paths that exist on disk as a file or directory are looked up;
/// everything else, including `%VAR%` references that were never expanded,
/// passes through unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemShortener;

impl SystemShortener {
    /// Create a new system shortener.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl PathShortener for SystemShortener {
    fn shorten(&self, path: &str) -> Result<String> {
        if path.is_empty() || !Path::new(path).exists() {
            return Ok(path.to_string());
        }
        platform::short_path_name(path)
    }
}

#[cfg(windows)]
#[allow(unsafe_code)]
mod platform {
    use windows_sys::Win32::Foundation::GetLastError;
    use windows_sys::Win32::Storage::FileSystem::GetShortPathNameW;

    use crate::error::{Error, Result};

    /// Calls `GetShortPathNameW`, growing the buffer to the size it reports.
    pub(super) fn short_path_name(path: &str) -> Result<String> {
        let wide: Vec<u16> = path.encode_utf16().chain(std::iter::once(0)).collect();

        // First call with an empty buffer reports the required length,
        // including the terminating NUL.
        let required =
            unsafe { GetShortPathNameW(wide.as_ptr(), std::ptr::null_mut(), 0) };
        if required == 0 {
            return Err(Error::ShortenFailed {
                path: path.to_string(),
                code: unsafe { GetLastError() },
            });
        }

        let mut buffer = vec![0u16; required as usize];
        let written =
            unsafe { GetShortPathNameW(wide.as_ptr(), buffer.as_mut_ptr(), required) };
        if written == 0 || written >= required {
            return Err(Error::ShortenFailed {
                path: path.to_string(),
                code: unsafe { GetLastError() },
            });
        }

        buffer.truncate(written as usize);
        Ok(String::from_utf16_lossy(&buffer))
    }
}

#[cfg(not(windows))]
mod platform {
    use crate::error::Result;

    /// No short names outside Windows.
    #[allow(clippy::unnecessary_wraps)]
    pub(super) fn short_path_name(path: &str) -> Result<String> {
        Ok(path.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_identity_shortener() {
        let shortener = IdentityShortener;
        assert_eq!(shortener.shorten(r"C:\Program Files").unwrap(), r"C:\Program Files");
        assert_eq!(shortener.shorten("").unwrap(), "");
    }

    #[test]
    fn test_closure_shortener() {
        let shortener = |p: &str| p.replace("Program Files", "PROGRA~1");
        assert_eq!(
            shortener.shorten(r"C:\Program Files\Git").unwrap(),
            r"C:\PROGRA~1\Git"
        );
    }

    #[test]
    fn test_system_shortener_empty_passthrough() {
        assert_eq!(SystemShortener::new().shorten("").unwrap(), "");
    }

    #[test]
    fn test_system_shortener_nonexistent_passthrough() {
        let path = r"Z:\doesnotexist\really";
        assert_eq!(SystemShortener::new().shorten(path).unwrap(), path);
    }

    #[test]
    fn test_system_shortener_unexpanded_reference_passthrough() {
        let path = r"%SystemRoot%\system32";
        assert_eq!(SystemShortener::new().shorten(path).unwrap(), path);
    }

    #[test]
    fn test_system_shortener_existing_path_resolves() {
        let dir = tempdir().unwrap();
        let long = dir.path().join("a directory with a long name");
        std::fs::create_dir(&long).unwrap();
        let long_str = long.to_str().unwrap();

        let short = SystemShortener::new().shorten(long_str).unwrap();
        assert!(!short.is_empty());
        assert!(Path::new(&short).exists());

        #[cfg(not(windows))]
        assert_eq!(short, long_str);
    }
}
