//! PATH value normalization.
//!
//! A PATH value is a single string of entries joined by a separator (`;` on
//! Windows). Normalizing it:
//!
//! - splits on the separator and trims every entry
//! - drops entries that are empty after trimming
//! - replaces each entry with its canonical short form (see [`PathShortener`])
//! - removes duplicates case-insensitively, keeping the first occurrence
//!
//! # Examples
//!
//! ```
//! use slimpath::path::{normalize, IdentityShortener};
//!
//! let value = normalize(Some(r"C:\Foo; c:\FOO ;;C:\Bar"), &IdentityShortener);
//! assert_eq!(value, r"C:\Foo;C:\Bar");
//! ```
//!
//! The short-form lookup is injected so callers can substitute a fake:
//!
//! ```
//! use slimpath::path::normalize;
//!
//! let lookup = |p: &str| if p == "LongName1" { "LONGNA~1".to_string() } else { p.to_string() };
//! assert_eq!(normalize(Some("LongName1;LONGNA~1"), &lookup), "LONGNA~1");
//! ```

mod list;
mod shorten;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use list::{normalize, normalize_with, NormalizeReport, PathList, DEFAULT_SEPARATOR};
pub use shorten::{IdentityShortener, PathShortener, SystemShortener};
