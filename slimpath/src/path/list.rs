//! Path list normalization.
//!
//! Turns a raw delimited PATH value into a cleaned list: entries are
//! trimmed, empty entries dropped, each entry mapped to its short form, and
//! duplicates removed case-insensitively keeping the first occurrence.

use std::collections::HashSet;

use crate::path::shorten::PathShortener;

/// The separator used by Windows PATH values.
pub const DEFAULT_SEPARATOR: char = ';';

/// An ordered list of path entries with no case-insensitive duplicates and
/// no empty entries.
///
/// # Examples
///
/// ```
/// use slimpath::path::PathList;
///
/// let mut list = PathList::new();
/// assert!(list.push(r"C:\Foo"));
/// assert!(!list.push(r"c:\FOO"));
/// assert!(!list.push("   "));
/// assert_eq!(list.join(';'), r"C:\Foo");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathList {
    entries: Vec<String>,
    seen: HashSet<String>,
}

impl PathList {
    /// Create an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list from a raw delimited value.
    ///
    /// Each non-empty trimmed piece is mapped through `shortener`. A failed
    /// lookup, or one that yields an empty string, keeps the trimmed piece.
    pub fn build<S>(raw: Option<&str>, separator: char, shortener: &S) -> (Self, NormalizeReport)
    where
        S: PathShortener + ?Sized,
    {
        let mut list = Self::new();
        let mut report = NormalizeReport::default();

        let Some(raw) = raw.filter(|r| !r.is_empty()) else {
            return (list, report);
        };

        for entry in raw.split(separator).map(str::trim).filter(|e| !e.is_empty()) {
            report.entries_in += 1;

            let canonical = shorten_or_keep(shortener, entry);
            if canonical != entry {
                report.shortened += 1;
            }
            if !list.push(canonical.clone()) {
                report.duplicates.push(canonical);
            }
        }

        report.entries_out = list.len();
        (list, report)
    }

    /// Append an entry unless it is blank or already present (ignoring case).
    ///
    /// The entry is trimmed before comparison. Returns whether it was added.
    pub fn push(&mut self, entry: impl Into<String>) -> bool {
        let entry = entry.into();
        let entry = entry.trim();
        if entry.is_empty() {
            return false;
        }
        if !self.seen.insert(fold_case(entry)) {
            return false;
        }
        self.entries.push(entry.to_string());
        true
    }

    /// The entries in first-seen order.
    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the list has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check membership, ignoring case.
    #[must_use]
    pub fn contains(&self, entry: &str) -> bool {
        self.seen.contains(&fold_case(entry.trim()))
    }

    /// Serialize the list back into a raw delimited value.
    #[must_use]
    pub fn join(&self, separator: char) -> String {
        let mut buf = [0u8; 4];
        self.entries.join(separator.encode_utf8(&mut buf))
    }
}

/// What a normalization pass changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizeReport {
    /// Usable (non-blank) entries in the input.
    pub entries_in: usize,
    /// Entries in the output.
    pub entries_out: usize,
    /// Entries whose short form differed from the input.
    pub shortened: usize,
    /// Entries dropped as duplicates, in input order.
    pub duplicates: Vec<String>,
}

impl NormalizeReport {
    /// One-line human summary, e.g. `12 entries -> 9 (3 duplicates, 4 shortened)`.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "{} entries -> {} ({} duplicates, {} shortened)",
            self.entries_in,
            self.entries_out,
            self.duplicates.len(),
            self.shortened
        )
    }
}

/// Normalize a raw `;`-delimited PATH value.
///
/// Absent and empty input yield an empty string. This function never fails:
/// shortener errors fall back to the original entry.
///
/// # Examples
///
/// ```
/// use slimpath::path::{normalize, IdentityShortener};
///
/// assert_eq!(normalize(Some("b;a;b;c"), &IdentityShortener), "b;a;c");
/// assert_eq!(normalize(Some("  a ; ; b  "), &IdentityShortener), "a;b");
/// assert_eq!(normalize(None, &IdentityShortener), "");
/// ```
#[must_use]
pub fn normalize<S>(raw: Option<&str>, shortener: &S) -> String
where
    S: PathShortener + ?Sized,
{
    normalize_with(raw, DEFAULT_SEPARATOR, shortener)
}

/// Normalize a raw PATH value delimited by `separator`.
#[must_use]
pub fn normalize_with<S>(raw: Option<&str>, separator: char, shortener: &S) -> String
where
    S: PathShortener + ?Sized,
{
    PathList::build(raw, separator, shortener).0.join(separator)
}

/// Key under which entries are compared.
///
/// Each character is uppercased on its own. Characters whose uppercase form
/// is more than one character (`ß`, `ﬁ`) are kept as they are, so `Straße`
/// and `STRASSE` stay distinct like they do on NTFS.
pub(super) fn fold_case(entry: &str) -> String {
    entry.chars().map(simple_uppercase).collect()
}

fn simple_uppercase(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

fn shorten_or_keep<S>(shortener: &S, entry: &str) -> String
where
    S: PathShortener + ?Sized,
{
    match shortener.shorten(entry) {
        Ok(short) if !short.trim().is_empty() => short.trim().to_string(),
        Ok(_) => {
            log::debug!("short form of '{entry}' was empty; keeping original");
            entry.to_string()
        }
        Err(e) => {
            log::debug!("keeping '{entry}' unchanged: {e}");
            entry.to_string()
        }
    }
}
