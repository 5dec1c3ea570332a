//! Timestamped backup variables.
//!
//! Before a PATH value is overwritten its original content is copied into a
//! sibling variable in the same scope named `<Variable>_Backup_<timestamp>`,
//! with a whole-second local timestamp formatted `yyyyMMdd_HHmmss`.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::error::Result;
use crate::scope::Scope;
use crate::store::EnvironmentStore;

/// `strftime` pattern for backup timestamps.
pub const BACKUP_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Infix between the variable name and the timestamp.
const BACKUP_INFIX: &str = "_Backup_";

/// Name of the backup variable for `variable` taken at `at`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use slimpath::backup::backup_name;
///
/// let at = NaiveDate::from_ymd_opt(2024, 1, 15)
///     .unwrap()
///     .and_hms_milli_opt(10, 30, 45, 900)
///     .unwrap();
/// assert_eq!(backup_name("Path", at), "Path_Backup_20240115_103045");
/// ```
#[must_use]
pub fn backup_name(variable: &str, at: NaiveDateTime) -> String {
    format!(
        "{variable}{BACKUP_INFIX}{}",
        at.format(BACKUP_TIMESTAMP_FORMAT)
    )
}

/// Parse a backup variable name, returning its timestamp.
///
/// The variable prefix is compared case-insensitively since environment
/// variable names are case-insensitive on Windows.
#[must_use]
pub fn parse_backup_name(variable: &str, name: &str) -> Option<NaiveDateTime> {
    let prefix = format!("{variable}{BACKUP_INFIX}");
    if name.len() <= prefix.len() || !name.is_char_boundary(prefix.len()) {
        return None;
    }
    let (head, stamp) = name.split_at(prefix.len());
    if !head.eq_ignore_ascii_case(&prefix) {
        return None;
    }
    NaiveDateTime::parse_from_str(stamp, BACKUP_TIMESTAMP_FORMAT).ok()
}

/// A backup variable found in a store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BackupEntry {
    /// Scope holding the backup.
    pub scope: Scope,
    /// Full variable name, e.g. `Path_Backup_20240115_103045`.
    pub name: String,
    /// When the backup was taken.
    pub taken_at: NaiveDateTime,
    /// The saved value.
    pub value: String,
}

/// List the backups of `variable` in `scope`, oldest first.
///
/// # Errors
///
/// Returns an error if the store cannot enumerate the scope.
pub fn list_backups<S>(store: &S, scope: Scope, variable: &str) -> Result<Vec<BackupEntry>>
where
    S: EnvironmentStore + ?Sized,
{
    let mut entries: Vec<BackupEntry> = store
        .list(scope)?
        .into_iter()
        .filter_map(|(name, value)| {
            parse_backup_name(variable, &name).map(|taken_at| BackupEntry {
                scope,
                name,
                taken_at,
                value,
            })
        })
        .collect();
    entries.sort_by(|a, b| a.taken_at.cmp(&b.taken_at).then_with(|| a.name.cmp(&b.name)));
    Ok(entries)
}
