//! Run status lines.
//!
//! A run prints a banner, then one line per processed scope.

use crate::operations::{RunSummary, ScopeOutcome};
use crate::scope::Scope;

/// Printed before any scope is processed.
pub const BANNER: &str = "🔧 Shortening PATH variables...";

/// The status line for one scope.
///
/// # Examples
///
/// ```
/// use slimpath::output::status_line;
/// use slimpath::operations::ScopeOutcome;
/// use slimpath::{Error, Scope};
///
/// let outcome = ScopeOutcome {
///     scope: Scope::System,
///     result: Err(Error::PermissionDenied { scope: Scope::System, variable: "Path".into() }),
/// };
/// assert_eq!(
///     status_line(&outcome, "Path"),
///     "[SYSTEM] ❌ Admin rights required to modify system PATH."
/// );
/// ```
#[must_use]
pub fn status_line(outcome: &ScopeOutcome, variable: &str) -> String {
    let label = outcome.scope.label();
    let shown = variable.to_uppercase();
    match &outcome.result {
        Ok(result) if result.dry_run => match result.backup_name {
            Some(ref backup) => {
                format!("[{label}] {shown} would be updated. Backup would be saved as {backup}")
            }
            None => format!("[{label}] {shown} would be updated."),
        },
        Ok(result) => match result.backup_name {
            Some(ref backup) => format!("[{label}] {shown} updated. Backup saved as {backup}"),
            None => format!("[{label}] {shown} updated."),
        },
        Err(e) if e.is_permission_denied() && outcome.scope == Scope::System => {
            format!("[{label}] ❌ Admin rights required to modify system {shown}.")
        }
        Err(e) => format!("[{label}] Failed: {e}"),
    }
}

/// Every status line of a run, in processing order.
#[must_use]
pub fn status_lines(summary: &RunSummary) -> Vec<String> {
    summary
        .outcomes
        .iter()
        .map(|outcome| status_line(outcome, &summary.variable))
        .collect()
}

/// Extra lines describing what normalization changed in one scope.
///
/// Empty for failed scopes.
#[must_use]
pub fn detail_lines(outcome: &ScopeOutcome) -> Vec<String> {
    let Ok(result) = &outcome.result else {
        return Vec::new();
    };

    let label = outcome.scope.label();
    let mut lines = vec![format!("[{label}]   {}", result.report.summary())];
    lines.extend(
        result
            .report
            .duplicates
            .iter()
            .map(|dup| format!("[{label}]   removed duplicate: {dup}")),
    );
    lines
}
