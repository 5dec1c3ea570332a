//! Output formatter implementations.

use crate::backup::{BackupEntry, BACKUP_TIMESTAMP_FORMAT};
use crate::{Error, Result};

use super::OutputFormatter;

/// Formatter for JSON output.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format(&self, backups: &[BackupEntry]) -> Result<String> {
        serde_json::to_string_pretty(backups).map_err(|e| Error::Validation {
            field: "json_output".to_string(),
            message: format!("failed to serialize to JSON: {e}"),
        })
    }
}

/// Formatter for human-readable output.
///
/// Backups are grouped under a header per scope. Values are shown in full
/// so a backup can be copied back by hand.
pub struct HumanFormatter;

impl OutputFormatter for HumanFormatter {
    fn format(&self, backups: &[BackupEntry]) -> Result<String> {
        if backups.is_empty() {
            return Ok("No backups found.".to_string());
        }

        let mut lines = Vec::new();
        let mut current_scope = None;
        for backup in backups {
            if current_scope != Some(backup.scope) {
                current_scope = Some(backup.scope);
                lines.push(format!("[{}]", backup.scope.label()));
            }
            lines.push(format!(
                "  {} ({})",
                backup.name,
                backup.taken_at.format("%Y-%m-%d %H:%M:%S")
            ));
            if backup.value.is_empty() {
                lines.push("    (empty)".to_string());
            } else {
                lines.push(format!("    {}", backup.value));
            }
        }

        Ok(lines.join("\n"))
    }
}

/// Formatter that prints one backup name per line.
pub struct NamesFormatter;

impl OutputFormatter for NamesFormatter {
    fn format(&self, backups: &[BackupEntry]) -> Result<String> {
        Ok(backups
            .iter()
            .map(|b| {
                let stamp = b.taken_at.format(BACKUP_TIMESTAMP_FORMAT);
                format!("{}\t{}\t{stamp}", b.scope, b.name)
            })
            .collect::<Vec<_>>()
            .join("\n"))
    }
}
