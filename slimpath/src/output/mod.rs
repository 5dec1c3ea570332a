//! Output formatting.
//!
//! Status lines for update runs, and formatters for backup listings.

mod formatters;
mod status;

use crate::backup::BackupEntry;
use crate::Result;

pub use formatters::{HumanFormatter, JsonFormatter, NamesFormatter};
pub use status::{detail_lines, status_line, status_lines, BANNER};

/// Trait for formatting backup listings into different output formats.
pub trait OutputFormatter {
    /// Format the given backups into a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the formatting fails.
    fn format(&self, backups: &[BackupEntry]) -> Result<String>;
}

/// Available output formats for backup listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable format.
    #[default]
    Human,
    /// JSON format.
    Json,
    /// One tab-separated line per backup.
    Names,
}

impl OutputFormat {
    /// Create a formatter for this output format.
    #[must_use]
    pub fn create_formatter(&self) -> Box<dyn OutputFormatter> {
        match self {
            Self::Human => Box::new(HumanFormatter),
            Self::Json => Box::new(JsonFormatter),
            Self::Names => Box::new(NamesFormatter),
        }
    }
}
