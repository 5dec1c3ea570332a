//! List the backup variables left behind by earlier runs.

use crate::cli::ScopeArg;
use crate::error::CliError;
use crate::utils::{load_configuration, open_configured_store, GlobalOptions};
use clap::{Args, ValueEnum};
use slimpath::output::OutputFormat;
use slimpath::{list_backups, Config};

/// List backup variables.
#[derive(Args, Debug)]
pub struct BackupsCommand {
    /// Scopes to list
    #[arg(long, value_enum, ignore_case = true)]
    pub scope: Option<ScopeArg>,

    /// Output format
    #[arg(
        long,
        value_enum,
        default_value = "human",
        env = "SLIMPATH_OUTPUT_FORMAT",
        ignore_case = true
    )]
    pub format: FormatArg,
}

/// Output format for the backups command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum FormatArg {
    /// Grouped by scope, one backup per line
    Human,
    /// JSON array
    Json,
    /// Tab-separated scope, name and timestamp
    Names,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Human => Self::Human,
            FormatArg::Json => Self::Json,
            FormatArg::Names => Self::Names,
        }
    }
}

impl BackupsCommand {
    /// Execute the backups command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let overrides = Config {
            scopes: self.scope.map(Into::into),
            ..Default::default()
        };
        let config = load_configuration(global, overrides)?;
        let store = open_configured_store(&config)?;

        let mut backups = Vec::new();
        for scope in config.scope_selection().scopes() {
            backups.extend(list_backups(store.as_ref(), scope, config.variable())?);
        }

        let formatter = OutputFormat::from(self.format).create_formatter();
        let output = formatter.format(&backups)?;
        if !output.is_empty() {
            println!("{output}");
        }

        Ok(())
    }
}
