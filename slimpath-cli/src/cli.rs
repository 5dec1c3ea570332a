//! CLI structure and command definitions.
//!
//! Running `slimpath` without a subcommand updates the selected scopes; the
//! run flags live on [`RunCommand`] and are flattened into the top level.

use crate::commands::{BackupsCommand, CompletionsCommand, NormalizeCommand, RunCommand};
use crate::error::CliError;
use clap::{Parser, Subcommand, ValueEnum};
use slimpath::{ScopeSelection, StoreKind};
use std::path::PathBuf;

/// Command-line tool for shortening and deduplicating PATH variables.
#[derive(Parser)]
#[command(name = "slimpath")]
#[command(
    version,
    about = "Shorten and deduplicate PATH variables",
    long_about = None
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output, including the startup banner
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Override the data directory location
    #[arg(long, value_name = "PATH", global = true, env = "SLIMPATH_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Backend holding the environment variables
    #[arg(long, value_enum, global = true, ignore_case = true)]
    pub store: Option<StoreArg>,

    #[command(flatten)]
    pub run: RunCommand,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// Reject run flags given together with a subcommand.
    ///
    /// Global flags may appear anywhere; `--scope`, `--dry-run`, `--strict`
    /// and `--no-shorten` before a subcommand only make sense for a run.
    pub fn check_run_flags(&self) -> Result<(), CliError> {
        match self.command {
            Some(ref command) if self.run != RunCommand::default() => {
                Err(CliError::InvalidArguments(format!(
                    "run flags cannot be combined with the '{}' subcommand",
                    command.name()
                )))
            }
            _ => Ok(()),
        }
    }
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Print the normalized form of a value without touching any store
    Normalize(NormalizeCommand),

    /// List backup variables
    Backups(BackupsCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}

impl Command {
    /// The subcommand name as typed on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Normalize(_) => "normalize",
            Command::Backups(_) => "backups",
            Command::Completions(_) => "completions",
        }
    }
}

/// Scope selection as accepted on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ScopeArg {
    /// Only the user scope
    User,
    /// Only the system scope
    System,
    /// User scope, then system scope
    All,
}

impl From<ScopeArg> for ScopeSelection {
    fn from(arg: ScopeArg) -> Self {
        match arg {
            ScopeArg::User => Self::User,
            ScopeArg::System => Self::System,
            ScopeArg::All => Self::All,
        }
    }
}

/// Store backend as accepted on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum StoreArg {
    /// The Windows registry
    Registry,
    /// Per-scope YAML files under the data directory
    File,
}

impl From<StoreArg> for StoreKind {
    fn from(arg: StoreArg) -> Self {
        match arg {
            StoreArg::Registry => Self::Registry,
            StoreArg::File => Self::File,
        }
    }
}
