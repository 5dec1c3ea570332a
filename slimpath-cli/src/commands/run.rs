//! The default command: shorten and deduplicate the variable in every
//! selected scope.

use crate::cli::ScopeArg;
use crate::error::CliError;
use crate::utils::{load_configuration, open_configured_store, select_shortener, GlobalOptions};
use clap::Args;
use slimpath::output::{detail_lines, status_line, BANNER};
use slimpath::{run_update, Config, RunOptions, RunSummary, SystemClock};
use std::io::Write;

/// Back up and rewrite the variable in each selected scope.
#[derive(Args, Debug, Default, PartialEq, Eq)]
pub struct RunCommand {
    /// Scopes to update
    #[arg(long, value_enum, ignore_case = true)]
    pub scope: Option<ScopeArg>,

    /// Show what would change without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Exit with status 1 if any scope fails
    #[arg(long)]
    pub strict: bool,

    /// Keep entries as written instead of replacing them with short names
    #[arg(long)]
    pub no_shorten: bool,
}

impl RunCommand {
    /// Execute the run command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        // 1. Load configuration
        let config = load_configuration(global, self.overrides())?;

        // 2. Open the store and pick the short-name lookup
        let store = open_configured_store(&config)?;
        let shortener = select_shortener(&config);

        // 3. Process each scope
        if !global.quiet {
            println!("{BANNER}");
        }
        let options = RunOptions::from_config(&config);
        let summary = run_update(&options, store.as_ref(), &SystemClock, shortener.as_ref());

        // 4. Report
        print_summary(&summary, global.verbose)?;

        if config.is_strict() && !summary.all_succeeded() {
            return Err(CliError::ScopesFailed(summary.failed_count()));
        }

        Ok(())
    }

    /// Flags that were given, as a configuration layer.
    fn overrides(&self) -> Config {
        Config {
            scopes: self.scope.map(Into::into),
            dry_run: self.dry_run.then_some(true),
            strict: self.strict.then_some(true),
            shorten: self.no_shorten.then_some(false),
            ..Default::default()
        }
    }
}

fn print_summary(summary: &RunSummary, verbose: bool) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    for outcome in &summary.outcomes {
        writeln!(handle, "{}", status_line(outcome, &summary.variable))?;
        if verbose {
            for line in detail_lines(outcome) {
                writeln!(handle, "{line}")?;
            }
        }
    }

    Ok(())
}
