//! Main entry point for the slimpath CLI.
//!
//! Without a subcommand, slimpath backs up and rewrites the `Path` variable
//! in the user and system scopes. Subcommands:
//! - `normalize`: print the normalized form of a value
//! - `backups`: list backup variables
//! - `completions`: generate shell completion scripts

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Route library logging through the stderr logger
    slimpath::init_logger(cli.verbose, cli.quiet).install();

    // Run flags before a subcommand are an error, not silently ignored
    let checked = cli.check_run_flags();

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        data_dir: cli.data_dir,
        store: cli.store.map(Into::into),
    };

    let result = match (checked, cli.command) {
        (Err(e), _) => Err(e),
        (Ok(()), None) => cli.run.execute(&global),
        (Ok(()), Some(cli::Command::Normalize(cmd))) => cmd.execute(&global),
        (Ok(()), Some(cli::Command::Backups(cmd))) => cmd.execute(&global),
        (Ok(()), Some(cli::Command::Completions(cmd))) => cmd.execute(&global),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
