//! Build script for slimpath-cli.
//!
//! Renders the man page into OUT_DIR with clap_mangen.
//!
//! Build scripts cannot depend on the crate being built, so the command
//! structure is declared here by hand.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// Keep in sync with src/cli.rs and src/commands/.
fn build_cli() -> Command {
    Command::new("slimpath")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Shorten and deduplicate PATH variables")
        .long_about(
            "Back up the user and system Path variables, replace each entry with its \
             short form, drop duplicates ignoring case, and write the result back",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output, including the startup banner")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .help("Override the data directory location")
                .value_name("PATH")
                .global(true)
                .env("SLIMPATH_DATA_DIR"),
        )
        .arg(
            Arg::new("store")
                .long("store")
                .help("Backend holding the environment variables")
                .value_parser(["registry", "file"])
                .global(true),
        )
        .arg(
            Arg::new("scope")
                .long("scope")
                .help("Scopes to update")
                .value_parser(["user", "system", "all"]),
        )
        .arg(
            Arg::new("dry-run")
                .long("dry-run")
                .help("Show what would change without writing anything")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("strict")
                .long("strict")
                .help("Exit with status 1 if any scope fails")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("no-shorten")
                .long("no-shorten")
                .help("Keep entries as written instead of replacing them with short names")
                .action(ArgAction::SetTrue),
        )
        .subcommands(vec![
            Command::new("normalize")
                .about("Print the normalized form of a value without touching any store")
                .long_about("Normalize VALUE, or stdin when VALUE is omitted, and print it"),
            Command::new("backups")
                .about("List backup variables")
                .long_about("List the timestamped backups left by earlier runs, per scope"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("slimpath.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
