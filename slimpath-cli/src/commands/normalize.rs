//! Normalize a value without touching any store.

use crate::error::CliError;
use crate::utils::{load_configuration, select_shortener, GlobalOptions};
use clap::Args;
use slimpath::{Config, PathList};
use std::io::{IsTerminal, Read};

/// Print the normalized form of a value.
#[derive(Args, Debug)]
pub struct NormalizeCommand {
    /// Value to normalize; read from stdin when omitted
    #[arg(value_name = "VALUE")]
    pub value: Option<String>,

    /// Keep entries as written instead of replacing them with short names
    #[arg(long)]
    pub no_shorten: bool,
}

impl NormalizeCommand {
    /// Execute the normalize command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let overrides = Config {
            shorten: self.no_shorten.then_some(false),
            ..Default::default()
        };
        let config = load_configuration(global, overrides)?;

        let raw = match self.value {
            Some(value) => value,
            None => read_stdin()?,
        };

        let shortener = select_shortener(&config);
        let separator = config.separator();
        let (list, report) = PathList::build(Some(raw.as_str()), separator, shortener.as_ref());

        log::info!("{}", report.summary());
        for dup in &report.duplicates {
            log::info!("removed duplicate: {dup}");
        }

        println!("{}", list.join(separator));
        Ok(())
    }
}

/// Read all of stdin, dropping the trailing line break.
fn read_stdin() -> Result<String, CliError> {
    let mut stdin = std::io::stdin();
    if stdin.is_terminal() {
        return Err(CliError::InvalidArguments(
            "no VALUE given and stdin is a terminal".to_string(),
        ));
    }

    let mut input = String::new();
    stdin.read_to_string(&mut input)?;
    Ok(input.trim_end_matches(['\r', '\n']).to_string())
}
