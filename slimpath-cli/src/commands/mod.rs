//! CLI command implementations.
//!
//! - `run`: back up and rewrite the variable (the default command)
//! - `normalize`: print the normalized form of a value
//! - `backups`: list backup variables
//! - `completions`: generate shell completion scripts

pub mod backups;
pub mod completions;
pub mod normalize;
pub mod run;

pub use backups::BackupsCommand;
pub use completions::CompletionsCommand;
pub use normalize::NormalizeCommand;
pub use run::RunCommand;
