//! Library exports for slimpath-cli.
//!
//! Exposes the CLI structure so it can be inspected outside the binary.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

pub use cli::Cli;
