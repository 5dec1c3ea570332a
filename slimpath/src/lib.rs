#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # slimpath
//!
//! A library for shortening and deduplicating `PATH` variables.
//!
//! A PATH value is split into entries, each entry is trimmed and replaced by
//! its short (8.3) form, and duplicates are removed case-insensitively while
//! keeping the first occurrence. The original value is backed up into a
//! timestamped sibling variable before the cleaned value is written back.
//!
//! ## Core Types
//!
//! - [`path::normalize`] and [`path::PathList`]: the pure normalizer
//! - [`path::PathShortener`]: the injected short-name lookup
//! - [`store::EnvironmentStore`]: scope-qualified variable storage
//! - [`operations::run_update`]: back up and rewrite every selected scope
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use slimpath::path::{normalize, IdentityShortener};
//!
//! assert_eq!(normalize(Some("b;a;b;c"), &IdentityShortener), "b;a;c");
//! assert_eq!(normalize(Some(r"C:\Foo;c:\FOO"), &IdentityShortener), r"C:\Foo");
//! assert_eq!(normalize(Some("  a ; ; b  "), &IdentityShortener), "a;b");
//! assert_eq!(normalize(None, &IdentityShortener), "");
//! ```

pub mod backup;
pub mod clock;
pub mod config;
pub mod error;
pub mod logging;
pub mod operations;
pub mod output;
pub mod path;
pub mod scope;
pub mod store;

// Re-export key types at crate root for convenience
pub use backup::{backup_name, list_backups, BackupEntry};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{Config, ConfigBuilder, StoreKind};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use operations::{
    run_update, ExecutionResult, OperationPlan, PlanAction, PlanExecutor, RunOptions, RunSummary,
    ScopeOutcome, UpdateOptions, UpdatePlan,
};
pub use path::{normalize, IdentityShortener, PathList, PathShortener, SystemShortener};
pub use scope::{Scope, ScopeSelection};
pub use store::{open_store, EnvironmentStore, FileStore, MemoryStore};
