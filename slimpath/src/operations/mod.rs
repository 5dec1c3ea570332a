//! Environment update operations using the plan-execute pattern.
//!
//! # Architecture
//!
//! Each scope is updated in two phases:
//! 1. **Planning**: read the current value, normalize it, name the backup
//! 2. **Execution**: write the backup, then the normalized value
//!
//! Planning never writes, which is what makes dry runs possible.
//!
//! # Examples
//!
//! ```no_run
//! use slimpath::operations::{run_update, RunOptions};
//! use slimpath::path::SystemShortener;
//! use slimpath::store::FileStore;
//! use slimpath::SystemClock;
//!
//! let summary = run_update(
//!     &RunOptions::default(),
//!     &FileStore::new("/tmp/slimpath"),
//!     &SystemClock,
//!     &SystemShortener::new(),
//! );
//! for outcome in &summary.outcomes {
//!     println!("{}: {}", outcome.scope, outcome.is_success());
//! }
//! ```

pub mod executor;
pub mod plan;
pub mod run;
pub mod update;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use executor::{ExecutionResult, PlanExecutor};
pub use plan::{OperationPlan, PlanAction};
pub use run::{run_update, RunOptions, RunSummary, ScopeOutcome};
pub use update::{UpdateOptions, UpdatePlan};
