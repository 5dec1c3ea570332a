//! Updating every selected scope.
//!
//! Scopes are processed one after another, user first. Each scope is
//! planned and executed on its own: a failure in one is recorded in its
//! outcome and the next scope is still attempted.

use crate::clock::Clock;
use crate::config::Config;
use crate::error::Error;
use crate::path::PathShortener;
use crate::scope::{Scope, ScopeSelection};
use crate::store::EnvironmentStore;

use super::executor::{ExecutionResult, PlanExecutor};
use super::update::{UpdateOptions, UpdatePlan};

/// Options for a full update run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    /// Which scopes to update.
    pub scopes: ScopeSelection,

    /// Variable to normalize.
    pub variable: String,

    /// Entry separator.
    pub separator: char,

    /// Plan and report without writing.
    pub dry_run: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl RunOptions {
    /// Build run options from a configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use slimpath::config::Config;
    /// use slimpath::operations::RunOptions;
    /// use slimpath::ScopeSelection;
    ///
    /// let options = RunOptions::from_config(&Config::default());
    /// assert_eq!(options.scopes, ScopeSelection::All);
    /// assert_eq!(options.variable, "Path");
    /// assert!(!options.dry_run);
    /// ```
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            scopes: config.scope_selection(),
            variable: config.variable().to_string(),
            separator: config.separator(),
            dry_run: config.is_dry_run(),
        }
    }

    fn update_options(&self, scope: Scope) -> UpdateOptions {
        UpdateOptions::new(scope)
            .with_variable(self.variable.clone())
            .with_separator(self.separator)
    }
}

/// What happened to one scope.
#[derive(Debug)]
pub struct ScopeOutcome {
    /// The scope.
    pub scope: Scope,

    /// The execution result, or the error that stopped this scope.
    pub result: std::result::Result<ExecutionResult, Error>,
}

impl ScopeOutcome {
    /// Whether this scope was updated (or would be, in a dry run).
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }

    /// Whether this scope failed because the caller lacks privileges.
    #[must_use]
    pub fn is_permission_denied(&self) -> bool {
        matches!(&self.result, Err(e) if e.is_permission_denied())
    }
}

/// Outcomes of a full run, in processing order.
#[derive(Debug)]
pub struct RunSummary {
    /// Variable that was normalized.
    pub variable: String,

    /// One outcome per processed scope.
    pub outcomes: Vec<ScopeOutcome>,
}

impl RunSummary {
    /// Whether every scope succeeded.
    #[must_use]
    pub fn all_succeeded(&self) -> bool {
        self.outcomes.iter().all(ScopeOutcome::is_success)
    }

    /// Number of scopes that failed.
    #[must_use]
    pub fn failed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| !o.is_success()).count()
    }

    /// The outcome for `scope`, if it was processed.
    #[must_use]
    pub fn outcome(&self, scope: Scope) -> Option<&ScopeOutcome> {
        self.outcomes.iter().find(|o| o.scope == scope)
    }
}

/// Update every scope selected by `options`.
///
/// Never fails as a whole; per-scope errors are returned in the summary.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use slimpath::operations::{run_update, RunOptions};
/// use slimpath::path::IdentityShortener;
/// use slimpath::store::{EnvironmentStore, MemoryStore};
/// use slimpath::{FixedClock, Scope};
///
/// let store = MemoryStore::new();
/// store.insert(Scope::User, "Path", "b;a;b;c");
/// store.deny_writes(Scope::System);
/// let clock = FixedClock::new(
///     NaiveDate::from_ymd_opt(2024, 1, 15).unwrap().and_hms_opt(10, 30, 45).unwrap(),
/// );
///
/// let summary = run_update(&RunOptions::default(), &store, &clock, &IdentityShortener);
/// assert!(summary.outcome(Scope::User).unwrap().is_success());
/// assert!(summary.outcome(Scope::System).unwrap().is_permission_denied());
/// assert_eq!(store.get("Path", Scope::User).unwrap().as_deref(), Some("b;a;c"));
/// ```
pub fn run_update<C, P>(
    options: &RunOptions,
    store: &dyn EnvironmentStore,
    clock: &C,
    shortener: &P,
) -> RunSummary
where
    C: Clock + ?Sized,
    P: PathShortener + ?Sized,
{
    let outcomes = options
        .scopes
        .scopes()
        .into_iter()
        .map(|scope| {
            let result = update_scope(options, scope, store, clock, shortener);
            if let Err(ref e) = result {
                log::debug!("{scope} scope failed: {e}");
            }
            ScopeOutcome { scope, result }
        })
        .collect();

    RunSummary {
        variable: options.variable.clone(),
        outcomes,
    }
}

fn update_scope<C, P>(
    options: &RunOptions,
    scope: Scope,
    store: &dyn EnvironmentStore,
    clock: &C,
    shortener: &P,
) -> std::result::Result<ExecutionResult, Error>
where
    C: Clock + ?Sized,
    P: PathShortener + ?Sized,
{
    let plan = UpdatePlan::new(options.update_options(scope)).build_plan(store, clock, shortener)?;
    for warning in &plan.warnings {
        log::warn!("{warning}");
    }

    let mut executor = PlanExecutor::new(store);
    if options.dry_run {
        executor = executor.dry_run();
    }
    executor.execute(&plan)
}
