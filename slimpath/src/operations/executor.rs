//! Plan execution engine.
//!
//! This module implements the executor that takes operation plans and
//! applies them to an environment store.

use crate::error::Result;
use crate::path::NormalizeReport;
use crate::store::EnvironmentStore;

use super::plan::{OperationPlan, PlanAction};

/// Result of executing a plan.
#[derive(Debug, Clone)]
pub struct ExecutionResult {
    /// Whether the execution was successful.
    pub success: bool,

    /// Whether this was a dry-run (no actual changes made).
    pub dry_run: bool,

    /// Descriptions of actions that were taken (or would be taken in dry-run).
    pub actions_taken: Vec<String>,

    /// Warnings from the plan.
    pub warnings: Vec<String>,

    /// The backup variable written (or that would be written).
    pub backup_name: Option<String>,

    /// What normalization changed.
    pub report: NormalizeReport,
}

impl ExecutionResult {
    fn new(plan: &OperationPlan, dry_run: bool) -> Self {
        Self {
            success: true,
            dry_run,
            actions_taken: plan.actions.iter().map(PlanAction::description).collect(),
            warnings: plan.warnings.clone(),
            backup_name: plan.backup_name().map(str::to_string),
            report: plan.report.clone(),
        }
    }
}

/// Executes operation plans against an environment store.
///
/// Actions run in plan order and execution stops at the first failure, so
/// a failed backup never lets the variable be overwritten.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use slimpath::operations::{PlanExecutor, UpdateOptions, UpdatePlan};
/// use slimpath::path::IdentityShortener;
/// use slimpath::store::{EnvironmentStore, MemoryStore};
/// use slimpath::{FixedClock, Scope};
///
/// let store = MemoryStore::new();
/// store.insert(Scope::User, "Path", "a;A;b");
/// let clock = FixedClock::new(
///     NaiveDate::from_ymd_opt(2024, 1, 15).unwrap().and_hms_opt(10, 30, 45).unwrap(),
/// );
/// let plan = UpdatePlan::new(UpdateOptions::new(Scope::User))
///     .build_plan(&store, &clock, &IdentityShortener)
///     .unwrap();
///
/// // Dry-run execution
/// let result = PlanExecutor::new(&store).dry_run().execute(&plan).unwrap();
/// assert!(result.dry_run);
/// assert!(store.writes().is_empty());
///
/// // Normal execution
/// let result = PlanExecutor::new(&store).execute(&plan).unwrap();
/// assert!(result.success);
/// assert_eq!(store.get("Path", Scope::User).unwrap().as_deref(), Some("a;b"));
/// ```
pub struct PlanExecutor<'a> {
    store: &'a dyn EnvironmentStore,
    dry_run: bool,
}

impl<'a> PlanExecutor<'a> {
    /// Creates a new plan executor.
    #[must_use]
    pub fn new(store: &'a dyn EnvironmentStore) -> Self {
        Self {
            store,
            dry_run: false,
        }
    }

    /// Sets the executor to dry-run mode.
    ///
    /// In dry-run mode, the executor reports the plan but does not write
    /// anything.
    #[must_use]
    pub const fn dry_run(mut self) -> Self {
        self.dry_run = true;
        self
    }

    /// Executes the given plan.
    ///
    /// # Errors
    ///
    /// Returns the first store error; later actions are not attempted.
    pub fn execute(&mut self, plan: &OperationPlan) -> Result<ExecutionResult> {
        if self.dry_run {
            for action in &plan.actions {
                log::info!("[dry run] {}", action.description());
            }
            return Ok(ExecutionResult::new(plan, true));
        }

        let mut changed = false;
        for action in &plan.actions {
            self.execute_action(action)?;
            changed = true;
        }

        if changed {
            if let Err(e) = self.store.broadcast_change() {
                log::warn!("failed to announce environment change: {e}");
            }
        }

        Ok(ExecutionResult::new(plan, false))
    }

    fn execute_action(&self, action: &PlanAction) -> Result<()> {
        log::info!("{}", action.description());
        match action {
            PlanAction::WriteBackup { scope, name, value }
            | PlanAction::SetVariable { scope, name, value } => {
                self.store.set(name, value, *scope)
            }
        }
    }
}
