//! Plan types for environment updates.
//!
//! This module defines the plan structures that describe what will be
//! written during an update, without actually writing it.

use crate::path::NormalizeReport;
use crate::scope::Scope;

/// A single write to be made during plan execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanAction {
    /// Save the original value under a backup name.
    WriteBackup {
        /// Scope to write to.
        scope: Scope,
        /// Backup variable name.
        name: String,
        /// The value being backed up, verbatim.
        value: String,
    },

    /// Overwrite the variable with its normalized value.
    SetVariable {
        /// Scope to write to.
        scope: Scope,
        /// Variable name.
        name: String,
        /// The normalized value.
        value: String,
    },
}

impl PlanAction {
    /// Returns a human-readable description of this action.
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::WriteBackup { scope, name, value } => {
                format!(
                    "Back up {} characters to {name} in {scope} scope",
                    value.chars().count()
                )
            }
            Self::SetVariable { scope, name, value } => {
                format!("Set {name} in {scope} scope to '{value}'")
            }
        }
    }

    /// The scope this action writes to.
    #[must_use]
    pub const fn scope(&self) -> Scope {
        match self {
            Self::WriteBackup { scope, .. } | Self::SetVariable { scope, .. } => *scope,
        }
    }
}

/// A complete operation plan describing all actions to be taken.
///
/// Plans are generated during the planning phase and can be inspected,
/// logged, or executed.
#[derive(Debug, Clone)]
pub struct OperationPlan {
    /// A human-readable description of the operation.
    pub description: String,

    /// The sequence of actions to perform.
    pub actions: Vec<PlanAction>,

    /// Warnings to communicate to the user.
    pub warnings: Vec<String>,

    /// What normalization did to the value.
    pub report: NormalizeReport,
}

impl OperationPlan {
    /// Creates a new operation plan with the given description.
    ///
    /// # Examples
    ///
    /// ```
    /// use slimpath::operations::OperationPlan;
    ///
    /// let plan = OperationPlan::new("Normalize Path in user scope");
    /// assert_eq!(plan.description, "Normalize Path in user scope");
    /// assert!(plan.is_empty());
    /// ```
    #[must_use]
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            actions: Vec::new(),
            warnings: Vec::new(),
            report: NormalizeReport::default(),
        }
    }

    /// Adds an action to the plan.
    ///
    /// # Examples
    ///
    /// ```
    /// use slimpath::operations::{OperationPlan, PlanAction};
    /// use slimpath::Scope;
    ///
    /// let plan = OperationPlan::new("Test").add_action(PlanAction::SetVariable {
    ///     scope: Scope::User,
    ///     name: "Path".into(),
    ///     value: "C:\\Windows".into(),
    /// });
    /// assert_eq!(plan.len(), 1);
    /// ```
    #[must_use]
    pub fn add_action(mut self, action: PlanAction) -> Self {
        self.actions.push(action);
        self
    }

    /// Adds a warning to the plan.
    #[must_use]
    pub fn add_warning(mut self, warning: impl Into<String>) -> Self {
        self.warnings.push(warning.into());
        self
    }

    /// Attaches the normalization report.
    #[must_use]
    pub fn with_report(mut self, report: NormalizeReport) -> Self {
        self.report = report;
        self
    }

    /// Checks if the plan has no actions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Returns the number of actions in the plan.
    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// The name of the backup this plan writes, if any.
    #[must_use]
    pub fn backup_name(&self) -> Option<&str> {
        self.actions.iter().find_map(|action| match action {
            PlanAction::WriteBackup { name, .. } => Some(name.as_str()),
            PlanAction::SetVariable { .. } => None,
        })
    }
}
