//! Update planning for a single scope.
//!
//! Planning reads the current value, names the backup and normalizes the
//! value. Nothing is written until the plan is executed.

use crate::backup::backup_name;
use crate::clock::Clock;
use crate::config::{Config, DEFAULT_VARIABLE};
use crate::error::Result;
use crate::path::{PathList, PathShortener, DEFAULT_SEPARATOR};
use crate::scope::Scope;
use crate::store::EnvironmentStore;

use super::plan::{OperationPlan, PlanAction};

/// Options for updating one scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateOptions {
    /// The scope to update.
    pub scope: Scope,

    /// The variable to normalize.
    pub variable: String,

    /// The entry separator.
    pub separator: char,
}

impl UpdateOptions {
    /// Creates options for `scope` with the default variable and separator.
    ///
    /// # Examples
    ///
    /// ```
    /// use slimpath::operations::UpdateOptions;
    /// use slimpath::Scope;
    ///
    /// let options = UpdateOptions::new(Scope::User);
    /// assert_eq!(options.variable, "Path");
    /// assert_eq!(options.separator, ';');
    /// ```
    #[must_use]
    pub fn new(scope: Scope) -> Self {
        Self {
            scope,
            variable: DEFAULT_VARIABLE.to_string(),
            separator: DEFAULT_SEPARATOR,
        }
    }

    /// Creates options for `scope` from a configuration.
    #[must_use]
    pub fn from_config(config: &Config, scope: Scope) -> Self {
        Self {
            scope,
            variable: config.variable().to_string(),
            separator: config.separator(),
        }
    }

    /// Sets the variable name.
    #[must_use]
    pub fn with_variable(mut self, variable: impl Into<String>) -> Self {
        self.variable = variable.into();
        self
    }

    /// Sets the separator.
    #[must_use]
    pub const fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }
}

/// An update plan generator.
pub struct UpdatePlan {
    options: UpdateOptions,
}

impl UpdatePlan {
    /// Creates a new update plan with the given options.
    #[must_use]
    pub const fn new(options: UpdateOptions) -> Self {
        Self { options }
    }

    /// Builds the plan for this scope.
    ///
    /// The plan always contains two actions, in order: write the original
    /// value (empty when the variable is unset) to a timestamped backup,
    /// then overwrite the variable with its normalized value.
    ///
    /// # Errors
    ///
    /// Returns an error if the current value cannot be read.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use slimpath::operations::{UpdateOptions, UpdatePlan};
    /// use slimpath::path::IdentityShortener;
    /// use slimpath::store::MemoryStore;
    /// use slimpath::{FixedClock, Scope};
    ///
    /// let store = MemoryStore::new();
    /// store.insert(Scope::User, "Path", "b;a;b;c");
    /// let clock = FixedClock::new(
    ///     NaiveDate::from_ymd_opt(2024, 1, 15).unwrap().and_hms_opt(10, 30, 45).unwrap(),
    /// );
    ///
    /// let plan = UpdatePlan::new(UpdateOptions::new(Scope::User))
    ///     .build_plan(&store, &clock, &IdentityShortener)
    ///     .unwrap();
    /// assert_eq!(plan.backup_name(), Some("Path_Backup_20240115_103045"));
    /// assert_eq!(plan.report.duplicates, vec!["b".to_string()]);
    /// ```
    pub fn build_plan<S, C, P>(&self, store: &S, clock: &C, shortener: &P) -> Result<OperationPlan>
    where
        S: EnvironmentStore + ?Sized,
        C: Clock + ?Sized,
        P: PathShortener + ?Sized,
    {
        let UpdateOptions {
            scope,
            ref variable,
            separator,
        } = self.options;

        let mut plan = OperationPlan::new(format!("Normalize {variable} in {scope} scope"));

        let current = store.get(variable, scope)?;
        if current.is_none() {
            plan = plan.add_warning(format!(
                "{variable} is not set in {scope} scope; backing up an empty value"
            ));
        }
        let original = current.unwrap_or_default();

        let (list, report) = PathList::build(Some(&original), separator, shortener);
        let normalized = list.join(separator);
        log::debug!("{scope}: {}", report.summary());

        if normalized == original {
            plan = plan.add_warning(format!("{variable} in {scope} scope is already normalized"));
        }

        let backup = backup_name(variable, clock.now());
        Ok(plan
            .add_action(PlanAction::WriteBackup {
                scope,
                name: backup,
                value: original,
            })
            .add_action(PlanAction::SetVariable {
                scope,
                name: variable.clone(),
                value: normalized,
            })
            .with_report(report))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::path::IdentityShortener;
    use crate::store::MemoryStore;
    use chrono::NaiveDate;

    fn clock() -> FixedClock {
        FixedClock::new(
            NaiveDate::from_ymd_opt(2024, 1, 15)
                .unwrap()
                .and_hms_opt(10, 30, 45)
                .unwrap(),
        )
    }

    #[test]
    fn test_plan_backs_up_then_sets() {
        let store = MemoryStore::new();
        store.insert(Scope::User, "Path", r" C:\Foo ;c:\FOO;;C:\Bar");

        let plan = UpdatePlan::new(UpdateOptions::new(Scope::User))
            .build_plan(&store, &clock(), &IdentityShortener)
            .unwrap();

        assert_eq!(
            plan.actions,
            vec![
                PlanAction::WriteBackup {
                    scope: Scope::User,
                    name: "Path_Backup_20240115_103045".into(),
                    value: r" C:\Foo ;c:\FOO;;C:\Bar".into(),
                },
                PlanAction::SetVariable {
                    scope: Scope::User,
                    name: "Path".into(),
                    value: r"C:\Foo;C:\Bar".into(),
                },
            ]
        );
        assert_eq!(plan.report.entries_in, 3);
        assert_eq!(plan.report.entries_out, 2);
        assert!(plan.warnings.is_empty());
    }

    #[test]
    fn test_plan_does_not_write() {
        let store = MemoryStore::new();
        store.insert(Scope::System, "Path", "a;a");

        UpdatePlan::new(UpdateOptions::new(Scope::System))
            .build_plan(&store, &clock(), &IdentityShortener)
            .unwrap();

        assert!(store.writes().is_empty());
    }

    #[test]
    fn test_plan_for_unset_variable() {
        let store = MemoryStore::new();

        let plan = UpdatePlan::new(UpdateOptions::new(Scope::User))
            .build_plan(&store, &clock(), &IdentityShortener)
            .unwrap();

        assert_eq!(plan.len(), 2);
        assert!(plan.warnings.iter().any(|w| w.contains("not set")));
        assert!(plan.actions.iter().all(|action| match action {
            PlanAction::WriteBackup { value, .. } | PlanAction::SetVariable { value, .. } => {
                value.is_empty()
            }
        }));
    }

    #[test]
    fn test_plan_warns_when_already_normalized() {
        let store = MemoryStore::new();
        store.insert(Scope::User, "Path", "a;b");

        let plan = UpdatePlan::new(UpdateOptions::new(Scope::User))
            .build_plan(&store, &clock(), &IdentityShortener)
            .unwrap();

        assert!(plan.warnings.iter().any(|w| w.contains("already normalized")));
        assert_eq!(plan.len(), 2);
    }

    #[test]
    fn test_plan_custom_variable_and_separator() {
        let store = MemoryStore::new();
        store.insert(Scope::User, "PSModulePath", "x,y,X");

        let options = UpdateOptions::new(Scope::User)
            .with_variable("PSModulePath")
            .with_separator(',');
        let plan = UpdatePlan::new(options)
            .build_plan(&store, &clock(), &IdentityShortener)
            .unwrap();

        assert_eq!(plan.backup_name(), Some("PSModulePath_Backup_20240115_103045"));
        assert!(matches!(
            &plan.actions[1],
            PlanAction::SetVariable { value, .. } if value == "x,y"
        ));
    }

    #[test]
    fn test_plan_uses_shortener() {
        let store = MemoryStore::new();
        store.insert(Scope::User, "Path", r"C:\Program Files;C:\PROGRA~1");
        let lookup = |p: &str| {
            if p == r"C:\Program Files" {
                r"C:\PROGRA~1".to_string()
            } else {
                p.to_string()
            }
        };

        let plan = UpdatePlan::new(UpdateOptions::new(Scope::User))
            .build_plan(&store, &clock(), &lookup)
            .unwrap();

        assert_eq!(plan.report.shortened, 1);
        assert!(matches!(
            &plan.actions[1],
            PlanAction::SetVariable { value, .. } if value == r"C:\PROGRA~1"
        ));
    }

    #[test]
    fn test_plan_read_failure() {
        let store = MemoryStore::new();
        store.break_scope(Scope::User, "hive unloaded");

        let result = UpdatePlan::new(UpdateOptions::new(Scope::User)).build_plan(
            &store,
            &clock(),
            &IdentityShortener,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_options_from_config() {
        let config = Config {
            variable: Some("PSModulePath".into()),
            separator: Some(",".into()),
            ..Default::default()
        };
        let options = UpdateOptions::from_config(&config, Scope::System);
        assert_eq!(options.scope, Scope::System);
        assert_eq!(options.variable, "PSModulePath");
        assert_eq!(options.separator, ',');
    }
}
