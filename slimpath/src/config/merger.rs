//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration layers according to precedence rules.
///
/// # Examples
///
/// ```
/// use slimpath::config::{Config, ConfigMerger};
///
/// let low = Config { variable: Some("Path".to_string()), ..Default::default() };
/// let high = Config { variable: Some("PSModulePath".to_string()), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.variable, Some("PSModulePath".to_string()));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge configuration sources, lowest precedence first.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();
        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }
        result
    }

    /// Merge `source` into `target`; every field set in `source` wins.
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.variable.is_some() {
            target.variable.clone_from(&source.variable);
        }

        if source.separator.is_some() {
            target.separator.clone_from(&source.separator);
        }

        if source.scopes.is_some() {
            target.scopes = source.scopes;
        }

        if source.dry_run.is_some() {
            target.dry_run = source.dry_run;
        }

        if source.strict.is_some() {
            target.strict = source.strict;
        }

        if source.shorten.is_some() {
            target.shorten = source.shorten;
        }

        if source.data_dir.is_some() {
            target.data_dir.clone_from(&source.data_dir);
        }

        if source.store.is_some() {
            target.store = source.store;
        }
    }
}
