//! Property-based tests for configuration merging and validation.

use super::merger::ConfigMerger;
use super::schema::{Config, StoreKind};
use super::validator::ConfigValidator;
use crate::scope::ScopeSelection;
use proptest::prelude::*;

fn scope_strategy() -> impl Strategy<Value = ScopeSelection> {
    prop_oneof![
        Just(ScopeSelection::User),
        Just(ScopeSelection::System),
        Just(ScopeSelection::All),
    ]
}

fn config_strategy() -> impl Strategy<Value = Config> {
    (
        prop::option::of("[A-Za-z][A-Za-z0-9_]{0,20}"),
        prop::option::of("[;:,|]"),
        prop::option::of(scope_strategy()),
        prop::option::of(any::<bool>()),
        prop::option::of(any::<bool>()),
        prop::option::of(any::<bool>()),
    )
        .prop_map(|(variable, separator, scopes, dry_run, strict, shorten)| Config {
            variable,
            separator,
            scopes,
            dry_run,
            strict,
            shorten,
            data_dir: None,
            store: Some(StoreKind::File),
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 1000,
        .. ProptestConfig::default()
    })]

    // Every field set in the higher layer wins; unset fields fall through
    #[test]
    fn merge_higher_precedence_wins(low in config_strategy(), high in config_strategy()) {
        let mut merged = low.clone();
        ConfigMerger::merge_into(&mut merged, &high);

        prop_assert_eq!(merged.variable.clone(), high.variable.clone().or(low.variable.clone()));
        prop_assert_eq!(merged.separator.clone(), high.separator.clone().or(low.separator.clone()));
        prop_assert_eq!(merged.scopes, high.scopes.or(low.scopes));
        prop_assert_eq!(merged.dry_run, high.dry_run.or(low.dry_run));
        prop_assert_eq!(merged.strict, high.strict.or(low.strict));
        prop_assert_eq!(merged.shorten, high.shorten.or(low.shorten));
    }

    // Merging the same layer twice changes nothing
    #[test]
    fn merge_is_idempotent(base in config_strategy(), layer in config_strategy()) {
        let mut once = base.clone();
        ConfigMerger::merge_into(&mut once, &layer);
        let mut twice = once.clone();
        ConfigMerger::merge_into(&mut twice, &layer);
        prop_assert_eq!(once, twice);
    }

    // Generated configurations are always valid
    #[test]
    fn generated_configs_validate(config in config_strategy()) {
        prop_assert!(ConfigValidator::validate(&config).is_ok());
    }

    // Any separator longer than one character is rejected
    #[test]
    fn long_separators_rejected(sep in "[;:,|]{2,5}") {
        let config = Config { separator: Some(sep), ..Default::default() };
        prop_assert!(ConfigValidator::validate(&config).is_err());
    }
}
