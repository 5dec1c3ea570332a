//! Property-based tests for path list normalization.

use super::list::{fold_case, normalize, normalize_with, PathList, DEFAULT_SEPARATOR};
use super::shorten::IdentityShortener;
use proptest::prelude::*;
use std::collections::HashSet;

// Path-like entries, sometimes padded with whitespace.
fn entry_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[A-Za-z]:\\\\[A-Za-z0-9_ ~-]{0,12}",
        "[A-Za-z0-9_~-]{1,8}",
        " {1,3}[a-zA-Z]{1,4} {0,2}",
        "[a-zA-ZßäÄﬁ]{1,4}",
        Just(String::new()),
        Just("   ".to_string()),
    ]
}

fn raw_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(entry_strategy(), 0..12).prop_map(|parts| parts.join(";"))
}

fn upper(p: &str) -> String {
    p.to_uppercase()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // normalize(normalize(x)) == normalize(x)
    #[test]
    fn normalization_idempotent(raw in raw_strategy()) {
        let once = normalize(Some(&raw), &IdentityShortener);
        let twice = normalize(Some(&once), &IdentityShortener);
        prop_assert_eq!(once, twice);
    }

    // Idempotent with a non-identity but deterministic lookup too.
    #[test]
    fn normalization_idempotent_with_lookup(raw in raw_strategy()) {
        let once = normalize(Some(&raw), &upper);
        let twice = normalize(Some(&once), &upper);
        prop_assert_eq!(once, twice);
    }

    // No empty entries and no case-insensitive duplicates in the output.
    #[test]
    fn output_has_no_blank_or_duplicate_entries(raw in raw_strategy()) {
        let out = normalize(Some(&raw), &IdentityShortener);
        if !out.is_empty() {
            let mut seen = HashSet::new();
            for entry in out.split(DEFAULT_SEPARATOR) {
                prop_assert!(!entry.trim().is_empty());
                prop_assert_eq!(entry, entry.trim());
                prop_assert!(seen.insert(fold_case(entry)));
            }
        }
    }

    // Output is empty exactly when the input has no usable entries.
    #[test]
    fn empty_output_iff_no_usable_entries(raw in raw_strategy()) {
        let usable = raw.split(DEFAULT_SEPARATOR).any(|e| !e.trim().is_empty());
        let out = normalize(Some(&raw), &IdentityShortener);
        prop_assert_eq!(out.is_empty(), !usable);
    }

    // Output entries appear in the order of their first occurrence.
    #[test]
    fn first_seen_order_preserved(raw in raw_strategy()) {
        let mut expected: Vec<String> = Vec::new();
        for entry in raw.split(DEFAULT_SEPARATOR).map(str::trim).filter(|e| !e.is_empty()) {
            if !expected.iter().any(|e| fold_case(e) == fold_case(entry)) {
                expected.push(entry.to_string());
            }
        }
        let (list, report) = PathList::build(Some(&raw), DEFAULT_SEPARATOR, &IdentityShortener);
        prop_assert_eq!(list.entries(), expected.as_slice());
        prop_assert_eq!(report.entries_out + report.duplicates.len(), report.entries_in);
    }

    // Separator choice does not change the result beyond the delimiter.
    #[test]
    fn separator_is_interchangeable(raw in raw_strategy()) {
        let semicolon = normalize(Some(&raw), &IdentityShortener);
        let colon = normalize_with(Some(&raw.replace(';', "|")), '|', &IdentityShortener);
        prop_assert_eq!(semicolon.replace(';', "|"), colon);
    }
}
