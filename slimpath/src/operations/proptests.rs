//! Property-based tests for update runs.

use super::run::{run_update, RunOptions};
use crate::clock::FixedClock;
use crate::path::IdentityShortener;
use crate::scope::Scope;
use crate::store::{EnvironmentStore, MemoryStore};
use chrono::NaiveDate;
use proptest::prelude::*;

fn clock(second: u32) -> FixedClock {
    FixedClock::new(
        NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_opt(10, 30, second)
            .unwrap(),
    )
}

fn path_value() -> impl Strategy<Value = String> {
    prop::collection::vec(r"( ?[A-Ca-c]:\\[a-cA-C]{1,3} ?)?", 0..8).prop_map(|v| v.join(";"))
}

proptest! {
    // A second run leaves the value unchanged and backs up the first result
    #[test]
    fn second_run_is_stable(user in path_value(), system in path_value()) {
        let store = MemoryStore::new();
        store.insert(Scope::User, "Path", &user);
        store.insert(Scope::System, "Path", &system);

        let options = RunOptions::default();
        run_update(&options, &store, &clock(0), &IdentityShortener);
        let first_user = store.get("Path", Scope::User).unwrap();
        let first_system = store.get("Path", Scope::System).unwrap();

        run_update(&options, &store, &clock(1), &IdentityShortener);
        prop_assert_eq!(store.get("Path", Scope::User).unwrap(), first_user.clone());
        prop_assert_eq!(store.get("Path", Scope::System).unwrap(), first_system);
        prop_assert_eq!(
            store.get("Path_Backup_20240115_103001", Scope::User).unwrap(),
            first_user
        );
        prop_assert_eq!(
            store.get("Path_Backup_20240115_103000", Scope::User).unwrap(),
            Some(user)
        );
    }

    // A denied system scope never affects the user result
    #[test]
    fn user_result_independent_of_system(user in path_value(), system in path_value()) {
        let allowed = MemoryStore::new();
        allowed.insert(Scope::User, "Path", &user);
        allowed.insert(Scope::System, "Path", &system);

        let denied = MemoryStore::new();
        denied.insert(Scope::User, "Path", &user);
        denied.insert(Scope::System, "Path", &system);
        denied.deny_writes(Scope::System);

        let options = RunOptions::default();
        run_update(&options, &allowed, &clock(0), &IdentityShortener);
        let summary = run_update(&options, &denied, &clock(0), &IdentityShortener);

        prop_assert!(summary.outcome(Scope::User).unwrap().is_success());
        prop_assert!(summary.outcome(Scope::System).unwrap().is_permission_denied());
        prop_assert_eq!(
            allowed.get("Path", Scope::User).unwrap(),
            denied.get("Path", Scope::User).unwrap()
        );
        prop_assert_eq!(denied.get("Path", Scope::System).unwrap(), Some(system));
    }
}
