//! End-to-end update runs against the memory and file stores.

mod common;

use common::{fixed_clock, seeded_file_store, seeded_memory_store, BACKUP, SYSTEM_PATH, USER_PATH};
use slimpath::backup::list_backups;
use slimpath::operations::{run_update, RunOptions};
use slimpath::output::{status_lines, BANNER};
use slimpath::path::IdentityShortener;
use slimpath::store::{EnvironmentStore, FileStore, MemoryStore};
use slimpath::{Scope, ScopeSelection};

const USER_CLEAN: &str = r"C:\Users\me\bin;C:\Tools";
const SYSTEM_CLEAN: &str = r"C:\Windows\system32;C:\Windows";

#[test]
fn test_full_run_rewrites_and_backs_up_both_scopes() {
    let store = seeded_memory_store();

    let summary = run_update(&RunOptions::default(), &store, &fixed_clock(), &IdentityShortener);

    assert!(summary.all_succeeded());
    assert_eq!(store.get("Path", Scope::User).unwrap().as_deref(), Some(USER_CLEAN));
    assert_eq!(store.get("Path", Scope::System).unwrap().as_deref(), Some(SYSTEM_CLEAN));
    assert_eq!(store.get(BACKUP, Scope::User).unwrap().as_deref(), Some(USER_PATH));
    assert_eq!(store.get(BACKUP, Scope::System).unwrap().as_deref(), Some(SYSTEM_PATH));

    // Backup first, then the variable, user scope before system scope
    assert_eq!(
        store.writes(),
        vec![
            (Scope::User, BACKUP.to_string()),
            (Scope::User, "Path".to_string()),
            (Scope::System, BACKUP.to_string()),
            (Scope::System, "Path".to_string()),
        ]
    );
}

#[test]
fn test_status_lines_for_non_admin_run() {
    let store = seeded_memory_store();
    store.deny_writes(Scope::System);

    let summary = run_update(&RunOptions::default(), &store, &fixed_clock(), &IdentityShortener);

    assert_eq!(BANNER, "🔧 Shortening PATH variables...");
    assert_eq!(
        status_lines(&summary),
        vec![
            format!("[USER] PATH updated. Backup saved as {BACKUP}"),
            "[SYSTEM] ❌ Admin rights required to modify system PATH.".to_string(),
        ]
    );
    assert_eq!(store.get("Path", Scope::System).unwrap().as_deref(), Some(SYSTEM_PATH));
    assert_eq!(store.get(BACKUP, Scope::System).unwrap(), None);
}

#[test]
fn test_generic_system_failure_reported() {
    let store = seeded_memory_store();
    store.break_scope(Scope::System, "registry hive unavailable");

    let summary = run_update(&RunOptions::default(), &store, &fixed_clock(), &IdentityShortener);
    let lines = status_lines(&summary);

    assert!(lines[0].starts_with("[USER] PATH updated."));
    assert_eq!(
        lines[1],
        "[SYSTEM] Failed: system environment store error: registry hive unavailable"
    );
}

#[test]
fn test_user_failure_reported_and_system_still_runs() {
    let store = seeded_memory_store();
    store.deny_writes(Scope::User);

    let summary = run_update(&RunOptions::default(), &store, &fixed_clock(), &IdentityShortener);
    let lines = status_lines(&summary);

    assert!(lines[0].starts_with("[USER] Failed: permission denied"));
    assert!(lines[1].starts_with("[SYSTEM] PATH updated."));
    assert_eq!(store.get("Path", Scope::System).unwrap().as_deref(), Some(SYSTEM_CLEAN));
}

#[test]
fn test_dry_run_leaves_store_untouched() {
    let (_dir, store) = seeded_file_store();
    let before_user = store.list(Scope::User).unwrap();
    let before_system = store.list(Scope::System).unwrap();

    let options = RunOptions {
        dry_run: true,
        ..Default::default()
    };
    let summary = run_update(&options, &store, &fixed_clock(), &IdentityShortener);

    assert!(summary.all_succeeded());
    assert_eq!(store.list(Scope::User).unwrap(), before_user);
    assert_eq!(store.list(Scope::System).unwrap(), before_system);
    assert!(status_lines(&summary)[0].contains("would be updated"));
}

#[test]
fn test_file_store_run_persists_across_instances() {
    let (dir, store) = seeded_file_store();

    run_update(&RunOptions::default(), &store, &fixed_clock(), &IdentityShortener);

    let reopened = FileStore::new(dir.path());
    assert_eq!(reopened.get("Path", Scope::User).unwrap().as_deref(), Some(USER_CLEAN));
    let backups = list_backups(&reopened, Scope::System, "Path").unwrap();
    assert_eq!(backups.len(), 1);
    assert_eq!(backups[0].name, BACKUP);
    assert_eq!(backups[0].value, SYSTEM_PATH);
}

#[test]
fn test_shortener_applied_before_dedup() {
    let store = MemoryStore::new();
    store.insert(Scope::User, "Path", "LongName1;LONGNA~1;Other");
    let lookup = |p: &str| {
        if p.eq_ignore_ascii_case("LongName1") || p == "LONGNA~1" {
            "LONGNA~1".to_string()
        } else {
            p.to_string()
        }
    };
    let options = RunOptions {
        scopes: ScopeSelection::User,
        ..Default::default()
    };

    let summary = run_update(&options, &store, &fixed_clock(), &lookup);

    assert!(summary.all_succeeded());
    assert_eq!(store.get("Path", Scope::User).unwrap().as_deref(), Some("LONGNA~1;Other"));
}

#[test]
fn test_percent_references_preserved() {
    let store = MemoryStore::new();
    store.insert(
        Scope::System,
        "Path",
        r"%SystemRoot%\system32;%SYSTEMROOT%\System32;%SystemRoot%",
    );
    let options = RunOptions {
        scopes: ScopeSelection::System,
        ..Default::default()
    };

    run_update(&options, &store, &fixed_clock(), &IdentityShortener);

    assert_eq!(
        store.get("Path", Scope::System).unwrap().as_deref(),
        Some(r"%SystemRoot%\system32;%SystemRoot%")
    );
}

#[test]
fn test_repeat_runs_keep_every_backup() {
    let store = seeded_memory_store();
    let options = RunOptions {
        scopes: ScopeSelection::User,
        ..Default::default()
    };

    run_update(&options, &store, &fixed_clock(), &IdentityShortener);
    let later = slimpath::FixedClock::new(
        common::fixed_time() + chrono::Duration::seconds(61),
    );
    run_update(&options, &store, &later, &IdentityShortener);

    let backups = list_backups(&store, Scope::User, "Path").unwrap();
    assert_eq!(backups.len(), 2);
    assert_eq!(backups[0].value, USER_PATH);
    assert_eq!(backups[1].name, "Path_Backup_20240115_103146");
    assert_eq!(backups[1].value, USER_CLEAN);
}
