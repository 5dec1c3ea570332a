//! Common test utilities for integration tests.

use chrono::{NaiveDate, NaiveDateTime};
use slimpath::store::{FileStore, MemoryStore};
use slimpath::{FixedClock, Scope};

/// The instant every fixture clock reports: 2024-01-15 10:30:45.
#[allow(dead_code)]
pub fn fixed_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 15)
        .unwrap()
        .and_hms_opt(10, 30, 45)
        .unwrap()
}

/// A clock frozen at [`fixed_time`].
#[allow(dead_code)]
pub fn fixed_clock() -> FixedClock {
    FixedClock::new(fixed_time())
}

/// The backup name produced at [`fixed_time`] for `Path`.
#[allow(dead_code)]
pub const BACKUP: &str = "Path_Backup_20240115_103045";

/// A memory store seeded with a messy `Path` in both scopes.
#[allow(dead_code)]
pub fn seeded_memory_store() -> MemoryStore {
    let store = MemoryStore::new();
    store.insert(Scope::User, "Path", USER_PATH);
    store.insert(Scope::System, "Path", SYSTEM_PATH);
    store
}

/// Raw user `Path` used by the fixtures.
#[allow(dead_code)]
pub const USER_PATH: &str = r"C:\Users\me\bin; c:\users\ME\bin ;;C:\Tools";

/// Raw system `Path` used by the fixtures.
#[allow(dead_code)]
pub const SYSTEM_PATH: &str = r"C:\Windows\system32;C:\Windows;C:\WINDOWS\System32; ";

/// A file store in a temporary directory, seeded like [`seeded_memory_store`].
///
/// The `TempDir` must be kept alive for as long as the store is used.
#[allow(dead_code)]
pub fn seeded_file_store() -> (tempfile::TempDir, FileStore) {
    use slimpath::store::EnvironmentStore;

    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path());
    store.set("Path", USER_PATH, Scope::User).unwrap();
    store.set("Path", SYSTEM_PATH, Scope::System).unwrap();
    (dir, store)
}
