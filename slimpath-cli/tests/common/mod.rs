//! Common test utilities for CLI integration tests.
//!
//! Every test runs the binary against the file store in its own temporary
//! data directory, so nothing touches the real environment.

use assert_cmd::Command;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables that would leak the caller's settings into a test.
const SLIMPATH_VARS: [&str; 10] = [
    "SLIMPATH_DATA_DIR",
    "SLIMPATH_VARIABLE",
    "SLIMPATH_SEPARATOR",
    "SLIMPATH_SCOPE",
    "SLIMPATH_DRY_RUN",
    "SLIMPATH_STRICT",
    "SLIMPATH_SHORTEN",
    "SLIMPATH_STORE",
    "SLIMPATH_LOG_MODE",
    "SLIMPATH_OUTPUT_FORMAT",
];

/// Raw user `Path` used by the fixtures.
#[allow(dead_code)]
pub const USER_PATH: &str = r"C:\Users\me\bin; c:\users\ME\bin ;;C:\Tools";

/// `USER_PATH` after normalization.
#[allow(dead_code)]
pub const USER_CLEAN: &str = r"C:\Users\me\bin;C:\Tools";

/// Raw system `Path` used by the fixtures.
#[allow(dead_code)]
pub const SYSTEM_PATH: &str = r"C:\Windows\system32;C:\Windows;C:\WINDOWS\System32; ";

/// `SYSTEM_PATH` after normalization.
#[allow(dead_code)]
pub const SYSTEM_CLEAN: &str = r"C:\Windows\system32;C:\Windows";

/// Test environment with an isolated data directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the slimpath data directory
    pub data_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment with an empty data directory.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join("slimpath-data");
        std::fs::create_dir_all(&data_dir).expect("Failed to create data dir");

        Self { temp_dir, data_dir }
    }

    /// Create an environment with `Path` seeded in both scopes.
    pub fn seeded() -> Self {
        let env = Self::new();
        env.write_scope("user", &[("Path", USER_PATH)]);
        env.write_scope("system", &[("Path", SYSTEM_PATH)]);
        env
    }

    /// Get a bare command builder without pre-configured flags.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("slimpath").expect("Failed to find slimpath binary");
        for var in SLIMPATH_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Get a command builder pointed at the file store in this environment.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--store")
            .arg("file")
            .arg("--data-dir")
            .arg(&self.data_dir);
        cmd
    }

    /// Path to the data directory.
    pub fn path(&self) -> &Path {
        &self.data_dir
    }

    /// Overwrite a scope file with the given variables.
    pub fn write_scope(&self, scope: &str, vars: &[(&str, &str)]) {
        let map: BTreeMap<&str, &str> = vars.iter().copied().collect();
        let yaml = serde_yaml::to_string(&map).expect("Failed to serialize scope");
        std::fs::write(self.scope_file(scope), yaml).expect("Failed to write scope file");
    }

    /// Write raw text into a scope file.
    pub fn write_scope_raw(&self, scope: &str, contents: &str) {
        std::fs::write(self.scope_file(scope), contents).expect("Failed to write scope file");
    }

    /// Read back every variable in a scope.
    pub fn read_scope(&self, scope: &str) -> BTreeMap<String, String> {
        let path = self.scope_file(scope);
        if !path.exists() {
            return BTreeMap::new();
        }
        let contents = std::fs::read_to_string(path).expect("Failed to read scope file");
        serde_yaml::from_str(&contents).expect("Scope file is not valid YAML")
    }

    /// Read one variable from a scope.
    pub fn get(&self, scope: &str, name: &str) -> Option<String> {
        self.read_scope(scope).remove(name)
    }

    /// Names of the backup variables in a scope.
    pub fn backup_names(&self, scope: &str) -> Vec<String> {
        self.read_scope(scope)
            .into_keys()
            .filter(|name| name.starts_with("Path_Backup_"))
            .collect()
    }

    /// Write `config.yaml` into the data directory.
    pub fn write_config(&self, yaml: &str) {
        std::fs::write(self.data_dir.join("config.yaml"), yaml).expect("Failed to write config");
    }

    fn scope_file(&self, scope: &str) -> PathBuf {
        self.data_dir.join(format!("{scope}.yaml"))
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
