//! Test support utilities for passmigrate integration tests.
//!
//! Provides an isolated password store plus stand-ins for `pass` and `gpg`
//! that print record files verbatim instead of decrypting them.

#![allow(dead_code)]

pub mod assertions;
pub mod commands;
pub mod fixtures;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Test environment with isolated temp directories.
///
/// Each test gets its own store, home and tool directory. Nothing touches
/// process-global state, so tests can run in parallel.
pub struct Test {
    /// Password store root; record files hold plaintext
    pub store: TempDir,
    /// Temporary home directory
    pub home: TempDir,
    /// Directory holding the fake tools
    pub bin: TempDir,
}

impl Test {
    /// Create an empty store with fake `pass` and `gpg` installed.
    pub fn new() -> Self {
        let t = Self {
            store: TempDir::new().expect("failed to create temp store"),
            home: TempDir::new().expect("failed to create temp home"),
            bin: TempDir::new().expect("failed to create temp bin"),
        };
        t.install_tool("pass", FAKE_PASS);
        t.install_tool("gpg", FAKE_GPG);
        t
    }

    /// Create a store holding `records` as `(name, body)` pairs.
    pub fn with_records(records: &[(&str, &str)]) -> Self {
        let t = Self::new();
        for (name, body) in records {
            t.add_record(name, body);
        }
        t
    }

    /// Write a record file for `name`.
    pub fn add_record(&self, name: &str, body: &str) {
        self.add_file(&format!("{}.gpg", name), body);
    }

    /// Write an arbitrary file inside the store.
    pub fn add_file(&self, rel: &str, contents: &str) {
        let path = self.store.path().join(rel);
        fs::create_dir_all(path.parent().unwrap()).expect("failed to create dir");
        fs::write(&path, contents).expect("failed to write file");
    }

    /// Path of an installed fake tool.
    pub fn tool(&self, name: &str) -> PathBuf {
        self.bin.path().join(name)
    }

    /// Install an executable shell script into the tool directory.
    pub fn install_tool(&self, name: &str, script: &str) {
        use std::os::unix::fs::PermissionsExt;

        let path = self.tool(name);
        fs::write(&path, script).expect("failed to write tool");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
            .expect("failed to chmod tool");
    }
}
