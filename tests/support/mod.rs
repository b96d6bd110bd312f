//! Test support utilities for shed integration tests.
//!
//! Provides reusable test environment setup and helper commands.

#![allow(dead_code)]

pub mod assertions;
pub mod commands;

#[allow(unused_imports)]
pub use assertions::*;

use std::path::PathBuf;

use tempfile::TempDir;

/// Test environment with an isolated shed directory.
///
/// Each test gets its own temporary `SHED_DIR`. No process-global state is
/// mutated — child processes receive the directory through their
/// environment, so tests can safely run in parallel.
pub struct Test {
    /// Temporary shed directory
    pub dir: TempDir,
}

impl Test {
    /// Create a new empty test environment (no config written).
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        Self { dir }
    }

    /// Create a test environment with a config and database in place.
    ///
    /// Writes `shed.toml` directly rather than going through `shed init`
    /// so tests don't depend on the init prompt.
    pub fn initialized() -> Self {
        let t = Self::new();
        let config = shed::Config::new(t.dir.path().join("shed.db"), "test-key".to_string());
        config.save(t.dir.path()).expect("failed to write config");
        t
    }

    /// Create a test environment with commands already stored.
    pub fn with_commands(commands: &[(&str, &str)]) -> Self {
        let t = Self::initialized();
        for (name, command) in commands {
            let output = t.add(name, command);
            assert!(
                output.status.success(),
                "failed to add command {}: {}",
                name,
                String::from_utf8_lossy(&output.stderr)
            );
        }
        t
    }

    /// Create a test environment with secrets already stored.
    pub fn with_secrets(secrets: &[(&str, &str)]) -> Self {
        let t = Self::initialized();
        for (key, value) in secrets {
            let output = t.secret_add(key, value);
            assert!(
                output.status.success(),
                "failed to add secret {}: {}",
                key,
                String::from_utf8_lossy(&output.stderr)
            );
        }
        t
    }

    /// Path to the config file inside the test shed directory.
    pub fn config_path(&self) -> PathBuf {
        self.dir.path().join("shed.toml")
    }

    /// Path to the database file inside the test shed directory.
    pub fn db_path(&self) -> PathBuf {
        self.dir.path().join("shed.db")
    }
}
