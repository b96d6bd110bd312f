//! Tests for `shed init`.

use crate::support::*;

#[test]
fn test_init_creates_config_and_database() {
    let t = Test::new();

    let output = t.init_cmd("hunter2");
    assert_success(&output);
    assert_stdout_contains(&output, "initialized");

    assert!(t.config_path().exists(), "shed.toml should exist");
    assert!(t.db_path().exists(), "shed.db should exist");
}

#[test]
fn test_init_twice_fails() {
    let t = Test::new();
    assert_success(&t.init_cmd("hunter2"));

    let output = t.init_cmd("hunter2");
    assert_failure(&output);
    assert_stderr_contains(&output, "already initialized");
}

#[test]
fn test_init_empty_key_fails() {
    let t = Test::new();

    let output = t.init_cmd("");
    assert_failure(&output);
    assert_stderr_contains(&output, "encryption key cannot be empty");
}

#[test]
fn test_initialized_store_is_usable() {
    let t = Test::new();
    assert_success(&t.init_cmd("hunter2"));

    assert_success(&t.add("greet", "echo hello"));
    let output = t.list();
    assert_success(&output);
    assert_stdout_contains(&output, "greet");
}

#[cfg(unix)]
#[test]
fn test_init_config_is_owner_only() {
    use std::os::unix::fs::PermissionsExt;

    let t = Test::new();
    assert_success(&t.init_cmd("hunter2"));

    let mode = std::fs::metadata(t.config_path())
        .unwrap()
        .permissions()
        .mode()
        & 0o777;
    assert_eq!(mode, 0o600);
}
