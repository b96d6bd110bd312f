//! Tests for `shed add`, `shed list`, `shed describe`, and `shed rm`.

use crate::support::*;

#[test]
fn test_add_and_list() {
    let t = Test::initialized();

    let output = t.add("list_files", "ls -la {{path|directory path}}");
    assert_success(&output);
    assert_stdout_contains(&output, "added list_files");

    let output = t.list();
    assert_success(&output);
    assert_stdout_contains(&output, "1 command(s)");
    assert_stdout_contains(&output, "list_files");
    assert_stdout_contains(&output, "ls -la {{path|directory path}}");
    assert_stdout_contains(&output, "path: directory path");
}

#[test]
fn test_add_normalizes_template() {
    let t = Test::initialized();

    assert_success(&t.add("greet", "  echo   {{ name | who }} "));

    let output = t.describe("greet");
    assert_success(&output);
    assert_stdout_contains(&output, "echo {{name|who}}");
}

#[test]
fn test_add_duplicate_fails() {
    let t = Test::with_commands(&[("dup", "echo one")]);

    let output = t.add("dup", "echo two");
    assert_failure(&output);
    assert_stderr_contains(&output, "already exists");
}

#[test]
fn test_add_invalid_name_fails() {
    let t = Test::initialized();

    let output = t.add("bad name", "echo hi");
    assert_failure(&output);
    assert_stderr_contains(&output, "invalid command name");
}

#[test]
fn test_add_invalid_template_fails() {
    let t = Test::initialized();

    let output = t.add("bad_tpl", "echo {{pa-ram}}");
    assert_failure(&output);
    assert_stderr_contains(&output, "invalid symbols");
}

#[test]
fn test_add_with_description() {
    let t = Test::initialized();

    assert_success(&t.add_described("greet", "echo hi", "says hello"));

    let output = t.describe("greet");
    assert_success(&output);
    assert_stdout_contains(&output, "says hello");
}

#[test]
fn test_list_empty() {
    let t = Test::initialized();

    let output = t.list();
    assert_success(&output);
    assert_stdout_contains(&output, "no commands stored");
}

#[test]
fn test_describe_shows_timestamps() {
    let t = Test::with_commands(&[("greet", "echo hi")]);

    let output = t.describe("greet");
    assert_success(&output);
    assert_stdout_contains(&output, "created:");
    assert_stdout_contains(&output, "updated:");
}

#[test]
fn test_describe_missing_fails() {
    let t = Test::initialized();

    let output = t.describe("ghost");
    assert_failure(&output);
    assert_stderr_contains(&output, "command not found");
}

#[test]
fn test_rm() {
    let t = Test::with_commands(&[("gone", "echo bye")]);

    assert_success(&t.rm("gone"));

    let output = t.describe("gone");
    assert_failure(&output);
}

#[test]
fn test_rm_missing_fails() {
    let t = Test::initialized();

    let output = t.rm("ghost");
    assert_failure(&output);
    assert_stderr_contains(&output, "command not found");
}
