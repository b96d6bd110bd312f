//! Tests for `shed run`.

#![cfg(unix)]

use crate::support::*;

#[test]
fn test_run_plain_command() {
    let t = Test::with_commands(&[("greet", "echo hello")]);

    let output = t.run("greet");
    assert_success(&output);
    assert_stdout_contains(&output, "hello");
}

#[test]
fn test_run_with_parameter_values() {
    let t = Test::with_commands(&[("greet", "echo hello {{name|who to greet}}")]);

    let output = t.run_values("greet", r#"{"name":"world"}"#);
    assert_success(&output);
    assert_stdout_contains(&output, "hello world");
}

#[test]
fn test_run_missing_parameter_fails_before_spawn() {
    let t = Test::initialized();
    let marker = t.dir.path().join("marker");
    let template = format!("echo {{{{msg|what to say}}}} && touch {}", marker.display());
    assert_success(&t.add("echo_cmd", &template));

    let output = t.run("echo_cmd");
    assert_failure(&output);
    assert_stderr_contains(&output, "missing parameters: msg");
    // Hydration failed, so the shell never ran.
    assert!(!marker.exists());
}

#[test]
fn test_run_secret_backed_command() {
    let t = Test::with_secrets(&[("api_key", "KKK")]);
    assert_success(&t.add("deploy", "echo curl -H token:{{!api_key}} {{url|api}}"));

    let output = t.run_values("deploy", r#"{"url":"https://ex.com"}"#);
    assert_success(&output);
    assert_stdout_contains(&output, "curl -H token:KKK https://ex.com");
}

#[test]
fn test_run_missing_secret_fails() {
    let t = Test::initialized();
    assert_success(&t.add("deploy", "echo {{!api_key}}"));

    let output = t.run("deploy");
    assert_failure(&output);
    assert_stderr_contains(&output, "secret not found: api_key");
}

#[test]
fn test_run_missing_command_fails() {
    let t = Test::initialized();

    let output = t.run("ghost");
    assert_failure(&output);
    assert_stderr_contains(&output, "command not found");
}

#[test]
fn test_run_nonzero_exit_propagates() {
    let t = Test::with_commands(&[("fails", "exit 42")]);

    let output = t.run("fails");
    assert_failure(&output);
    assert_stderr_contains(&output, "exited with code 42");
}

#[test]
fn test_run_stderr_is_forwarded() {
    let t = Test::with_commands(&[("noisy", "echo oops 1>&2")]);

    let output = t.run("noisy");
    assert_success(&output);
    assert_stdout_contains(&output, "oops");
}

#[test]
fn test_run_shell_features_work() {
    let t = Test::with_commands(&[("piped", "echo one two | wc -w")]);

    let output = t.run("piped");
    assert_success(&output);
    assert_stdout_contains(&output, "2");
}

#[test]
fn test_run_bad_json_fails() {
    let t = Test::with_commands(&[("greet", "echo hi")]);

    let output = t.run_values("greet", r#"{"n":1}"#);
    assert_failure(&output);
    assert_stderr_contains(&output, "value parameters");
}
