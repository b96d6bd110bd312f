//! Tests for `shed edit`.

use crate::support::*;

#[test]
fn test_edit_changes_template() {
    let t = Test::with_commands(&[("greet", "echo hello")]);

    let output = t.edit(&["greet", "echo goodbye"]);
    assert_success(&output);

    let output = t.describe("greet");
    assert_stdout_contains(&output, "echo goodbye");
}

#[test]
fn test_edit_preserves_description_when_omitted() {
    let t = Test::initialized();
    assert_success(&t.add_described("greet", "echo hi", "says hello"));

    assert_success(&t.edit(&["greet", "echo hey"]));

    let output = t.describe("greet");
    assert_stdout_contains(&output, "says hello");
}

#[test]
fn test_edit_updates_description_with_flag() {
    let t = Test::initialized();
    assert_success(&t.add_described("greet", "echo hi", "old description"));

    assert_success(&t.edit(&["greet", "echo hi", "-d", "new description"]));

    let output = t.describe("greet");
    assert_stdout_contains(&output, "new description");
    assert_stdout_excludes(&output, "old description");
}

#[test]
fn test_edit_renames_with_flag() {
    let t = Test::with_commands(&[("old_name", "echo hi")]);

    assert_success(&t.edit(&["old_name", "echo hi", "-n", "new_name"]));

    assert_failure(&t.describe("old_name"));
    let output = t.describe("new_name");
    assert_success(&output);
    assert_stdout_contains(&output, "echo hi");
}

#[test]
fn test_edit_hydrates_json_values() {
    let t = Test::with_commands(&[("call", "curl {{url|endpoint}} -H {{auth}}")]);

    let output = t.edit(&[
        "call",
        "curl {{url|endpoint}} -H {{auth}}",
        r#"{"url":"https://api.example.com"}"#,
    ]);
    assert_success(&output);

    let output = t.describe("call");
    assert_stdout_contains(&output, "curl https://api.example.com -H {{auth}}");
    assert_stdout_excludes(&output, "url: endpoint");
}

#[test]
fn test_edit_missing_command_fails() {
    let t = Test::initialized();

    let output = t.edit(&["ghost", "echo hi"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "command not found");
}

#[test]
fn test_edit_template_is_source_of_truth_for_parameters() {
    let t = Test::with_commands(&[("job", "run {{alpha|a rich description}}")]);

    // A plain edit re-derives the parameter list from the new template:
    // the edited span text wins because nothing changed underneath.
    assert_success(&t.edit(&["job", "run {{alpha|trimmed}} --fast"]));

    let output = t.describe("job");
    assert_stdout_contains(&output, "alpha: trimmed");
    assert_stdout_contains(&output, "run {{alpha|trimmed}} --fast");
}

#[test]
fn test_edit_drops_parameters_gone_from_template() {
    let t = Test::with_commands(&[("job", "run {{alpha|a}} {{beta|b}}")]);

    assert_success(&t.edit(&["job", "run {{alpha|a}}"]));

    let output = t.describe("job");
    assert_stdout_contains(&output, "parameters:  1");
    assert_stdout_excludes(&output, "beta");
}
