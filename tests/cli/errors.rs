//! Tests for error handling and CLI flags.

use crate::support::*;
use predicates::prelude::*;

#[test]
fn test_help() {
    let t = Test::new();

    let output = t.run(&["--help"]);
    assert_success(&output);
    assert_stdout_contains(&output, "Usage");
}

#[test]
fn test_unknown_command_fails() {
    let t = Test::new();
    assert_failure(&t.run(&["unknown-command"]));
}

#[test]
fn test_missing_config_hints_at_setup() {
    let t = Test::new();

    let output = t.check();
    assert_failure(&output);
    assert_stderr_contains(&output, "not initialized");
    assert_stderr_contains(&output, "paramstore init");
}

#[test]
fn test_config_flag() {
    let t = Test::new();
    t.write("other.toml", APP_CONFIG);

    let output = t.run(&["--config", "other.toml", "check"]);
    assert_success(&output);
}

#[test]
fn test_malformed_config() {
    let t = Test::with_config("this is not valid toml { [ }");

    let output = t.check();
    assert_failure(&output);
    assert_stderr_contains(&output, "failed to parse config");
}

#[test]
fn test_unknown_grant_target() {
    let t = Test::with_config(
        r#"
[stack]
name = "S"

[[roles]]
id = "R"
assumed_by = "lambda.amazonaws.com"
read = ["Nope"]
"#,
    );

    let output = t.check();
    assert_failure(&output);
    assert_stderr_contains(&output, "unknown parameter id: Nope");
}

#[test]
fn test_verbose_logs_to_stderr() {
    let t = Test::with_config(APP_CONFIG);

    let output = t.run(&["--verbose", "check"]);
    assert_success(&output);
    assert_stderr_contains(&output, "declared string parameter");
}

#[test]
fn test_completions() {
    let t = Test::new();

    let output = t.run(&["completions", "bash"]);
    assert_success(&output);
    assert_stdout_contains(&output, "paramstore");
}

#[test]
fn test_version() {
    let t = Test::new();

    t.cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("paramstore "));
}

#[test]
fn test_error_goes_to_stderr_only() {
    let t = Test::with_config(PATTERN_MISMATCH_CONFIG);

    t.cmd()
        .arg("synth")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("✗").and(predicate::str::contains("abc")));
}

#[test]
fn test_conflicting_import_options() {
    let t = Test::with_config(
        r#"
[stack]
name = "S"

[[imports]]
id = "Shared"
name = "/shared"
secure = true
list = true
"#,
    );

    let output = t.check();
    assert_failure(&output);
    assert_stderr_contains(&output, "import 'Shared' cannot be both `secure` and `list`");
}
