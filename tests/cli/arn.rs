//! Tests for `paramstore arn`.

use crate::support::*;

#[test]
fn test_arn_path_name() {
    let t = Test::with_config(APP_CONFIG);

    let output = t.arn("/app/db/password");
    assert_success(&output);
    assert_eq!(
        stdout(&output).trim(),
        "arn:aws:ssm:us-east-1:123456789012:parameter/app/db/password"
    );
}

#[test]
fn test_arn_simple_name() {
    let t = Test::with_config(APP_CONFIG);

    let output = t.arn("plain");
    assert_success(&output);
    assert_eq!(
        stdout(&output).trim(),
        "arn:aws:ssm:us-east-1:123456789012:parameter/plain"
    );
}

#[test]
fn test_arn_explicit_separator_wins() {
    let t = Test::with_config(APP_CONFIG);

    let output = t.run(&["arn", "plain", "--simple-name", "false"]);
    assert_success(&output);
    assert_eq!(
        stdout(&output).trim(),
        "arn:aws:ssm:us-east-1:123456789012:parameterplain"
    );
    assert_stderr_contains(&output, "separator");
}

#[test]
fn test_arn_agnostic_stack_prints_expression() {
    let t = Test::with_config(AGNOSTIC_CONFIG);

    let output = t.arn("/x");
    assert_success(&output);
    let json = stdout_json(&output);
    assert!(json["Fn::Join"].is_array());
}

#[test]
fn test_arn_hierarchical_name_needs_leading_slash() {
    let t = Test::with_config(APP_CONFIG);

    let output = t.arn("app/db");
    assert_failure(&output);
    assert_stderr_contains(&output, "must start with '/'");
}
