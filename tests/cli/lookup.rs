//! Tests for `paramstore lookup`.

use crate::support::*;

const CONTEXT_KEY: &str = "ssm:account=123456789012:parameterName=/app/ami:region=us-east-1";

#[test]
fn test_lookup_hit() {
    let t = Test::with_config(APP_CONFIG);
    t.write(
        "paramstore.context.json",
        &format!(r#"{{"{}": "ami-1234"}}"#, CONTEXT_KEY),
    );

    let output = t.lookup("/app/ami");
    assert_success(&output);
    assert_eq!(stdout(&output).trim(), "ami-1234");
}

#[test]
fn test_lookup_miss_prints_dummy_and_hint() {
    let t = Test::with_config(APP_CONFIG);

    let output = t.lookup("/app/ami");
    assert_success(&output);
    assert_eq!(stdout(&output).trim(), "dummy-value-for-/app/ami");
    assert_stderr_contains(&output, CONTEXT_KEY);
}

#[test]
fn test_lookup_miss_with_default() {
    let t = Test::with_config(APP_CONFIG);

    let output = t.run(&["lookup", "/app/ami", "--default", "ami-0"]);
    assert_success(&output);
    assert_eq!(stdout(&output).trim(), "ami-0");
}

#[test]
fn test_lookup_agnostic_stack_fails() {
    let t = Test::with_config(AGNOSTIC_CONFIG);

    let output = t.lookup("/app/ami");
    assert_failure(&output);
    assert_stderr_contains(&output, "account and region");
}

#[test]
fn test_lookup_malformed_context_file() {
    let t = Test::with_config(APP_CONFIG);
    t.write("paramstore.context.json", "[1, 2");

    let output = t.lookup("/app/ami");
    assert_failure(&output);
    assert_stderr_contains(&output, "failed to read context file");
}
