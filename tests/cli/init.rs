//! Tests for `paramstore init`.

use crate::support::*;

#[test]
fn test_init_creates_config() {
    let t = Test::new();

    let output = t.init("NewStack");
    assert_success(&output);
    assert_stdout_contains(&output, "initialized paramstore.toml");
    assert_stdout_contains(&output, "Stack NewStack");

    let contents = std::fs::read_to_string(t.path("paramstore.toml")).unwrap();
    assert!(contents.contains("name = \"NewStack\""), "got: {}", contents);
    assert!(!contents.contains("account"), "got: {}", contents);
}

#[test]
fn test_init_then_check() {
    let t = Test::new();
    assert_success(&t.run(&[
        "init",
        "NewStack",
        "--account",
        ACCOUNT,
        "--region",
        "eu-west-1",
        "--partition",
        "aws",
    ]));

    let output = t.check();
    assert_success(&output);
    assert_stdout_contains(&output, ACCOUNT);
    assert_stdout_contains(&output, "eu-west-1");

    let output = t.arn("/app/x");
    assert_success(&output);
    assert_eq!(
        stdout(&output).trim(),
        format!("arn:aws:ssm:eu-west-1:{}:parameter/app/x", ACCOUNT)
    );
}

#[test]
fn test_init_refuses_to_overwrite() {
    let t = Test::with_config(APP_CONFIG);

    let output = t.init("Other");
    assert_failure(&output);
    assert_stderr_contains(&output, "already initialized");
    assert_stderr_contains(&output, "--force");

    let contents = std::fs::read_to_string(t.path("paramstore.toml")).unwrap();
    assert!(contents.contains("AppStack"));
}

#[test]
fn test_init_force_overwrites() {
    let t = Test::with_config(APP_CONFIG);

    assert_success(&t.run(&["init", "Other", "--force"]));
    let contents = std::fs::read_to_string(t.path("paramstore.toml")).unwrap();
    assert!(contents.contains("name = \"Other\""));
    assert!(!contents.contains("DbPassword"));
}

#[test]
fn test_init_rejects_bad_stack_name() {
    let t = Test::new();

    let output = t.init("has space");
    assert_failure(&output);
    assert_stderr_contains(&output, "stack name 'has space'");
    assert!(!t.path("paramstore.toml").exists());
}
