//! Tests for `paramstore check`.

use crate::support::*;

#[test]
fn test_check_valid_project() {
    let t = Test::with_config(APP_CONFIG);

    let output = t.check();
    assert_success(&output);
    assert_stdout_contains(&output, "Stack AppStack");
    assert_stdout_contains(&output, "configuration is valid");
}

#[test]
fn test_check_reports_counts() {
    let t = Test::with_config(APP_CONFIG);

    let out = stdout(&t.check());
    assert!(out.contains("declared  2"), "got: {}", out);
    assert!(out.contains("imported  1"), "got: {}", out);
    assert!(out.contains("roles  1"), "got: {}", out);
}

#[test]
fn test_check_agnostic_mentions_deferred_arns() {
    let t = Test::with_config(AGNOSTIC_CONFIG);

    let output = t.check();
    assert_success(&output);
    assert_stdout_contains(&output, "resolve at deploy time");
}

#[test]
fn test_check_list_element_with_comma_fails() {
    let t = Test::with_config(
        r#"
[stack]
name = "S"

[[parameters]]
id = "L"
kind = "string-list"
values = ["a,b", "c"]
"#,
    );

    let output = t.check();
    assert_failure(&output);
    assert_stderr_contains(&output, "must not contain ','");
}

#[test]
fn test_check_secure_string_kind_is_not_declarable() {
    let t = Test::with_config(
        r#"
[stack]
name = "S"

[[parameters]]
id = "Secret"
kind = "secure-string"
value = "x"
"#,
    );

    assert_failure(&t.check());
}

#[test]
fn test_check_relative_path_name_fails_with_hint() {
    let t = Test::with_config(
        r#"
[stack]
name = "S"

[[parameters]]
id = "P"
name = "app/db"
value = "x"
"#,
    );

    let output = t.check();
    assert_failure(&output);
    assert_stderr_contains(&output, "must start with '/'");
    assert_stderr_contains(&output, "→");
}
