//! Tests for `paramstore list`.

use crate::support::*;

#[test]
fn test_list_json() {
    let t = Test::with_config(APP_CONFIG);

    let output = t.list_json();
    assert_success(&output);
    let json = stdout_json(&output);

    assert_eq!(json["count"], 3);
    let entries = json["parameters"].as_array().unwrap();
    let shared = entries.iter().find(|e| e["id"] == "Shared").unwrap();
    assert_eq!(shared["type"], "SecureString");
    assert_eq!(shared["declared"], false);
    assert_eq!(
        shared["arn"],
        "arn:aws:ssm:us-east-1:123456789012:parameter/shared-config"
    );

    let zones = entries.iter().find(|e| e["id"] == "Zones").unwrap();
    assert_eq!(zones["type"], "StringList");
    assert_eq!(zones["declared"], true);
}

#[test]
fn test_list_human_output() {
    let t = Test::with_config(APP_CONFIG);

    let output = t.run(&["list"]);
    assert_success(&output);
    assert_stdout_contains(&output, "3 parameters:");
    assert_stdout_contains(&output, "/app/db/password");
    assert_stdout_contains(&output, "imported");
}

#[test]
fn test_list_empty_project() {
    let t = Test::with_config("[stack]\nname = \"Empty\"\n");

    let output = t.run(&["list"]);
    assert_success(&output);
    assert_stdout_contains(&output, "no parameters declared");
}

#[test]
fn test_list_generated_name() {
    let t = Test::with_config(
        r#"
[stack]
name = "Gen"

[[parameters]]
id = "Unnamed"
value = "v"
"#,
    );

    let json = stdout_json(&t.list_json());
    let name = json["parameters"][0]["name"].as_str().unwrap();
    assert!(name.starts_with("Gen-Unnamed-"), "got: {}", name);
}
