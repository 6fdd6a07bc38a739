//! Tests for `paramstore synth`.

use crate::support::*;

#[test]
fn test_synth_prints_template() {
    let t = Test::with_config(APP_CONFIG);

    let output = t.synth();
    assert_success(&output);
    let template = stdout_json(&output);

    assert_eq!(template["AWSTemplateFormatVersion"], "2010-09-09");
    let resources = template["Resources"].as_object().unwrap();
    let types: Vec<&str> = resources
        .values()
        .map(|r| r["Type"].as_str().unwrap())
        .collect();
    assert_eq!(types.iter().filter(|t| **t == "AWS::SSM::Parameter").count(), 2);
    assert_eq!(types.iter().filter(|t| **t == "AWS::IAM::Role").count(), 1);
}

#[test]
fn test_synth_declares_parameter_properties() {
    let t = Test::with_config(APP_CONFIG);

    let template = stdout_json(&t.synth());
    let resources = template["Resources"].as_object().unwrap();
    let db = resources
        .values()
        .find(|r| r["Properties"]["Name"] == "/app/db/password")
        .expect("db password resource");

    assert_eq!(db["Properties"]["Type"], "String");
    assert_eq!(db["Properties"]["Value"], "hunter2");

    let zones = resources
        .values()
        .find(|r| r["Properties"]["Name"] == "zones")
        .expect("zones resource");
    assert_eq!(zones["Properties"]["Type"], "StringList");
    assert_eq!(zones["Properties"]["Value"], "a,b,c");
}

#[test]
fn test_synth_role_policy_scoped_to_arns() {
    let t = Test::with_config(APP_CONFIG);

    let template = stdout_json(&t.synth());
    let role = template["Resources"]
        .as_object()
        .unwrap()
        .values()
        .find(|r| r["Type"] == "AWS::IAM::Role")
        .unwrap();

    let statements = role["Properties"]["Policies"][0]["PolicyDocument"]["Statement"]
        .as_array()
        .unwrap();
    assert_eq!(
        statements[0]["Resource"],
        "arn:aws:ssm:us-east-1:123456789012:parameter/app/db/password"
    );
    assert_eq!(
        statements[1]["Resource"],
        "arn:aws:ssm:us-east-1:123456789012:parameter/shared-config"
    );
    assert_eq!(statements[2]["Action"], "kms:Decrypt");
}

#[test]
fn test_synth_to_file() {
    let t = Test::with_config(APP_CONFIG);

    let output = t.run(&["synth", "--output", "template.json"]);
    assert_success(&output);
    assert_stdout_contains(&output, "template.json");

    let written = std::fs::read_to_string(t.path("template.json")).unwrap();
    let template: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert!(template["Resources"].is_object());
}

#[test]
fn test_synth_agnostic_stack_uses_pseudo_parameters() {
    let t = Test::with_config(
        r#"
[stack]
name = "Agnostic"

[[imports]]
id = "Ami"
name = "/aws/service/ami"
value_type = "AWS::EC2::Image::Id"

[[roles]]
id = "Reader"
assumed_by = "ec2.amazonaws.com"
read = ["Ami"]
"#,
    );

    let template = stdout_json(&t.synth());
    let parameters = template["Parameters"].as_object().unwrap();
    let ami = parameters.values().next().unwrap();
    assert_eq!(ami["Type"], "AWS::SSM::Parameter::Value<AWS::EC2::Image::Id>");
    assert_eq!(ami["Default"], "/aws/service/ami");

    let role = template["Resources"].as_object().unwrap().values().next().unwrap();
    let resource = &role["Properties"]["Policies"][0]["PolicyDocument"]["Statement"][0]["Resource"];
    let rendered = resource.to_string();
    assert!(rendered.contains("Fn::Join"));
    assert!(rendered.contains("AWS::Partition"));
    assert!(rendered.contains("AWS::AccountId"));
}

#[test]
fn test_synth_pattern_mismatch_fails() {
    let t = Test::with_config(PATTERN_MISMATCH_CONFIG);

    let output = t.synth();
    assert_failure(&output);
    assert_stderr_contains(&output, "does not match the allowed pattern");
}
