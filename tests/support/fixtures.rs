//! Test fixtures and constants.

/// A project with one declared parameter, one secure import and a role.
pub const APP_CONFIG: &str = r#"
[stack]
name = "AppStack"
account = "123456789012"
region = "us-east-1"
partition = "aws"

[[parameters]]
id = "DbPassword"
name = "/app/db/password"
value = "hunter2"

[[parameters]]
id = "Zones"
kind = "string-list"
name = "zones"
values = ["a", "b", "c"]

[[imports]]
id = "Shared"
name = "shared-config"
version = 3
secure = true
key_arn = "arn:aws:kms:us-east-1:123456789012:key/abc"

[[roles]]
id = "AppRole"
assumed_by = "lambda.amazonaws.com"
read = ["DbPassword", "Shared"]
write = ["DbPassword"]
"#;

/// A project without account, region or partition.
pub const AGNOSTIC_CONFIG: &str = r#"
[stack]
name = "Agnostic"

[[parameters]]
id = "Plain"
name = "plain"
value = "x"
"#;

/// A project whose only declaration breaks its allowed pattern.
pub const PATTERN_MISMATCH_CONFIG: &str = r#"
[stack]
name = "Bad"

[[parameters]]
id = "Port"
value = "abc"
allowed_pattern = "^\\d+$"
"#;

/// Every SSM read action.
pub const READ_ACTIONS: &[&str] = &[
    "ssm:DescribeParameters",
    "ssm:GetParameters",
    "ssm:GetParameter",
    "ssm:GetParameterHistory",
];

/// Account used by concrete test stacks.
pub const ACCOUNT: &str = "123456789012";
