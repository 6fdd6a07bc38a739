//! Constants used throughout paramstore.
//!
//! Centralizes magic strings and configuration values.

/// Project configuration file name.
pub const CONFIG_FILE: &str = "paramstore.toml";

/// Cached context values consulted by lookups.
pub const CONTEXT_FILE: &str = "paramstore.context.json";

/// CloudFormation resource type of a parameter.
pub const PARAMETER_RESOURCE_TYPE: &str = "AWS::SSM::Parameter";

/// CloudFormation resource type of an IAM role.
pub const ROLE_RESOURCE_TYPE: &str = "AWS::IAM::Role";

/// Separator between StringList elements.
pub const LIST_SEPARATOR: char = ',';

/// Namespace prefix of deduplicated import identities.
pub const IMPORT_IDENTITY_NAMESPACE: &str = "SsmParameterValue";

/// Fixed suffix of deduplicated import identities.
///
/// Changing it changes every logical ID derived from an import.
pub const IMPORT_IDENTITY_VERSION: &str = "C96584B6-F00A-464E-AD19-53AFF4B05118";

/// Context provider name for parameter lookups.
pub const SSM_CONTEXT_PROVIDER: &str = "ssm";

/// Prefix of the value returned by a lookup that has not resolved yet.
pub const DUMMY_VALUE_PREFIX: &str = "dummy-value-for-";

/// Maximum length of a parameter name.
pub const MAX_NAME_LENGTH: usize = 2048;

/// Maximum value length of a Standard tier parameter.
pub const STANDARD_VALUE_LIMIT: usize = 4096;

/// Maximum value length of an Advanced tier parameter.
pub const ADVANCED_VALUE_LIMIT: usize = 8192;

/// SSM actions granted by a read grant.
pub const READ_ACTIONS: &[&str] = &[
    "ssm:DescribeParameters",
    "ssm:GetParameters",
    "ssm:GetParameter",
    "ssm:GetParameterHistory",
];

/// SSM actions granted by a write grant.
pub const WRITE_ACTIONS: &[&str] = &["ssm:PutParameter"];

/// KMS actions granted by a decrypt grant.
pub const KMS_DECRYPT_ACTIONS: &[&str] = &["kms:Decrypt"];

/// KMS actions granted by an encrypt grant.
pub const KMS_ENCRYPT_ACTIONS: &[&str] = &["kms:Encrypt", "kms:ReEncrypt*", "kms:GenerateDataKey*"];

/// IAM policy language version.
pub const POLICY_VERSION: &str = "2012-10-17";

/// CloudFormation template format version.
pub const TEMPLATE_FORMAT_VERSION: &str = "2010-09-09";
