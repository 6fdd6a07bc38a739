//! SSM parameters.
//!
//! Three parameter shapes share one capability surface, the [`Parameter`]
//! trait:
//!
//! - [`StringParameter`]: declared String (or typed String) parameter
//! - [`StringListParameter`]: declared StringList parameter
//! - [`ImportedParameter`]: read-only handle to an existing parameter
//!
//! [`AnyParameter`] sums them when callers need to hold a mix.

mod import;
mod list;
mod string;

pub use import::{
    value_for_secure_string_parameter, value_for_string_parameter,
    value_for_typed_string_parameter, value_from_lookup, ImportSource, ImportedParameter,
    SecureStringParameterAttributes, StringParameterAttributes,
};
pub use list::{StringListParameter, StringListParameterProps};
pub use string::{StringParameter, StringParameterProps};

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::constants::{
    ADVANCED_VALUE_LIMIT, READ_ACTIONS, STANDARD_VALUE_LIMIT, WRITE_ACTIONS,
};
use crate::core::iam::{Grant, Grantable};
use crate::core::kms::{EncryptionKey, Key};
use crate::core::token::Value;

/// Kind of a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ParameterKind {
    String,
    SecureString,
    StringList,
    Ec2ImageId,
}

impl ParameterKind {
    /// CloudFormation `Type` value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "String",
            Self::SecureString => "SecureString",
            Self::StringList => "StringList",
            Self::Ec2ImageId => "AWS::EC2::Image::Id",
        }
    }
}

impl fmt::Display for ParameterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Type of a String value referenced through a template parameter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParameterValueType {
    #[default]
    #[serde(rename = "String")]
    String,
    #[serde(rename = "AWS::EC2::AvailabilityZone::Name")]
    AvailabilityZoneName,
    #[serde(rename = "AWS::EC2::Image::Id")]
    ImageId,
    #[serde(rename = "AWS::EC2::Instance::Id")]
    InstanceId,
    #[serde(rename = "AWS::EC2::KeyPair::KeyName")]
    KeyPairName,
    #[serde(rename = "AWS::EC2::SecurityGroup::GroupName")]
    SecurityGroupName,
    #[serde(rename = "AWS::EC2::SecurityGroup::Id")]
    SecurityGroupId,
    #[serde(rename = "AWS::EC2::Subnet::Id")]
    SubnetId,
    #[serde(rename = "AWS::EC2::Volume::Id")]
    VolumeId,
    #[serde(rename = "AWS::EC2::VPC::Id")]
    VpcId,
    #[serde(rename = "AWS::Route53::HostedZone::Id")]
    HostedZoneId,
}

impl ParameterValueType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "String",
            Self::AvailabilityZoneName => "AWS::EC2::AvailabilityZone::Name",
            Self::ImageId => "AWS::EC2::Image::Id",
            Self::InstanceId => "AWS::EC2::Instance::Id",
            Self::KeyPairName => "AWS::EC2::KeyPair::KeyName",
            Self::SecurityGroupName => "AWS::EC2::SecurityGroup::GroupName",
            Self::SecurityGroupId => "AWS::EC2::SecurityGroup::Id",
            Self::SubnetId => "AWS::EC2::Subnet::Id",
            Self::VolumeId => "AWS::EC2::Volume::Id",
            Self::VpcId => "AWS::EC2::VPC::Id",
            Self::HostedZoneId => "AWS::Route53::HostedZone::Id",
        }
    }

    /// Kind of the parameter holding a value of this type.
    pub fn kind(&self) -> ParameterKind {
        match self {
            Self::ImageId => ParameterKind::Ec2ImageId,
            _ => ParameterKind::String,
        }
    }

    /// CloudFormation template parameter type for an SSM reference.
    pub fn template_parameter_type(&self) -> String {
        format!("AWS::SSM::Parameter::Value<{}>", self.as_str())
    }
}

/// Storage tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ParameterTier {
    #[default]
    Standard,
    Advanced,
    IntelligentTiering,
}

impl ParameterTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "Standard",
            Self::Advanced => "Advanced",
            Self::IntelligentTiering => "Intelligent-Tiering",
        }
    }

    /// Maximum value length in characters.
    pub fn value_limit(&self) -> usize {
        match self {
            Self::Standard => STANDARD_VALUE_LIMIT,
            Self::Advanced | Self::IntelligentTiering => ADVANCED_VALUE_LIMIT,
        }
    }
}

/// Data type of a String parameter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ParameterDataType {
    #[default]
    Text,
    AwsEc2Image,
}

impl ParameterDataType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::AwsEc2Image => "aws:ec2:image",
        }
    }
}

/// Capabilities shared by every parameter.
pub trait Parameter {
    fn parameter_arn(&self) -> &Value<String>;

    fn parameter_name(&self) -> &Value<String>;

    fn parameter_type(&self) -> ParameterKind;

    /// Key protecting the value, for SecureString parameters.
    fn encryption_key(&self) -> Option<&Key> {
        None
    }

    /// Allow the grantee to read this parameter, and decrypt it if keyed.
    fn grant_read(&self, grantee: &mut dyn Grantable) -> Grant {
        let grant =
            Grant::add_to_principal(grantee, READ_ACTIONS, vec![self.parameter_arn().clone()]);
        match self.encryption_key() {
            Some(key) => grant.combine(key.grant_decrypt(grantee)),
            None => grant,
        }
    }

    /// Allow the grantee to write this parameter, and encrypt it if keyed.
    fn grant_write(&self, grantee: &mut dyn Grantable) -> Grant {
        let grant =
            Grant::add_to_principal(grantee, WRITE_ACTIONS, vec![self.parameter_arn().clone()]);
        match self.encryption_key() {
            Some(key) => grant.combine(key.grant_encrypt(grantee)),
            None => grant,
        }
    }
}

/// Any parameter shape.
#[derive(Debug, Clone)]
pub enum AnyParameter {
    String(StringParameter),
    StringList(StringListParameter),
    Imported(ImportedParameter),
}

impl AnyParameter {
    fn inner(&self) -> &dyn Parameter {
        match self {
            Self::String(p) => p,
            Self::StringList(p) => p,
            Self::Imported(p) => p,
        }
    }

    /// Whether the parameter is declared by this stack.
    pub fn is_declared(&self) -> bool {
        !matches!(self, Self::Imported(_))
    }
}

impl Parameter for AnyParameter {
    fn parameter_arn(&self) -> &Value<String> {
        self.inner().parameter_arn()
    }

    fn parameter_name(&self) -> &Value<String> {
        self.inner().parameter_name()
    }

    fn parameter_type(&self) -> ParameterKind {
        self.inner().parameter_type()
    }

    fn encryption_key(&self) -> Option<&Key> {
        self.inner().encryption_key()
    }
}

impl From<StringParameter> for AnyParameter {
    fn from(p: StringParameter) -> Self {
        Self::String(p)
    }
}

impl From<StringListParameter> for AnyParameter {
    fn from(p: StringListParameter) -> Self {
        Self::StringList(p)
    }
}

impl From<ImportedParameter> for AnyParameter {
    fn from(p: ImportedParameter) -> Self {
        Self::Imported(p)
    }
}
