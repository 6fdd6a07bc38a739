//! Configuration file management.
//!
//! Handles reading, writing, and validating `paramstore.toml` project files.

use std::collections::BTreeSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::parameter::{ParameterDataType, ParameterTier, ParameterValueType};
use crate::error::{ConfigError, Result};

/// Project configuration stored in `paramstore.toml`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// The stack every entry is declared into
    pub stack: StackConfig,
    /// Parameters declared by the stack
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<ParameterConfig>,
    /// Existing parameters referenced by the stack
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub imports: Vec<ImportConfig>,
    /// Roles granted access to parameters
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub roles: Vec<RoleConfig>,
}

/// Stack section.
///
/// Unset account, region or partition resolve at deploy time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StackConfig {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partition: Option<String>,
}

/// Declared parameter kind in config files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeclaredKind {
    #[default]
    String,
    StringList,
}

/// A `[[parameters]]` entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParameterConfig {
    pub id: String,
    #[serde(default)]
    pub kind: DeclaredKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Value of a `string` parameter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Elements of a `string-list` parameter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_pattern: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tier: Option<ParameterTier>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_type: Option<ParameterDataType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub simple_name: Option<bool>,
}

/// An `[[imports]]` entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportConfig {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u32>,
    #[serde(default)]
    pub secure: bool,
    #[serde(default)]
    pub list: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_type: Option<ParameterValueType>,
    /// KMS key of a secure import
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_arn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub simple_name: Option<bool>,
}

/// A `[[roles]]` entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleConfig {
    pub id: String,
    /// Service principal, e.g. `lambda.amazonaws.com`
    pub assumed_by: String,
    /// Parameter or import ids to grant read on
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub read: Vec<String>,
    /// Parameter or import ids to grant write on
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub write: Vec<String>,
}

impl ImportConfig {
    fn validate(&self) -> Result<()> {
        let conflict = if self.secure && self.list {
            Some("cannot be both `secure` and `list`")
        } else if self.secure && self.value_type.is_some() {
            Some("sets `value_type`, which secure imports do not take")
        } else if !self.secure && self.key_arn.is_some() {
            Some("sets `key_arn` but is not `secure`")
        } else {
            None
        };

        match conflict {
            Some(reason) => Err(ConfigError::ConflictingImport {
                id: self.id.clone(),
                reason: reason.to_string(),
            }
            .into()),
            None => Ok(()),
        }
    }
}

impl Config {
    /// Create a configuration with an empty stack.
    pub fn new(stack_name: &str) -> Self {
        Self {
            stack: StackConfig {
                name: stack_name.to_string(),
                account: None,
                region: None,
                partition: None,
            },
            parameters: Vec::new(),
            imports: Vec::new(),
            roles: Vec::new(),
        }
    }

    /// Load configuration from `path`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotInitialized` if the file doesn't exist,
    /// or `ConfigError::Parse` if the TOML is malformed.
    pub fn load(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading config");

        if !path.exists() {
            return Err(ConfigError::NotInitialized(path.display().to_string()).into());
        }
        let contents = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let config = Self::parse(&contents)?;

        debug!(
            parameters = config.parameters.len(),
            imports = config.imports.len(),
            roles = config.roles.len(),
            "config loaded"
        );

        Ok(config)
    }

    /// Parse and validate configuration text.
    pub fn parse(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to `path`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Serialize` if the config cannot be rendered.
    pub fn save(&self, path: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        std::fs::write(path, contents)?;
        debug!(path = %path.display(), "config saved");
        Ok(())
    }

    /// Structural checks the declarations cannot make on their own.
    ///
    /// - The stack name is non-empty and uses only letters, digits and `-`
    /// - Every id is unique across parameters, imports and roles
    /// - Each parameter carries the value field its kind needs
    /// - Import options agree with the kind of import
    /// - Role grants name existing parameter or import ids
    pub fn validate(&self) -> Result<()> {
        let name = &self.stack.name;
        if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            return Err(ConfigError::InvalidStackName(name.clone()).into());
        }

        let mut ids = BTreeSet::new();
        let all_ids = self
            .parameters
            .iter()
            .map(|p| &p.id)
            .chain(self.imports.iter().map(|i| &i.id))
            .chain(self.roles.iter().map(|r| &r.id));
        for id in all_ids {
            if !ids.insert(id.as_str()) {
                return Err(ConfigError::DuplicateId(id.clone()).into());
            }
        }

        for parameter in &self.parameters {
            let (needed, present) = match parameter.kind {
                DeclaredKind::String => ("value", parameter.value.is_some()),
                DeclaredKind::StringList => ("values", parameter.values.is_some()),
            };
            if !present {
                return Err(ConfigError::MissingValue {
                    id: parameter.id.clone(),
                    field: needed.to_string(),
                }
                .into());
            }
        }

        for import in &self.imports {
            import.validate()?;
        }

        let grantable: BTreeSet<&str> = self
            .parameters
            .iter()
            .map(|p| p.id.as_str())
            .chain(self.imports.iter().map(|i| i.id.as_str()))
            .collect();
        for role in &self.roles {
            for target in role.read.iter().chain(role.write.iter()) {
                if !grantable.contains(target.as_str()) {
                    return Err(ConfigError::UnknownParameter(target.clone()).into());
                }
            }
        }

        Ok(())
    }
}
