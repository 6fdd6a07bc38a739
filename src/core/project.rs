//! The primary interface for config-driven operations.
//!
//! A [`Project`] loads `paramstore.toml`, declares everything it describes
//! into a [`Stack`] and keeps the resulting handles by id.

use std::collections::BTreeMap;
use std::path::Path;

use tracing::debug;

use crate::core::config::{Config, DeclaredKind, ImportConfig, ParameterConfig};
use crate::core::context::{ContextProvider, StaticContext};
use crate::core::iam::Role;
use crate::core::kms::Key;
use crate::core::parameter::{
    AnyParameter, ImportedParameter, Parameter, SecureStringParameterAttributes,
    StringListParameter, StringListParameterProps, StringParameter, StringParameterAttributes,
    StringParameterProps,
};
use crate::core::stack::{Environment, Stack};
use crate::core::template::Template;
use crate::error::{ConfigError, Result};

/// A stack built from configuration.
pub struct Project {
    config: Config,
    stack: Stack,
    parameters: BTreeMap<String, AnyParameter>,
    roles: BTreeMap<String, Role>,
}

impl std::fmt::Debug for Project {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Project")
            .field("stack", &self.stack)
            .field("parameters", &self.parameters.keys().collect::<Vec<_>>())
            .field("roles", &self.roles.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl Project {
    /// Load `config_path` and build its stack, with context from
    /// `context_path` when the file exists.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotInitialized` if the config file is missing,
    /// or any error raised while declaring its entries.
    pub fn open(config_path: &Path, context_path: &Path) -> Result<Self> {
        let config = Config::load(config_path)?;
        let context = StaticContext::load(context_path)?;
        Self::build(config, Box::new(context))
    }

    /// Declare every entry of `config` into a fresh stack.
    pub fn build(config: Config, context: Box<dyn ContextProvider>) -> Result<Self> {
        let env = Environment::new(
            config.stack.account.clone(),
            config.stack.region.clone(),
            config.stack.partition.clone(),
        );
        let mut stack = Stack::with_context(config.stack.name.clone(), env, context);
        let mut parameters = BTreeMap::new();

        for entry in &config.parameters {
            let parameter = declare(&mut stack, entry)?;
            parameters.insert(entry.id.clone(), parameter);
        }

        for entry in &config.imports {
            let parameter = import(&mut stack, entry)?;
            parameters.insert(entry.id.clone(), AnyParameter::Imported(parameter));
        }

        let mut roles = BTreeMap::new();
        for entry in &config.roles {
            let mut role = Role::new(entry.id.clone(), entry.assumed_by.clone());
            for target in &entry.read {
                lookup(&parameters, target)?.grant_read(&mut role);
            }
            for target in &entry.write {
                lookup(&parameters, target)?.grant_write(&mut role);
            }
            stack.add_role(&role)?;
            roles.insert(entry.id.clone(), role);
        }

        debug!(
            parameters = parameters.len(),
            roles = roles.len(),
            "project built"
        );

        Ok(Self {
            config,
            stack,
            parameters,
            roles,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn stack(&self) -> &Stack {
        &self.stack
    }

    pub fn stack_mut(&mut self) -> &mut Stack {
        &mut self.stack
    }

    /// Declared and imported parameters by id.
    pub fn parameters(&self) -> &BTreeMap<String, AnyParameter> {
        &self.parameters
    }

    pub fn parameter(&self, id: &str) -> Option<&AnyParameter> {
        self.parameters.get(id)
    }

    pub fn roles(&self) -> &BTreeMap<String, Role> {
        &self.roles
    }

    pub fn synth(&self) -> Template {
        self.stack.synth()
    }
}

fn lookup<'a>(parameters: &'a BTreeMap<String, AnyParameter>, id: &str) -> Result<&'a AnyParameter> {
    parameters
        .get(id)
        .ok_or_else(|| ConfigError::UnknownParameter(id.to_string()).into())
}

fn declare(stack: &mut Stack, entry: &ParameterConfig) -> Result<AnyParameter> {
    match entry.kind {
        DeclaredKind::String => {
            let value = entry.value.clone().ok_or_else(|| ConfigError::MissingValue {
                id: entry.id.clone(),
                field: "value".to_string(),
            })?;
            let mut props = StringParameterProps::new(value);
            props.parameter_name = entry.name.clone().map(Into::into);
            props.allowed_pattern = entry.allowed_pattern.clone().map(Into::into);
            props.description = entry.description.clone();
            props.tier = entry.tier;
            props.data_type = entry.data_type;
            props.simple_name = entry.simple_name;
            Ok(StringParameter::new(stack, &entry.id, props)?.into())
        }
        DeclaredKind::StringList => {
            let values = entry.values.clone().ok_or_else(|| ConfigError::MissingValue {
                id: entry.id.clone(),
                field: "values".to_string(),
            })?;
            let mut props = StringListParameterProps::new(values);
            props.parameter_name = entry.name.clone().map(Into::into);
            props.allowed_pattern = entry.allowed_pattern.clone().map(Into::into);
            props.description = entry.description.clone();
            props.tier = entry.tier;
            props.simple_name = entry.simple_name;
            Ok(StringListParameter::new(stack, &entry.id, props)?.into())
        }
    }
}

fn import(stack: &mut Stack, entry: &ImportConfig) -> Result<ImportedParameter> {
    if entry.secure {
        let mut attrs = SecureStringParameterAttributes::new(entry.name.clone());
        attrs.version = entry.version;
        attrs.encryption_key = entry.key_arn.clone().map(Key::from_key_arn);
        attrs.simple_name = entry.simple_name;
        return ImportedParameter::from_secure_string_parameter_attributes(stack, &entry.id, attrs);
    }

    if entry.list {
        return ImportedParameter::from_string_list_parameter_name(
            stack,
            &entry.id,
            entry.name.clone(),
        );
    }

    let mut attrs = StringParameterAttributes::new(entry.name.clone());
    attrs.version = entry.version;
    attrs.value_type = entry.value_type.unwrap_or_default();
    attrs.simple_name = entry.simple_name;
    ImportedParameter::from_string_parameter_attributes(stack, &entry.id, attrs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::parameter::ParameterKind;

    const SAMPLE: &str = r#"
[stack]
name = "AppStack"
account = "123456789012"
region = "us-east-1"
partition = "aws"

[[parameters]]
id = "DbPassword"
name = "/app/db/password"
value = "hunter2"

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

    fn project() -> Project {
        Project::build(Config::parse(SAMPLE).unwrap(), Box::new(StaticContext::new())).unwrap()
    }

    #[test]
    fn test_build_declares_everything() {
        let project = project();
        assert_eq!(project.parameters().len(), 2);
        assert!(project.parameter("DbPassword").unwrap().is_declared());
        assert_eq!(
            project.parameter("Shared").unwrap().parameter_type(),
            ParameterKind::SecureString
        );
    }

    #[test]
    fn test_role_statements() {
        let project = project();
        let role = &project.roles()["AppRole"];
        // read on DbPassword, read + decrypt on Shared, write on DbPassword
        assert_eq!(role.policy().statements().len(), 4);
        assert_eq!(role.policy().statements()[2].actions(), ["kms:Decrypt".to_string()]);
    }

    #[test]
    fn test_synth_contains_role_and_parameter() {
        let template = project().synth();
        assert_eq!(template.resources_of_type("AWS::SSM::Parameter").count(), 1);
        assert_eq!(template.resources_of_type("AWS::IAM::Role").count(), 1);
    }
}
