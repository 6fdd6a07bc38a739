//! Imported parameters.
//!
//! Imports reference parameters created outside the stack. They never
//! declare an `AWS::SSM::Parameter`; the value comes from one of:
//!
//! - a template parameter of type `AWS::SSM::Parameter::Value<...>`,
//!   resolved when the stack deploys
//! - a dynamic reference (`{{resolve:ssm:name:version}}` or
//!   `{{resolve:ssm-secure:name:version}}`)
//!
//! The `value_for_*` helpers deduplicate: importing the same name twice in
//! one stack reuses the first import.

use tracing::debug;

use super::{Parameter, ParameterKind, ParameterValueType};
use crate::core::arn::{arn_for_parameter_name, ArnSeparator};
use crate::core::constants::{DUMMY_VALUE_PREFIX, LIST_SEPARATOR, SSM_CONTEXT_PROVIDER};
use crate::core::context::ContextQuery;
use crate::core::identity::import_identity;
use crate::core::kms::Key;
use crate::core::stack::Stack;
use crate::core::template::TemplateParameter;
use crate::core::token::{self, DynamicReference, DynamicReferenceService, Token, Value};
use crate::core::validation;
use crate::error::{ConfigError, LookupError, Result};

/// Attributes of an existing String parameter.
#[derive(Debug, Clone)]
pub struct StringParameterAttributes {
    pub parameter_name: Value<String>,
    /// Pin a version. Switches the value to a dynamic reference.
    pub version: Option<u32>,
    pub value_type: ParameterValueType,
    /// Use a dynamic reference even without a version.
    pub force_dynamic_reference: bool,
    /// Overrides the ARN separator inferred from the name.
    pub simple_name: Option<bool>,
}

impl StringParameterAttributes {
    pub fn new(parameter_name: impl Into<Value<String>>) -> Self {
        Self {
            parameter_name: parameter_name.into(),
            version: None,
            value_type: ParameterValueType::String,
            force_dynamic_reference: false,
            simple_name: None,
        }
    }

    pub fn version(mut self, version: u32) -> Self {
        self.version = Some(version);
        self
    }

    pub fn value_type(mut self, value_type: ParameterValueType) -> Self {
        self.value_type = value_type;
        self
    }

    pub fn force_dynamic_reference(mut self) -> Self {
        self.force_dynamic_reference = true;
        self
    }

    pub fn simple_name(mut self, simple_name: bool) -> Self {
        self.simple_name = Some(simple_name);
        self
    }
}

/// Attributes of an existing SecureString parameter.
#[derive(Debug, Clone)]
pub struct SecureStringParameterAttributes {
    pub parameter_name: Value<String>,
    pub version: Option<u32>,
    /// Key the value is encrypted with. Grants extend to it.
    pub encryption_key: Option<Key>,
    /// Overrides the ARN separator inferred from the name.
    pub simple_name: Option<bool>,
}

impl SecureStringParameterAttributes {
    pub fn new(parameter_name: impl Into<Value<String>>) -> Self {
        Self {
            parameter_name: parameter_name.into(),
            version: None,
            encryption_key: None,
            simple_name: None,
        }
    }

    pub fn version(mut self, version: u32) -> Self {
        self.version = Some(version);
        self
    }

    pub fn encryption_key(mut self, key: Key) -> Self {
        self.encryption_key = Some(key);
        self
    }

    pub fn simple_name(mut self, simple_name: bool) -> Self {
        self.simple_name = Some(simple_name);
        self
    }
}

/// Where an imported value comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportSource {
    /// A template parameter, by logical ID.
    TemplateParameter { logical_id: String },
    /// A dynamic reference.
    DynamicReference(DynamicReference),
}

/// A read-only handle to an existing parameter.
#[derive(Debug, Clone)]
pub struct ImportedParameter {
    parameter_name: Value<String>,
    parameter_arn: Value<String>,
    kind: ParameterKind,
    source: ImportSource,
    encryption_key: Option<Key>,
}

impl ImportedParameter {
    /// Import a String parameter by name.
    ///
    /// The value resolves when the stack deploys, through a template
    /// parameter defaulting to `name`.
    pub fn from_string_parameter_name(
        stack: &mut Stack,
        id: &str,
        name: impl Into<Value<String>>,
    ) -> Result<Self> {
        Self::from_string_parameter_attributes(stack, id, StringParameterAttributes::new(name))
    }

    /// Import a String parameter with explicit attributes.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::EmptyName` or a `ValidationError` for a bad
    /// known name, `ConfigError::AmbiguousSeparator` for a deferred name
    /// without `simple_name`, and `ConfigError::DuplicateId` if `id` is
    /// taken. A deferred name without a version or forced dynamic reference
    /// fails with `ConfigError::DeferredTemplateDefault`.
    pub fn from_string_parameter_attributes(
        stack: &mut Stack,
        id: &str,
        attrs: StringParameterAttributes,
    ) -> Result<Self> {
        stack.ensure_unique_id(id)?;
        validation::validate_parameter_name(&attrs.parameter_name)?;
        let parameter_arn = arn_for_parameter_name(
            stack,
            &attrs.parameter_name,
            attrs.simple_name.map(ArnSeparator::from_simple_name),
        )?;

        let source = if attrs.version.is_some() || attrs.force_dynamic_reference {
            ImportSource::DynamicReference(DynamicReference::new(
                DynamicReferenceService::Ssm,
                reference_key(&attrs.parameter_name, attrs.version),
            ))
        } else {
            let default = template_default(&attrs.parameter_name)?;
            let logical_id = stack.add_template_parameter(
                id,
                TemplateParameter::new(attrs.value_type.template_parameter_type(), Some(default)),
            )?;
            ImportSource::TemplateParameter { logical_id }
        };

        Ok(Self::register(
            stack,
            id,
            Self {
                parameter_name: attrs.parameter_name,
                parameter_arn,
                kind: attrs.value_type.kind(),
                source,
                encryption_key: None,
            },
        ))
    }

    /// Import a SecureString parameter.
    ///
    /// The value is always a `ssm-secure` dynamic reference.
    ///
    /// # Errors
    ///
    /// Same as [`ImportedParameter::from_string_parameter_attributes`].
    pub fn from_secure_string_parameter_attributes(
        stack: &mut Stack,
        id: &str,
        attrs: SecureStringParameterAttributes,
    ) -> Result<Self> {
        stack.ensure_unique_id(id)?;
        validation::validate_parameter_name(&attrs.parameter_name)?;
        let parameter_arn = arn_for_parameter_name(
            stack,
            &attrs.parameter_name,
            attrs.simple_name.map(ArnSeparator::from_simple_name),
        )?;

        let source = ImportSource::DynamicReference(DynamicReference::new(
            DynamicReferenceService::SsmSecure,
            reference_key(&attrs.parameter_name, attrs.version),
        ));

        Ok(Self::register(
            stack,
            id,
            Self {
                parameter_name: attrs.parameter_name,
                parameter_arn,
                kind: ParameterKind::SecureString,
                source,
                encryption_key: attrs.encryption_key,
            },
        ))
    }

    /// Import a StringList parameter by name.
    pub fn from_string_list_parameter_name(
        stack: &mut Stack,
        id: &str,
        name: impl Into<Value<String>>,
    ) -> Result<Self> {
        let name = name.into();
        stack.ensure_unique_id(id)?;
        validation::validate_parameter_name(&name)?;
        let default = template_default(&name)?;
        let parameter_arn = arn_for_parameter_name(stack, &name, None)?;

        let logical_id = stack.add_template_parameter(
            id,
            TemplateParameter::new("AWS::SSM::Parameter::Value<List<String>>", Some(default)),
        )?;

        Ok(Self::register(
            stack,
            id,
            Self {
                parameter_name: name,
                parameter_arn,
                kind: ParameterKind::StringList,
                source: ImportSource::TemplateParameter { logical_id },
                encryption_key: None,
            },
        ))
    }

    fn register(stack: &mut Stack, id: &str, import: Self) -> Self {
        debug!(
            id,
            name = %import.parameter_name.display(),
            kind = %import.kind,
            "imported parameter"
        );
        stack.register_import(id, import.clone());
        import
    }

    pub fn source(&self) -> &ImportSource {
        &self.source
    }

    /// The value, as a deploy-time expression.
    ///
    /// For StringList imports this is the list value; use
    /// [`ImportedParameter::string_list_value`] to get it split.
    pub fn string_value(&self) -> Value<String> {
        match &self.source {
            ImportSource::TemplateParameter { logical_id } => {
                Value::Deferred(Token::Ref(logical_id.clone()))
            }
            ImportSource::DynamicReference(reference) => reference.to_value(),
        }
    }

    /// The value as a list, for StringList imports.
    pub fn string_list_value(&self) -> Option<Value<Vec<String>>> {
        if self.kind != ParameterKind::StringList {
            return None;
        }
        match &self.source {
            // A `List<String>` template parameter already resolves to a list.
            ImportSource::TemplateParameter { logical_id } => {
                Some(Value::Deferred(Token::Ref(logical_id.clone())))
            }
            ImportSource::DynamicReference(reference) => Some(Value::Deferred(Token::Split {
                delimiter: LIST_SEPARATOR.to_string(),
                source: Box::new(Token::Dynamic(reference.clone())),
            })),
        }
    }
}

impl Parameter for ImportedParameter {
    fn parameter_arn(&self) -> &Value<String> {
        &self.parameter_arn
    }

    fn parameter_name(&self) -> &Value<String> {
        &self.parameter_name
    }

    fn parameter_type(&self) -> ParameterKind {
        self.kind
    }

    fn encryption_key(&self) -> Option<&Key> {
        self.encryption_key.as_ref()
    }
}

fn reference_key(name: &Value<String>, version: Option<u32>) -> Value<String> {
    match version {
        Some(version) => token::join([name.clone(), Value::from(format!(":{}", version))]),
        None => name.clone(),
    }
}

/// Template parameter defaults are plain strings, so the name must be known.
fn template_default(name: &Value<String>) -> Result<String> {
    match name.known() {
        Some(name) => Ok(name.clone()),
        None => Err(ConfigError::DeferredTemplateDefault {
            name: name.display(),
        }
        .into()),
    }
}

/// Value of the String parameter `name`, imported at most once per stack.
pub fn value_for_string_parameter(
    stack: &mut Stack,
    name: impl Into<Value<String>>,
    version: Option<u32>,
) -> Result<Value<String>> {
    value_for_typed_string_parameter(stack, name, ParameterValueType::String, version)
}

/// Value of the typed String parameter `name`, imported at most once per
/// stack.
///
/// Deduplication is by name only: a later call with another type or
/// version returns the first import's value.
pub fn value_for_typed_string_parameter(
    stack: &mut Stack,
    name: impl Into<Value<String>>,
    value_type: ParameterValueType,
    version: Option<u32>,
) -> Result<Value<String>> {
    let name = name.into();
    let id = import_identity(&name);
    if let Some(existing) = stack.find_import(&id) {
        debug!(id = %id, "reusing imported parameter");
        return Ok(existing.string_value());
    }

    let mut attrs = StringParameterAttributes::new(name).value_type(value_type);
    attrs.version = version;
    Ok(ImportedParameter::from_string_parameter_attributes(stack, &id, attrs)?.string_value())
}

/// Value of the SecureString parameter `name` at `version`, imported at most
/// once per stack.
pub fn value_for_secure_string_parameter(
    stack: &mut Stack,
    name: impl Into<Value<String>>,
    version: u32,
) -> Result<Value<String>> {
    let name = name.into();
    let id = import_identity(&name);
    if let Some(existing) = stack.find_import(&id) {
        debug!(id = %id, "reusing imported parameter");
        return Ok(existing.string_value());
    }

    let attrs = SecureStringParameterAttributes::new(name).version(version);
    Ok(
        ImportedParameter::from_secure_string_parameter_attributes(stack, &id, attrs)?
            .string_value(),
    )
}

/// Read a parameter's current value while the stack is being defined.
///
/// Until the context provider has the value, returns `default` or
/// `dummy-value-for-{name}` and records the query as missing.
///
/// # Errors
///
/// Returns `LookupError::UnresolvedEnvironment` if the stack account or
/// region is not concrete.
pub fn value_from_lookup(stack: &mut Stack, name: &str, default: Option<&str>) -> Result<String> {
    let (account, region) = match (stack.account().known(), stack.region().known()) {
        (Some(account), Some(region)) => (account.clone(), region.clone()),
        (account, region) => {
            let missing = match (account, region) {
                (None, None) => "account and region",
                (None, Some(_)) => "account",
                _ => "region",
            };
            return Err(LookupError::UnresolvedEnvironment {
                name: name.to_string(),
                missing: missing.to_string(),
            }
            .into());
        }
    };

    let query = ContextQuery::new(SSM_CONTEXT_PROVIDER)
        .prop("account", account)
        .prop("parameterName", name)
        .prop("region", region);
    let dummy = default
        .map(str::to_string)
        .unwrap_or_else(|| format!("{}{}", DUMMY_VALUE_PREFIX, name));

    stack.context_value(query, dummy)
}
