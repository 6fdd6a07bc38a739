//! Declared String parameters.

use serde_json::Value as Json;
use tracing::debug;

use super::{Parameter, ParameterDataType, ParameterKind, ParameterTier};
use crate::core::arn::{arn_for_parameter_name, ArnSeparator};
use crate::core::constants::PARAMETER_RESOURCE_TYPE;
use crate::core::identity;
use crate::core::stack::Stack;
use crate::core::template::Resource;
use crate::core::token::{Token, Value};
use crate::core::validation;
use crate::error::{ConfigError, Result};

/// Properties of a [`StringParameter`].
#[derive(Debug, Clone)]
pub struct StringParameterProps {
    pub string_value: Value<String>,
    /// Generated when omitted.
    pub parameter_name: Option<Value<String>>,
    /// `String` unless set to a typed kind such as `Ec2ImageId`.
    pub kind: ParameterKind,
    pub allowed_pattern: Option<Value<String>>,
    pub description: Option<String>,
    pub tier: Option<ParameterTier>,
    pub data_type: Option<ParameterDataType>,
    /// Overrides the ARN separator inferred from the name.
    pub simple_name: Option<bool>,
}

impl StringParameterProps {
    pub fn new(string_value: impl Into<Value<String>>) -> Self {
        Self {
            string_value: string_value.into(),
            parameter_name: None,
            kind: ParameterKind::String,
            allowed_pattern: None,
            description: None,
            tier: None,
            data_type: None,
            simple_name: None,
        }
    }

    pub fn name(mut self, name: impl Into<Value<String>>) -> Self {
        self.parameter_name = Some(name.into());
        self
    }

    pub fn kind(mut self, kind: ParameterKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn allowed_pattern(mut self, pattern: impl Into<Value<String>>) -> Self {
        self.allowed_pattern = Some(pattern.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn tier(mut self, tier: ParameterTier) -> Self {
        self.tier = Some(tier);
        self
    }

    pub fn data_type(mut self, data_type: ParameterDataType) -> Self {
        self.data_type = Some(data_type);
        self
    }

    pub fn simple_name(mut self, simple_name: bool) -> Self {
        self.simple_name = Some(simple_name);
        self
    }
}

/// A String parameter declared in a stack.
#[derive(Debug, Clone)]
pub struct StringParameter {
    logical_id: String,
    parameter_name: Value<String>,
    parameter_arn: Value<String>,
    kind: ParameterKind,
    string_value: Value<String>,
}

impl StringParameter {
    /// Declare a String parameter.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::UnsupportedKind` for SecureString or
    /// StringList kinds, a `ValidationError` when the name or a known value
    /// breaks a rule, and `ConfigError::DuplicateId` if `id` is taken.
    pub fn new(stack: &mut Stack, id: &str, props: StringParameterProps) -> Result<Self> {
        match props.kind {
            ParameterKind::String | ParameterKind::Ec2ImageId => {}
            ParameterKind::SecureString => {
                return Err(ConfigError::UnsupportedKind {
                    kind: props.kind.to_string(),
                    reason: "CloudFormation cannot create SecureString parameters, import them \
                             with from_secure_string_parameter_attributes"
                        .to_string(),
                }
                .into())
            }
            ParameterKind::StringList => {
                return Err(ConfigError::UnsupportedKind {
                    kind: props.kind.to_string(),
                    reason: "use StringListParameter".to_string(),
                }
                .into())
            }
        }

        stack.ensure_unique_id(id)?;

        if let Some(name) = &props.parameter_name {
            validation::validate_parameter_name(name)?;
        }
        validation::validate_value_not_empty(id, &props.string_value)?;
        validation::validate_value_length(&props.string_value, props.tier.unwrap_or_default())?;
        validation::validate_allowed_pattern(&props.string_value, props.allowed_pattern.as_ref())?;

        let parameter_name = props
            .parameter_name
            .clone()
            .unwrap_or_else(|| Value::Known(identity::generated_name(stack.name(), id)));
        let parameter_arn = arn_for_parameter_name(
            stack,
            &parameter_name,
            props.simple_name.map(ArnSeparator::from_simple_name),
        )?;

        let resource = Resource::new(PARAMETER_RESOURCE_TYPE)
            .property("Type", Json::String(props.kind.as_str().to_string()))
            .property("Value", props.string_value.to_json())
            .property("Name", parameter_name.to_json())
            .optional_property(
                "AllowedPattern",
                props.allowed_pattern.as_ref().map(|p| p.to_json()),
            )
            .optional_property("Description", props.description.map(Json::String))
            .optional_property("Tier", props.tier.map(|t| Json::from(t.as_str())))
            .optional_property("DataType", props.data_type.map(|d| Json::from(d.as_str())));

        let logical_id = stack.add_resource(id, resource)?;

        debug!(
            id,
            name = %parameter_name.display(),
            arn = %parameter_arn.display(),
            "declared string parameter"
        );

        Ok(Self {
            logical_id,
            parameter_name,
            parameter_arn,
            kind: props.kind,
            string_value: props.string_value,
        })
    }

    pub fn logical_id(&self) -> &str {
        &self.logical_id
    }

    /// The parameter value.
    ///
    /// Known when declared with a literal, otherwise the resource's `Value`
    /// attribute.
    pub fn string_value(&self) -> Value<String> {
        match &self.string_value {
            Value::Known(v) => Value::Known(v.clone()),
            Value::Deferred(_) => Value::Deferred(Token::GetAtt {
                logical_id: self.logical_id.clone(),
                attribute: "Value".to_string(),
            }),
        }
    }
}

impl Parameter for StringParameter {
    fn parameter_arn(&self) -> &Value<String> {
        &self.parameter_arn
    }

    fn parameter_name(&self) -> &Value<String> {
        &self.parameter_name
    }

    fn parameter_type(&self) -> ParameterKind {
        self.kind
    }
}
