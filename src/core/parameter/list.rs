//! Declared StringList parameters.
//!
//! The elements are stored as one comma-joined string, so no element may
//! contain a comma.

use serde_json::Value as Json;
use tracing::debug;

use super::{Parameter, ParameterKind, ParameterTier};
use crate::core::arn::{arn_for_parameter_name, ArnSeparator};
use crate::core::constants::{LIST_SEPARATOR, PARAMETER_RESOURCE_TYPE};
use crate::core::identity;
use crate::core::stack::Stack;
use crate::core::template::Resource;
use crate::core::token::{self, Token, Value};
use crate::core::validation;
use crate::error::{Result, ValidationError};

/// Properties of a [`StringListParameter`].
///
/// The list itself may be deferred, or be a known list whose elements are
/// individually known or deferred.
#[derive(Debug, Clone)]
pub struct StringListParameterProps {
    pub string_list_value: Value<Vec<Value<String>>>,
    /// Generated when omitted.
    pub parameter_name: Option<Value<String>>,
    pub allowed_pattern: Option<Value<String>>,
    pub description: Option<String>,
    pub tier: Option<ParameterTier>,
    /// Overrides the ARN separator inferred from the name.
    pub simple_name: Option<bool>,
}

impl StringListParameterProps {
    pub fn new<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value<String>>,
    {
        Self::from_value(Value::Known(values.into_iter().map(Into::into).collect()))
    }

    /// A list known only at deploy time.
    pub fn deferred(token: Token) -> Self {
        Self::from_value(Value::Deferred(token))
    }

    fn from_value(string_list_value: Value<Vec<Value<String>>>) -> Self {
        Self {
            string_list_value,
            parameter_name: None,
            allowed_pattern: None,
            description: None,
            tier: None,
            simple_name: None,
        }
    }

    pub fn name(mut self, name: impl Into<Value<String>>) -> Self {
        self.parameter_name = Some(name.into());
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

    pub fn simple_name(mut self, simple_name: bool) -> Self {
        self.simple_name = Some(simple_name);
        self
    }
}

/// A StringList parameter declared in a stack.
#[derive(Debug, Clone)]
pub struct StringListParameter {
    logical_id: String,
    parameter_name: Value<String>,
    parameter_arn: Value<String>,
    joined: Value<String>,
}

impl StringListParameter {
    /// Declare a StringList parameter.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::ListSeparator` if a known element contains
    /// a comma, `ValidationError::PatternMismatch` if a known element does
    /// not match the allowed pattern, and `ConfigError::DuplicateId` if `id`
    /// is taken.
    pub fn new(stack: &mut Stack, id: &str, props: StringListParameterProps) -> Result<Self> {
        stack.ensure_unique_id(id)?;

        if let Some(name) = &props.parameter_name {
            validation::validate_parameter_name(name)?;
        }

        let joined = match &props.string_list_value {
            Value::Known(elements) => {
                if elements.is_empty() {
                    return Err(ValidationError::EmptyValue(id.to_string()).into());
                }
                validation::validate_list_elements(elements, props.allowed_pattern.as_ref())?;
                token::join_with(&LIST_SEPARATOR.to_string(), elements)
            }
            Value::Deferred(list) => Value::Deferred(Token::JoinList {
                delimiter: LIST_SEPARATOR.to_string(),
                list: Box::new(list.clone()),
            }),
        };
        validation::validate_value_length(&joined, props.tier.unwrap_or_default())?;

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
            .property("Type", Json::from(ParameterKind::StringList.as_str()))
            .property("Value", joined.to_json())
            .property("Name", parameter_name.to_json())
            .optional_property(
                "AllowedPattern",
                props.allowed_pattern.as_ref().map(|p| p.to_json()),
            )
            .optional_property("Description", props.description.map(Json::String))
            .optional_property("Tier", props.tier.map(|t| Json::from(t.as_str())));

        let logical_id = stack.add_resource(id, resource)?;

        debug!(
            id,
            name = %parameter_name.display(),
            arn = %parameter_arn.display(),
            "declared string list parameter"
        );

        Ok(Self {
            logical_id,
            parameter_name,
            parameter_arn,
            joined,
        })
    }

    pub fn logical_id(&self) -> &str {
        &self.logical_id
    }

    /// The comma-joined value as stored.
    pub fn string_value(&self) -> &Value<String> {
        &self.joined
    }

    /// The list value.
    ///
    /// Split from the joined value when it is known, otherwise an
    /// `Fn::Split` over the resource's `Value` attribute.
    pub fn string_list_value(&self) -> Value<Vec<String>> {
        match self.values() {
            Some(values) => Value::Known(values.map(str::to_string).collect()),
            None => Value::Deferred(Token::Split {
                delimiter: LIST_SEPARATOR.to_string(),
                source: Box::new(Token::GetAtt {
                    logical_id: self.logical_id.clone(),
                    attribute: "Value".to_string(),
                }),
            }),
        }
    }

    /// Iterate the known elements. Each call splits afresh.
    pub fn values(&self) -> Option<impl Iterator<Item = &str> + '_> {
        self.joined.known().map(|joined| joined.split(LIST_SEPARATOR))
    }
}

impl Parameter for StringListParameter {
    fn parameter_arn(&self) -> &Value<String> {
        &self.parameter_arn
    }

    fn parameter_name(&self) -> &Value<String> {
        &self.parameter_name
    }

    fn parameter_type(&self) -> ParameterKind {
        ParameterKind::StringList
    }
}
