//! CloudFormation template model.
//!
//! The stack collects resources and template parameters here and renders
//! them to JSON with serde.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{Map, Value as Json};

use crate::core::constants::TEMPLATE_FORMAT_VERSION;

/// A resource entry in the `Resources` section.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resource {
    #[serde(rename = "Type")]
    resource_type: String,
    #[serde(rename = "Properties", skip_serializing_if = "Map::is_empty")]
    properties: Map<String, Json>,
}

impl Resource {
    pub fn new(resource_type: impl Into<String>) -> Self {
        Self {
            resource_type: resource_type.into(),
            properties: Map::new(),
        }
    }

    /// Set a property. Later calls overwrite earlier ones.
    pub fn property(mut self, key: &str, value: Json) -> Self {
        self.properties.insert(key.to_string(), value);
        self
    }

    /// Set a property only when a value is present.
    pub fn optional_property(self, key: &str, value: Option<Json>) -> Self {
        match value {
            Some(v) => self.property(key, v),
            None => self,
        }
    }

    pub fn resource_type(&self) -> &str {
        &self.resource_type
    }

    pub fn properties(&self) -> &Map<String, Json> {
        &self.properties
    }

    pub fn get(&self, key: &str) -> Option<&Json> {
        self.properties.get(key)
    }
}

/// An entry in the `Parameters` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateParameter {
    #[serde(rename = "Type")]
    parameter_type: String,
    #[serde(rename = "Default", skip_serializing_if = "Option::is_none")]
    default: Option<String>,
}

impl TemplateParameter {
    pub fn new(parameter_type: impl Into<String>, default: Option<String>) -> Self {
        Self {
            parameter_type: parameter_type.into(),
            default,
        }
    }

    pub fn parameter_type(&self) -> &str {
        &self.parameter_type
    }

    pub fn default(&self) -> Option<&str> {
        self.default.as_deref()
    }
}

/// A synthesized template.
#[derive(Debug, Clone, Serialize)]
pub struct Template {
    #[serde(rename = "AWSTemplateFormatVersion")]
    format_version: &'static str,
    #[serde(rename = "Parameters", skip_serializing_if = "BTreeMap::is_empty")]
    parameters: BTreeMap<String, TemplateParameter>,
    #[serde(rename = "Resources")]
    resources: BTreeMap<String, Resource>,
}

impl Template {
    pub fn new(
        parameters: BTreeMap<String, TemplateParameter>,
        resources: BTreeMap<String, Resource>,
    ) -> Self {
        Self {
            format_version: TEMPLATE_FORMAT_VERSION,
            parameters,
            resources,
        }
    }

    pub fn parameters(&self) -> &BTreeMap<String, TemplateParameter> {
        &self.parameters
    }

    pub fn resources(&self) -> &BTreeMap<String, Resource> {
        &self.resources
    }

    /// Resources of the given type, keyed by logical ID.
    pub fn resources_of_type<'a>(
        &'a self,
        resource_type: &'a str,
    ) -> impl Iterator<Item = (&'a String, &'a Resource)> + 'a {
        self.resources
            .iter()
            .filter(move |(_, r)| r.resource_type() == resource_type)
    }

    pub fn to_json(&self) -> Json {
        // Only string keys and JSON values, serialization cannot fail.
        serde_json::to_value(self).unwrap_or(Json::Null)
    }

    pub fn to_json_pretty(&self) -> crate::error::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
