//! The deployment unit.
//!
//! A [`Stack`] owns everything declared into it: resources, template
//! parameters, the registry of imported parameters and the context provider
//! used for lookups. It also supplies the ARN prefix for its environment.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde_json::{json, Value as Json};
use tracing::debug;

use crate::core::constants::ROLE_RESOURCE_TYPE;
use crate::core::context::{ContextProvider, ContextQuery, StaticContext};
use crate::core::iam::Role;
use crate::core::identity;
use crate::core::parameter::ImportedParameter;
use crate::core::template::{Resource, Template, TemplateParameter};
use crate::core::token::{self, Token, Value};
use crate::error::{ConfigError, Result};

/// Account, region and partition a stack deploys to.
///
/// Components left unset are deferred to the matching pseudo parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environment {
    account: Value<String>,
    region: Value<String>,
    partition: Value<String>,
}

impl Environment {
    pub fn new(account: Option<String>, region: Option<String>, partition: Option<String>) -> Self {
        Self {
            account: account.map_or_else(|| Token::pseudo_account().into(), Value::Known),
            region: region.map_or_else(|| Token::pseudo_region().into(), Value::Known),
            partition: partition.map_or_else(|| Token::pseudo_partition().into(), Value::Known),
        }
    }

    /// An environment-agnostic stack: everything resolves at deploy time.
    pub fn agnostic() -> Self {
        Self::new(None, None, None)
    }

    pub fn account(&self) -> &Value<String> {
        &self.account
    }

    pub fn region(&self) -> &Value<String> {
        &self.region
    }

    pub fn partition(&self) -> &Value<String> {
        &self.partition
    }
}

/// Inputs to [`Stack::format_arn`].
#[derive(Debug, Clone)]
pub struct ArnComponents<'a> {
    pub service: &'a str,
    pub resource: &'a str,
    pub separator: &'a str,
    pub resource_name: &'a Value<String>,
}

/// A deployment unit.
pub struct Stack {
    name: String,
    env: Environment,
    ids: BTreeSet<String>,
    resources: BTreeMap<String, Resource>,
    parameters: BTreeMap<String, TemplateParameter>,
    imports: BTreeMap<String, ImportedParameter>,
    context: Box<dyn ContextProvider>,
    missing_context: Vec<ContextQuery>,
}

impl fmt::Debug for Stack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stack")
            .field("name", &self.name)
            .field("env", &self.env)
            .field("resources", &self.resources.len())
            .field("parameters", &self.parameters.len())
            .field("imports", &self.imports.len())
            .finish()
    }
}

impl Stack {
    /// Create an empty stack with no cached context.
    pub fn new(name: impl Into<String>, env: Environment) -> Self {
        Self::with_context(name, env, Box::new(StaticContext::new()))
    }

    pub fn with_context(
        name: impl Into<String>,
        env: Environment,
        context: Box<dyn ContextProvider>,
    ) -> Self {
        let name = name.into();
        debug!(stack = %name, "creating stack");
        Self {
            name,
            env,
            ids: BTreeSet::new(),
            resources: BTreeMap::new(),
            parameters: BTreeMap::new(),
            imports: BTreeMap::new(),
            context,
            missing_context: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    pub fn account(&self) -> &Value<String> {
        self.env.account()
    }

    pub fn region(&self) -> &Value<String> {
        self.env.region()
    }

    pub fn partition(&self) -> &Value<String> {
        self.env.partition()
    }

    /// `arn:{partition}:{service}:{region}:{account}:{resource}{sep}{name}`.
    pub fn format_arn(&self, components: ArnComponents<'_>) -> Value<String> {
        token::join([
            Value::from("arn:"),
            self.partition().clone(),
            Value::from(format!(":{}:", components.service)),
            self.region().clone(),
            Value::from(":"),
            self.account().clone(),
            Value::from(format!(":{}{}", components.resource, components.separator)),
            components.resource_name.clone(),
        ])
    }

    /// Fail if `id` is already used in this stack.
    pub fn ensure_unique_id(&self, id: &str) -> Result<()> {
        if id.is_empty() {
            return Err(ConfigError::EmptyName.into());
        }
        if self.ids.contains(id) {
            return Err(ConfigError::DuplicateId(id.to_string()).into());
        }
        Ok(())
    }

    /// Logical ID of the resource declared by construct `id`.
    pub fn resource_logical_id(&self, id: &str) -> String {
        identity::logical_id(&[id, "Resource"])
    }

    /// Logical ID of the template parameter declared by construct `id`.
    pub fn parameter_logical_id(&self, id: &str) -> String {
        identity::logical_id(&[id, "Parameter"])
    }

    /// Declare a resource for construct `id`. Returns its logical ID.
    pub fn add_resource(&mut self, id: &str, resource: Resource) -> Result<String> {
        self.ensure_unique_id(id)?;
        let logical_id = self.resource_logical_id(id);
        debug!(
            id,
            logical_id = %logical_id,
            resource_type = resource.resource_type(),
            "declaring resource"
        );
        self.ids.insert(id.to_string());
        self.resources.insert(logical_id.clone(), resource);
        Ok(logical_id)
    }

    /// Declare a template parameter for construct `id`. Returns its logical ID.
    pub fn add_template_parameter(
        &mut self,
        id: &str,
        parameter: TemplateParameter,
    ) -> Result<String> {
        self.ensure_unique_id(id)?;
        let logical_id = self.parameter_logical_id(id);
        debug!(id, logical_id = %logical_id, "declaring template parameter");
        self.ids.insert(id.to_string());
        self.parameters.insert(logical_id.clone(), parameter);
        Ok(logical_id)
    }

    /// Record an import under the construct id it was created with.
    pub(crate) fn register_import(&mut self, id: &str, import: ImportedParameter) {
        self.ids.insert(id.to_string());
        self.imports.insert(id.to_string(), import);
    }

    /// The import created under construct `id`, if any.
    pub fn find_import(&self, id: &str) -> Option<&ImportedParameter> {
        self.imports.get(id)
    }

    pub fn imports(&self) -> impl Iterator<Item = (&String, &ImportedParameter)> {
        self.imports.iter()
    }

    /// Declare a role together with its inline policy.
    pub fn add_role(&mut self, role: &Role) -> Result<String> {
        let policies = if role.policy().is_empty() {
            None
        } else {
            Some(json!([{
                "PolicyName": format!("{}DefaultPolicy", role.id()),
                "PolicyDocument": role.policy().to_json(),
            }]))
        };

        let resource = Resource::new(ROLE_RESOURCE_TYPE)
            .property("AssumeRolePolicyDocument", role.assume_role_policy())
            .optional_property("Policies", policies);

        self.add_resource(role.id(), resource)
    }

    /// Resolve a context query, falling back to `dummy` when unresolved.
    ///
    /// Unresolved queries are recorded in [`Stack::missing_context`].
    pub fn context_value(&mut self, query: ContextQuery, dummy: String) -> Result<String> {
        match self.context.get_value(&query)? {
            Some(value) => {
                debug!(key = %query.key(), "context hit");
                Ok(value)
            }
            None => {
                debug!(key = %query.key(), "context missing, using placeholder");
                if !self.missing_context.contains(&query) {
                    self.missing_context.push(query);
                }
                Ok(dummy)
            }
        }
    }

    /// Queries that had no value during this definition pass.
    pub fn missing_context(&self) -> &[ContextQuery] {
        &self.missing_context
    }

    pub fn resources(&self) -> &BTreeMap<String, Resource> {
        &self.resources
    }

    pub fn resource(&self, logical_id: &str) -> Option<&Resource> {
        self.resources.get(logical_id)
    }

    pub fn template_parameters(&self) -> &BTreeMap<String, TemplateParameter> {
        &self.parameters
    }

    /// Render the template.
    pub fn synth(&self) -> Template {
        debug!(
            stack = %self.name,
            resources = self.resources.len(),
            parameters = self.parameters.len(),
            "synthesizing"
        );
        Template::new(self.parameters.clone(), self.resources.clone())
    }

    pub fn to_json(&self) -> Json {
        self.synth().to_json()
    }
}
