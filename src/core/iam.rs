//! IAM policy statements and grantees.

use serde_json::{json, Value as Json};
use tracing::trace;

use crate::core::constants::POLICY_VERSION;
use crate::core::token::Value;

/// An `Allow` statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyStatement {
    actions: Vec<String>,
    resources: Vec<Value<String>>,
}

impl PolicyStatement {
    pub fn allow(actions: &[&str], resources: Vec<Value<String>>) -> Self {
        Self {
            actions: actions.iter().map(|a| a.to_string()).collect(),
            resources,
        }
    }

    pub fn actions(&self) -> &[String] {
        &self.actions
    }

    pub fn resources(&self) -> &[Value<String>] {
        &self.resources
    }

    pub fn to_json(&self) -> Json {
        let action = match self.actions.as_slice() {
            [single] => json!(single),
            many => json!(many),
        };
        let resource = match self.resources.as_slice() {
            [single] => single.to_json(),
            many => Json::Array(many.iter().map(|r| r.to_json()).collect()),
        };
        json!({ "Effect": "Allow", "Action": action, "Resource": resource })
    }
}

/// An ordered list of statements.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PolicyDocument {
    statements: Vec<PolicyStatement>,
}

impl PolicyDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_statement(&mut self, statement: PolicyStatement) {
        self.statements.push(statement);
    }

    pub fn statements(&self) -> &[PolicyStatement] {
        &self.statements
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    pub fn to_json(&self) -> Json {
        json!({
            "Version": POLICY_VERSION,
            "Statement": self.statements.iter().map(PolicyStatement::to_json).collect::<Vec<_>>(),
        })
    }
}

/// An identity that policy statements can be attached to.
pub trait Grantable {
    /// Display name of the principal.
    fn principal_name(&self) -> &str;

    /// Attach a statement to the principal's policy.
    fn add_to_principal_policy(&mut self, statement: PolicyStatement);
}

/// The statements a grant attached, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grant {
    principal: String,
    statements: Vec<PolicyStatement>,
}

impl Grant {
    /// Attach `actions` on `resources` to the grantee.
    pub fn add_to_principal(
        grantee: &mut dyn Grantable,
        actions: &[&str],
        resources: Vec<Value<String>>,
    ) -> Self {
        let statement = PolicyStatement::allow(actions, resources);
        trace!(
            principal = grantee.principal_name(),
            actions = ?statement.actions(),
            "granting"
        );
        grantee.add_to_principal_policy(statement.clone());

        Self {
            principal: grantee.principal_name().to_string(),
            statements: vec![statement],
        }
    }

    /// Merge another grant for the same principal into this one.
    pub fn combine(mut self, other: Grant) -> Self {
        self.statements.extend(other.statements);
        self
    }

    pub fn principal(&self) -> &str {
        &self.principal
    }

    pub fn statements(&self) -> &[PolicyStatement] {
        &self.statements
    }
}

/// An IAM role with an inline policy.
#[derive(Debug, Clone)]
pub struct Role {
    id: String,
    assumed_by: String,
    policy: PolicyDocument,
}

impl Role {
    /// Create a role assumable by a service principal (e.g. `lambda.amazonaws.com`).
    pub fn new(id: impl Into<String>, assumed_by: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            assumed_by: assumed_by.into(),
            policy: PolicyDocument::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn assumed_by(&self) -> &str {
        &self.assumed_by
    }

    pub fn policy(&self) -> &PolicyDocument {
        &self.policy
    }

    pub fn assume_role_policy(&self) -> Json {
        json!({
            "Version": POLICY_VERSION,
            "Statement": [{
                "Effect": "Allow",
                "Principal": { "Service": self.assumed_by },
                "Action": "sts:AssumeRole",
            }],
        })
    }
}

impl Grantable for Role {
    fn principal_name(&self) -> &str {
        &self.id
    }

    fn add_to_principal_policy(&mut self, statement: PolicyStatement) {
        self.policy.add_statement(statement);
    }
}
