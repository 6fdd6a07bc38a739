//! Paramstore - typed SSM Parameter Store declarations.
//!
//! Declare String and StringList parameters (or reference existing ones) and
//! get the CloudFormation resource, the parameter ARN and IAM grants.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── init          # Create a project file
//! │   ├── synth         # Render the template
//! │   ├── check         # Validate the project
//! │   ├── list          # List parameters and ARNs
//! │   ├── arn           # Resolve a single ARN
//! │   ├── lookup        # Context lookup
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── token         # Known vs deferred values
//!     ├── arn           # Name-to-ARN resolution
//!     ├── identity      # Logical IDs, generated names, import identities
//!     ├── validation    # Name, pattern and list checks
//!     ├── parameter/    # String, StringList and imported parameters
//!     ├── iam           # Policy statements, grants, roles
//!     ├── kms           # Encryption key grants
//!     ├── stack         # Deployment unit and ARN formatting
//!     ├── template      # CloudFormation template model
//!     ├── context       # Lookup providers
//!     ├── config        # paramstore.toml
//!     └── project       # Config-driven stack building
//! ```
//!
//! # Example
//!
//! ```
//! use paramstore::{Environment, Parameter, Role, Stack, StringParameter, StringParameterProps};
//!
//! let env = Environment::new(
//!     Some("123456789012".into()),
//!     Some("us-east-1".into()),
//!     Some("aws".into()),
//! );
//! let mut stack = Stack::new("AppStack", env);
//! let param = StringParameter::new(
//!     &mut stack,
//!     "DbHost",
//!     StringParameterProps::new("db.internal").name("/app/db/host"),
//! )
//! .unwrap();
//!
//! let mut role = Role::new("App", "lambda.amazonaws.com");
//! param.grant_read(&mut role);
//! stack.add_role(&role).unwrap();
//!
//! assert_eq!(
//!     param.parameter_arn().known().unwrap(),
//!     "arn:aws:ssm:us-east-1:123456789012:parameter/app/db/host"
//! );
//! ```

pub mod cli;
pub mod core;
pub mod error;

pub use crate::core::arn::{arn_for_parameter_name, ArnSeparator};
pub use crate::core::config::Config;
pub use crate::core::context::{ContextProvider, ContextQuery, StaticContext};
pub use crate::core::iam::{Grant, Grantable, PolicyDocument, PolicyStatement, Role};
pub use crate::core::identity::import_identity;
pub use crate::core::kms::{EncryptionKey, Key};
pub use crate::core::parameter::{
    value_for_secure_string_parameter, value_for_string_parameter,
    value_for_typed_string_parameter, value_from_lookup, AnyParameter, ImportSource,
    ImportedParameter, Parameter, ParameterDataType, ParameterKind, ParameterTier,
    ParameterValueType, SecureStringParameterAttributes, StringListParameter,
    StringListParameterProps, StringParameter, StringParameterAttributes, StringParameterProps,
};
pub use crate::core::project::Project;
pub use crate::core::stack::{Environment, Stack};
pub use crate::core::template::Template;
pub use crate::core::token::{DynamicReference, DynamicReferenceService, Token, Value};
pub use crate::error::{Error, Result};
