//! Error types.
//!
//! Every failure is raised synchronously while a stack is being defined.
//! Nothing is retried and no partial state is kept.

use thiserror::Error;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration errors: the declaration cannot be interpreted.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error(
        "unable to determine ARN separator for SSM parameter {name} since the name is an \
         unresolved token; set `simple_name` explicitly"
    )]
    AmbiguousSeparator { name: String },

    #[error("parameter name must not be empty")]
    EmptyName,

    #[error("there is already a construct with id '{0}' in this stack")]
    DuplicateId(String),

    #[error("{kind} cannot be declared as a String parameter: {reason}")]
    UnsupportedKind { kind: String, reason: String },

    #[error("stack name '{0}' must be non-empty and use only letters, digits and '-'")]
    InvalidStackName(String),

    #[error(
        "parameter name {name} is an unresolved token and cannot be the default of a \
         template parameter; pin a version or force a dynamic reference"
    )]
    DeferredTemplateDefault { name: String },

    #[error("import '{id}' {reason}")]
    ConflictingImport { id: String, reason: String },

    #[error("parameter '{id}' is missing `{field}`")]
    MissingValue { id: String, field: String },

    #[error("unknown parameter id: {0}")]
    UnknownParameter(String),

    #[error("already initialized: {0} exists")]
    AlreadyInitialized(String),

    #[error("not initialized: {0} not found")]
    NotInitialized(String),

    #[error("failed to read config: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    Serialize(#[source] toml::ser::Error),
}

/// Validation errors: a known value breaks a declared rule.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("value '{value}' does not match the allowed pattern '{pattern}'")]
    PatternMismatch { value: String, pattern: String },

    #[error("invalid allowed pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("values of a StringList must not contain ',': got '{value}'")]
    ListSeparator { value: String },

    #[error(
        "name must only contain letters, numbers, and the following 4 symbols .-_/; got '{name}'"
    )]
    InvalidName { name: String },

    #[error("name '{name}' contains '/' and must start with '/'")]
    MissingLeadingSlash { name: String },

    #[error("name is {len} characters long, the maximum is {max}")]
    NameTooLong { len: usize, max: usize },

    #[error("value of parameter '{0}' must not be empty")]
    EmptyValue(String),

    #[error("value is {len} characters long, the {tier} tier allows at most {max}")]
    ValueTooLong { len: usize, max: usize, tier: String },
}

/// Context lookup errors.
#[derive(Error, Debug)]
pub enum LookupError {
    #[error(
        "cannot look up '{name}': the stack {missing} must be concrete, not an unresolved token"
    )]
    UnresolvedEnvironment { name: String, missing: String },

    #[error("context provider failed: {0}")]
    Provider(String),

    #[error("failed to read context file {path}: {reason}")]
    ContextFile { path: String, reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;
