//! Parameter ARNs.
//!
//! SSM parameter ARNs embed the name after `parameter`. Hierarchical names
//! already start with `/`, simple names need one added:
//!
//! ```text
//! /app/db/password  ->  arn:aws:ssm:us-east-1:123456789012:parameter/app/db/password
//! shared-config     ->  arn:aws:ssm:us-east-1:123456789012:parameter/shared-config
//! ```

use tracing::warn;

use crate::core::stack::{ArnComponents, Stack};
use crate::core::token::Value;
use crate::core::validation;
use crate::error::{ConfigError, Result};

/// Separator between `parameter` and the name in an ARN.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArnSeparator {
    /// `/`, for simple names.
    Slash,
    /// Nothing, for names that already start with `/`.
    Empty,
}

impl ArnSeparator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Slash => "/",
            Self::Empty => "",
        }
    }

    /// Separator for an explicit `simple_name` flag.
    pub fn from_simple_name(simple_name: bool) -> Self {
        if simple_name {
            Self::Slash
        } else {
            Self::Empty
        }
    }
}

/// Pick the separator for a parameter name.
///
/// An explicit separator always wins. Otherwise a known name decides:
/// a leading `/` means [`ArnSeparator::Empty`], anything else
/// [`ArnSeparator::Slash`].
///
/// # Errors
///
/// Returns `ConfigError::AmbiguousSeparator` if the name is deferred and no
/// separator was given.
pub fn resolve_separator(
    name: &Value<String>,
    explicit: Option<ArnSeparator>,
) -> Result<ArnSeparator> {
    let inferred = name.known().map(|n| {
        if n.starts_with('/') {
            ArnSeparator::Empty
        } else {
            ArnSeparator::Slash
        }
    });

    match (explicit, inferred) {
        (Some(explicit), Some(inferred)) => {
            if explicit != inferred {
                warn!(
                    name = %name.display(),
                    explicit = explicit.as_str(),
                    inferred = inferred.as_str(),
                    "explicit ARN separator overrides the one implied by the name"
                );
            }
            Ok(explicit)
        }
        (Some(explicit), None) => Ok(explicit),
        (None, Some(inferred)) => Ok(inferred),
        (None, None) => Err(ConfigError::AmbiguousSeparator {
            name: name.display(),
        }
        .into()),
    }
}

/// ARN of the parameter called `name` in `stack`.
///
/// # Errors
///
/// Returns `ConfigError::AmbiguousSeparator` if the separator cannot be
/// inferred, and `ValidationError::MissingLeadingSlash` for a known
/// hierarchical name without a leading `/`.
pub fn arn_for_parameter_name(
    stack: &Stack,
    name: &Value<String>,
    separator: Option<ArnSeparator>,
) -> Result<Value<String>> {
    if let Some(known) = name.known() {
        validation::validate_leading_slash(known)?;
    }
    let separator = resolve_separator(name, separator)?;
    Ok(stack.format_arn(ArnComponents {
        service: "ssm",
        resource: "parameter",
        separator: separator.as_str(),
        resource_name: name,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::stack::Environment;
    use crate::core::token::Token;
    use crate::error::{Error, ValidationError};

    fn stack() -> Stack {
        Stack::new(
            "Test",
            Environment::new(
                Some("123456789012".into()),
                Some("us-east-1".into()),
                Some("aws".into()),
            ),
        )
    }

    #[test]
    fn test_path_name_uses_empty_separator() {
        let arn = arn_for_parameter_name(&stack(), &"/app/db/password".into(), None).unwrap();
        assert_eq!(
            arn.known().unwrap(),
            "arn:aws:ssm:us-east-1:123456789012:parameter/app/db/password"
        );
    }

    #[test]
    fn test_simple_name_uses_slash() {
        let arn = arn_for_parameter_name(&stack(), &"shared-config".into(), None).unwrap();
        assert_eq!(
            arn.known().unwrap(),
            "arn:aws:ssm:us-east-1:123456789012:parameter/shared-config"
        );
    }

    #[test]
    fn test_deferred_name_without_separator_fails() {
        let name = Value::Deferred(Token::Ref("Name".to_string()));
        let err = arn_for_parameter_name(&stack(), &name, None).unwrap_err();
        assert!(matches!(
            err,
            Error::Config(ConfigError::AmbiguousSeparator { .. })
        ));
    }

    #[test]
    fn test_deferred_name_with_explicit_separator() {
        let name = Value::Deferred(Token::Ref("Name".to_string()));
        let arn = arn_for_parameter_name(&stack(), &name, Some(ArnSeparator::Slash)).unwrap();
        assert!(!arn.is_known());
        assert!(arn.display().ends_with(":parameter/${Token[Ref:Name]}"));
    }

    #[test]
    fn test_explicit_separator_overrides_inference() {
        let sep = resolve_separator(&"/a".into(), Some(ArnSeparator::Slash)).unwrap();
        assert_eq!(sep, ArnSeparator::Slash);
    }

    #[test]
    fn test_hierarchical_name_without_leading_slash_fails() {
        let err = arn_for_parameter_name(&stack(), &"app/db".into(), None).unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::MissingLeadingSlash { .. })
        ));

        let err = arn_for_parameter_name(&stack(), &"app/db".into(), Some(ArnSeparator::Slash))
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::MissingLeadingSlash { .. })
        ));
    }

    #[test]
    fn test_explicit_separator_is_used_verbatim() {
        let prefix = "arn:aws:ssm:us-east-1:123456789012:parameter";

        let arn = arn_for_parameter_name(&stack(), &"shared".into(), Some(ArnSeparator::Empty))
            .unwrap();
        assert_eq!(arn.known().unwrap(), &format!("{}shared", prefix));

        let arn = arn_for_parameter_name(&stack(), &"/app/db".into(), Some(ArnSeparator::Slash))
            .unwrap();
        assert_eq!(arn.known().unwrap(), &format!("{}//app/db", prefix));
    }

    #[test]
    fn test_from_simple_name() {
        assert_eq!(ArnSeparator::from_simple_name(true), ArnSeparator::Slash);
        assert_eq!(ArnSeparator::from_simple_name(false), ArnSeparator::Empty);
    }
}
