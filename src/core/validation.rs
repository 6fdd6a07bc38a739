//! Input validation for parameter declarations.
//!
//! Every check applies to known values only. Deferred values are resolved
//! by CloudFormation and cannot be checked at definition time.

use std::sync::OnceLock;

use regex::Regex;

use crate::core::constants::{LIST_SEPARATOR, MAX_NAME_LENGTH};
use crate::core::parameter::ParameterTier;
use crate::core::token::Value;
use crate::error::{ConfigError, Result, ValidationError};

fn name_regex() -> &'static Regex {
    static NAME: OnceLock<Regex> = OnceLock::new();
    NAME.get_or_init(|| Regex::new(r"^[/a-zA-Z0-9_.-]+$").expect("static regex"))
}

/// Validate a parameter name.
///
/// Known names must:
/// - Not be empty
/// - Be at most 2048 characters
/// - Only contain letters, digits and `.-_/`
/// - Start with `/` if they contain one
///
/// # Errors
///
/// Returns `ConfigError::EmptyName` or a `ValidationError` describing the
/// first rule broken.
pub fn validate_parameter_name(name: &Value<String>) -> Result<()> {
    let Some(name) = name.known() else {
        return Ok(());
    };

    if name.is_empty() {
        return Err(ConfigError::EmptyName.into());
    }

    if name.len() > MAX_NAME_LENGTH {
        return Err(ValidationError::NameTooLong {
            len: name.len(),
            max: MAX_NAME_LENGTH,
        }
        .into());
    }

    if !name_regex().is_match(name) {
        return Err(ValidationError::InvalidName {
            name: name.to_string(),
        }
        .into());
    }

    validate_leading_slash(name)
}

/// Hierarchical names (any `/`) must start with `/`.
///
/// # Errors
///
/// Returns `ValidationError::MissingLeadingSlash`.
pub fn validate_leading_slash(name: &str) -> Result<()> {
    if name.contains('/') && !name.starts_with('/') {
        return Err(ValidationError::MissingLeadingSlash {
            name: name.to_string(),
        }
        .into());
    }
    Ok(())
}

/// Check a value against an allowed pattern.
///
/// The pattern is searched for anywhere in the value; anchor it with `^` and
/// `$` to match the whole value. Skipped when either side is deferred.
///
/// # Errors
///
/// Returns `ValidationError::PatternMismatch` if the value does not match,
/// or `ValidationError::InvalidPattern` if the pattern does not compile.
pub fn validate_allowed_pattern(
    value: &Value<String>,
    pattern: Option<&Value<String>>,
) -> Result<()> {
    let (Some(value), Some(Value::Known(pattern))) = (value.known(), pattern) else {
        return Ok(());
    };

    let regex = compile_pattern(pattern)?;
    if !regex.is_match(value) {
        return Err(ValidationError::PatternMismatch {
            value: value.to_string(),
            pattern: pattern.to_string(),
        }
        .into());
    }

    Ok(())
}

/// Validate the elements of a StringList.
///
/// Each known element must not contain `,` and must match the pattern.
/// Deferred elements are skipped; the rest of the list is still checked.
///
/// # Errors
///
/// Returns `ValidationError::ListSeparator` or
/// `ValidationError::PatternMismatch` for the first offending element.
pub fn validate_list_elements(
    values: &[Value<String>],
    pattern: Option<&Value<String>>,
) -> Result<()> {
    for value in values {
        if let Some(known) = value.known() {
            if known.contains(LIST_SEPARATOR) {
                return Err(ValidationError::ListSeparator {
                    value: known.to_string(),
                }
                .into());
            }
        }
        validate_allowed_pattern(value, pattern)?;
    }
    Ok(())
}

/// Reject an empty known value.
pub fn validate_value_not_empty(id: &str, value: &Value<String>) -> Result<()> {
    match value.known() {
        Some(v) if v.is_empty() => Err(ValidationError::EmptyValue(id.to_string()).into()),
        _ => Ok(()),
    }
}

/// Reject a known value longer than the tier allows.
pub fn validate_value_length(value: &Value<String>, tier: ParameterTier) -> Result<()> {
    let Some(value) = value.known() else {
        return Ok(());
    };

    let max = tier.value_limit();
    let len = value.chars().count();
    if len > max {
        return Err(ValidationError::ValueTooLong {
            len,
            max,
            tier: tier.as_str().to_string(),
        }
        .into());
    }
    Ok(())
}

fn compile_pattern(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| {
        ValidationError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: e.to_string(),
        }
        .into()
    })
}
