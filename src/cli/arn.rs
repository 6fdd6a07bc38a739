//! Arn command - resolve a parameter ARN without declaring anything.

use crate::cli::{output, Paths};
use crate::core::arn::{arn_for_parameter_name, ArnSeparator};
use crate::core::config::Config;
use crate::core::stack::{Environment, Stack};
use crate::core::token::Value;
use crate::error::Result;

/// Print the ARN of `name` in the configured stack environment.
pub fn execute(paths: &Paths, name: &str, simple_name: Option<bool>) -> Result<()> {
    let config = Config::load(&paths.config)?;
    let env = Environment::new(
        config.stack.account,
        config.stack.region,
        config.stack.partition,
    );
    let stack = Stack::new(config.stack.name, env);

    let arn = arn_for_parameter_name(
        &stack,
        &Value::Known(name.to_string()),
        simple_name.map(ArnSeparator::from_simple_name),
    )?;

    match arn.known() {
        Some(arn) => output::raw(arn),
        // Deferred environment: print the expression the template would carry
        None => output::raw(&serde_json::to_string(&arn.to_json())?),
    }

    Ok(())
}
