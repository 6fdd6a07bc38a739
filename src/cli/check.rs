//! Check command.
//!
//! Builds the whole stack so every declaration-time rule runs, then prints a
//! short summary.

use crate::cli::{output, Paths};
use crate::core::parameter::Parameter;
use crate::core::project::Project;
use crate::error::Result;

/// Validate the project.
pub fn execute(paths: &Paths) -> Result<()> {
    let project = Project::open(&paths.config, &paths.context)?;
    let stack = project.stack();

    let declared = project
        .parameters()
        .values()
        .filter(|p| p.is_declared())
        .count();
    let imported = project.parameters().len() - declared;
    let deferred_arns = project
        .parameters()
        .values()
        .filter(|p| !p.parameter_arn().is_known())
        .count();

    output::section(&format!("Stack {}", stack.name()));
    output::kv("account", stack.account().display());
    output::kv("region", stack.region().display());
    output::kv("partition", stack.partition().display());
    output::kv("declared", declared);
    output::kv("imported", imported);
    output::kv("roles", project.roles().len());
    output::kv("template parameters", stack.template_parameters().len());
    println!();

    if deferred_arns > 0 {
        output::dimmed(&format!(
            "{} ARN{} resolve at deploy time",
            deferred_arns,
            if deferred_arns == 1 { "" } else { "s" }
        ));
    }
    output::success("configuration is valid");

    Ok(())
}
