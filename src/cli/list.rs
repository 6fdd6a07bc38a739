//! List command - show parameters with their names and ARNs.

use colored::Colorize;

use crate::cli::{output, Paths};
use crate::core::parameter::Parameter;
use crate::core::project::Project;
use crate::error::Result;

/// List declared and imported parameters.
pub fn execute(paths: &Paths, json: bool) -> Result<()> {
    let project = Project::open(&paths.config, &paths.context)?;
    let parameters = project.parameters();

    if json {
        let entries: Vec<_> = parameters
            .iter()
            .map(|(id, p)| {
                serde_json::json!({
                    "id": id,
                    "type": p.parameter_type().as_str(),
                    "name": p.parameter_name().to_json(),
                    "arn": p.parameter_arn().to_json(),
                    "declared": p.is_declared(),
                })
            })
            .collect();
        let output = serde_json::json!({
            "parameters": entries,
            "count": parameters.len()
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if parameters.is_empty() {
        output::dimmed("no parameters declared");
    } else {
        println!(
            "{} parameters:",
            parameters.len().to_string().green().bold()
        );
        for (id, p) in parameters {
            let origin = if p.is_declared() { "declared" } else { "imported" };
            println!(
                "  {} {} ({}, {})",
                id.bold(),
                output::name(&p.parameter_name().display()),
                p.parameter_type(),
                origin.dimmed()
            );
            output::kv("  arn", p.parameter_arn().display());
        }
    }

    Ok(())
}
