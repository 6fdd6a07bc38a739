//! Synth command - render the CloudFormation template.

use std::path::Path;

use tracing::debug;

use crate::cli::{output, Paths};
use crate::core::project::Project;
use crate::error::Result;

/// Build the stack and print the template, or write it to `output_path`.
pub fn execute(paths: &Paths, output_path: Option<&Path>) -> Result<()> {
    let project = Project::open(&paths.config, &paths.context)?;
    let template = project.synth();
    let rendered = template.to_json_pretty()?;

    match output_path {
        Some(path) => {
            std::fs::write(path, format!("{}\n", rendered))?;
            debug!(path = %path.display(), "template written");
            output::success(&format!(
                "wrote {} ({} resources)",
                output::name(&path.display().to_string()),
                template.resources().len()
            ));
        }
        None => output::raw(&rendered),
    }

    Ok(())
}
