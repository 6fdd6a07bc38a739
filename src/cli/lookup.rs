//! Lookup command - resolve a parameter value from context.

use crate::cli::{output, Paths};
use crate::core::parameter::value_from_lookup;
use crate::core::project::Project;
use crate::error::Result;

/// Look up `name` in the context file.
///
/// Prints the placeholder and a hint when the context has no value yet.
pub fn execute(paths: &Paths, name: &str, default: Option<&str>) -> Result<()> {
    let mut project = Project::open(&paths.config, &paths.context)?;
    print_lookup(&mut project, paths, name, default)
}

/// Look up `name` directly in SSM.
#[cfg(feature = "aws")]
pub fn execute_remote(paths: &Paths, name: &str, default: Option<&str>) -> Result<()> {
    use crate::core::config::Config;
    use crate::core::context::SsmContextProvider;

    let config = Config::load(&paths.config)?;
    let mut project = Project::build(config, Box::new(SsmContextProvider))?;
    print_lookup(&mut project, paths, name, default)
}

fn print_lookup(
    project: &mut Project,
    paths: &Paths,
    name: &str,
    default: Option<&str>,
) -> Result<()> {
    let value = value_from_lookup(project.stack_mut(), name, default)?;
    output::raw(&value);

    if let Some(query) = project.stack().missing_context().first() {
        output::warn(&format!("no context value for {}", output::name(name)));
        output::hint(&format!(
            "add \"{}\" to {}",
            query.key(),
            paths.context.display()
        ));
    }

    Ok(())
}
