//! Init command - create a project file.

use tracing::info;

use crate::cli::{output, Paths};
use crate::core::config::Config;
use crate::error::{ConfigError, Result};

/// Stack settings given on the command line.
#[derive(Debug, Clone)]
pub struct StackOptions {
    pub name: String,
    pub account: Option<String>,
    pub region: Option<String>,
    pub partition: Option<String>,
}

/// Write a project file with an empty stack.
///
/// Refuses to replace an existing file unless `force` is set.
pub fn execute(paths: &Paths, stack: StackOptions, force: bool) -> Result<()> {
    if paths.config.exists() && !force {
        return Err(ConfigError::AlreadyInitialized(paths.config.display().to_string()).into());
    }

    let mut config = Config::new(&stack.name);
    config.stack.account = stack.account;
    config.stack.region = stack.region;
    config.stack.partition = stack.partition;
    config.validate()?;
    config.save(&paths.config)?;

    info!(stack = %config.stack.name, path = %paths.config.display(), "initialized project");

    output::success(&format!("initialized {}", paths.config.display()));
    output::section(&format!("Stack {}", config.stack.name));
    for (label, value) in [
        ("account", &config.stack.account),
        ("region", &config.stack.region),
        ("partition", &config.stack.partition),
    ] {
        output::kv(label, value.as_deref().unwrap_or("(deploy time)"));
    }
    println!();
    output::dimmed("add [[parameters]] or [[imports]] entries, then run `paramstore synth`");

    Ok(())
}
