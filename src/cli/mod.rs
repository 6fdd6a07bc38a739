//! Command-line interface.

pub mod arn;
pub mod check;
pub mod completions;
pub mod init;
pub mod list;
pub mod lookup;
pub mod output;
pub mod synth;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::core::constants::{CONFIG_FILE, CONTEXT_FILE};

/// Paramstore - typed SSM Parameter Store declarations.
#[derive(Parser)]
#[command(
    name = "paramstore",
    about = "Declare SSM parameters, resolve their ARNs and grant access",
    version
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Project file
    #[arg(long, global = true, default_value = CONFIG_FILE)]
    pub config: PathBuf,

    /// Context values file
    #[arg(long, global = true, default_value = CONTEXT_FILE)]
    pub context: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Create a project file for a new stack
    Init {
        /// Stack name (letters, digits and '-')
        stack_name: String,
        /// AWS account id; deferred to deploy time when unset
        #[arg(long)]
        account: Option<String>,
        /// AWS region; deferred to deploy time when unset
        #[arg(long)]
        region: Option<String>,
        /// AWS partition; deferred to deploy time when unset
        #[arg(long)]
        partition: Option<String>,
        /// Overwrite an existing project file
        #[arg(short, long)]
        force: bool,
    },

    /// Render the CloudFormation template
    Synth {
        /// Write the template to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Build the stack and report problems
    Check,

    /// List declared and imported parameters with their ARNs
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Resolve the ARN of a parameter name in the configured environment
    Arn {
        /// Parameter name (e.g., /app/db/password)
        name: String,
        /// Force the separator: true for `/`, false for none
        #[arg(long)]
        simple_name: Option<bool>,
    },

    /// Look up a parameter value from context
    Lookup {
        /// Parameter name
        name: String,
        /// Value to use while the context has none
        #[arg(long)]
        default: Option<String>,
        /// Query SSM directly instead of the context file
        #[cfg(feature = "aws")]
        #[arg(long)]
        remote: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// File locations shared by every command.
#[derive(Debug, Clone)]
pub struct Paths {
    pub config: PathBuf,
    pub context: PathBuf,
}

/// Execute a command.
pub fn execute(command: Command, paths: &Paths) -> crate::error::Result<()> {
    use Command::*;

    match command {
        Init {
            stack_name,
            account,
            region,
            partition,
            force,
        } => init::execute(
            paths,
            init::StackOptions {
                name: stack_name,
                account,
                region,
                partition,
            },
            force,
        ),
        Synth { output } => synth::execute(paths, output.as_deref()),
        Check => check::execute(paths),
        List { json } => list::execute(paths, json),
        Arn { name, simple_name } => arn::execute(paths, &name, simple_name),
        #[cfg(not(feature = "aws"))]
        Lookup { name, default } => lookup::execute(paths, &name, default.as_deref()),
        #[cfg(feature = "aws")]
        Lookup {
            name,
            default,
            remote,
        } => {
            if remote {
                lookup::execute_remote(paths, &name, default.as_deref())
            } else {
                lookup::execute(paths, &name, default.as_deref())
            }
        }
        Completions { shell } => completions::execute(shell),
    }
}
