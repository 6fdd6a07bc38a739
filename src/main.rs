//! Paramstore - typed SSM Parameter Store declarations.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use paramstore::cli::output;
use paramstore::cli::{execute, Cli, Paths};
use paramstore::error::{ConfigError, Error, LookupError, ValidationError};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env("PARAMSTORE_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("paramstore=debug")
        } else {
            EnvFilter::new("paramstore=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).without_time().with_writer(std::io::stderr))
        .init();

    let paths = Paths {
        config: cli.config,
        context: cli.context,
    };

    if let Err(e) = execute(cli.command, &paths) {
        let suggestion = match &e {
            Error::Config(ConfigError::NotInitialized(_)) => {
                Some("run `paramstore init <STACK_NAME>`, or pass --config")
            }
            Error::Config(ConfigError::AlreadyInitialized(_)) => {
                Some("pass --force to overwrite the existing project file")
            }
            Error::Config(ConfigError::AmbiguousSeparator { .. }) => {
                Some("set simple_name = true for plain names, false for path names")
            }
            Error::Validation(ValidationError::MissingLeadingSlash { .. }) => {
                Some("names with '/' are hierarchical and must start with '/'")
            }
            Error::Lookup(LookupError::UnresolvedEnvironment { .. }) => {
                Some("set account and region in the [stack] section")
            }
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
