//! capi - Azure DevOps variable group explorer.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use capi::cli::output;
use capi::cli::{execute, Cli};
use capi::error::{ConfigError, Error, RemoteError};

/// Exit status for failed operations.
const FAILURE_EXIT_CODE: i32 = 2;

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env("CAPI_LOG").unwrap_or_else(|_| {
        if cli.global.verbose {
            EnvFilter::new("capi=debug")
        } else {
            EnvFilter::new("capi=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = execute(cli) {
        let suggestion = match &e {
            Error::Remote(RemoteError::NotInstalled) => {
                Some("install the Azure CLI, then run: az login")
            }
            Error::Remote(RemoteError::MissingExtension { .. }) => {
                Some("az extension add --name azure-devops")
            }
            Error::Config(ConfigError::MissingOrganization) => Some(
                "pass --organization, set CAPI_ORGANIZATION, or add `organization` to .capi.toml",
            ),
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(FAILURE_EXIT_CODE);
    }
}
