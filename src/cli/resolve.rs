//! Gateway resolution helpers for CLI commands.

use tracing::debug;

use crate::cli::GlobalArgs;
use crate::core::config::Config;
use crate::core::gateway::AzCli;
use crate::error::{ConfigError, Result};

/// Build the Azure CLI gateway from flags, environment and config file.
///
/// Rules:
/// - `--organization` / `CAPI_ORGANIZATION` beat `organization` in the config
/// - `--az` / `CAPI_AZ` beat `az_path` in the config, which beats `PATH`
///
/// # Errors
///
/// Returns `ConfigError::MissingOrganization` if no source names an
/// organization, or `RemoteError::NotInstalled` if `az` cannot be located.
pub fn connect(global: &GlobalArgs) -> Result<AzCli> {
    let config = Config::load()?;

    let organization = config
        .organization(global.organization.clone())
        .ok_or(ConfigError::MissingOrganization)?;
    debug!(organization = %organization, "resolved organization");

    AzCli::locate(organization, config.az_path(global.az.clone()))
}
