//! Configuration file management.
//!
//! Reads optional defaults from `.capi.toml` in the current directory, or from
//! `<config dir>/capi/config.toml`. Command-line flags and environment
//! variables always take precedence over the file.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::constants;
use crate::error::{ConfigError, Result};

/// Defaults read from a config file.
///
/// ```toml
/// organization = "https://dev.azure.com/my-org"
/// az_path = "/usr/local/bin/az"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Azure DevOps organization URL.
    #[serde(default)]
    pub organization: Option<String>,
    /// Path to the `az` executable.
    #[serde(default)]
    pub az_path: Option<PathBuf>,
}

impl Config {
    /// Path of the project-local config file.
    pub fn local_path() -> PathBuf {
        PathBuf::from(constants::CONFIG_FILE)
    }

    /// Path of the per-user config file, if the platform has a config dir.
    pub fn global_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| {
            dir.join(constants::CONFIG_DIR)
                .join(constants::GLOBAL_CONFIG_FILE)
        })
    }

    /// Load the first config file found, or defaults when there is none.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ReadFile` or `ConfigError::Parse` if a file
    /// exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        let candidates = std::iter::once(Self::local_path()).chain(Self::global_path());

        for path in candidates {
            if path.exists() {
                return Self::load_from(&path);
            }
        }

        debug!("no config file found, using defaults");
        Ok(Self::default())
    }

    /// Load a specific config file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ReadFile` or `ConfigError::Parse`.
    pub fn load_from(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading config");

        let contents = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let config: Self = toml::from_str(&contents).map_err(ConfigError::Parse)?;

        debug!(
            organization = config.organization.is_some(),
            az_path = config.az_path.is_some(),
            "config loaded"
        );
        Ok(config)
    }

    /// The organization, with `flag` taking precedence.
    pub fn organization(&self, flag: Option<String>) -> Option<String> {
        flag.or_else(|| self.organization.clone())
            .filter(|org| !org.trim().is_empty())
    }

    /// The `az` path, with `flag` taking precedence.
    pub fn az_path(&self, flag: Option<PathBuf>) -> Option<PathBuf> {
        flag.or_else(|| self.az_path.clone())
    }
}
