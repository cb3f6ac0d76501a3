//! Azure CLI gateway.
//!
//! Reads projects and variable groups by shelling out to `az` with JSON
//! output.
//!
//! ## Requirements
//!
//! - `az` CLI must be installed and authenticated (`az login`)
//! - the `azure-devops` extension must be installed:
//!   `az extension add --name azure-devops`

use std::io::ErrorKind;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use serde_json::Value;
use tracing::{debug, trace};

use super::payload;
use super::RemoteGateway;
use crate::core::constants::AZ_BINARY;
use crate::core::domain::VariableGroup;
use crate::core::types::ProjectName;
use crate::error::{RemoteError, Result};

/// Gateway backed by the Azure CLI.
#[derive(Debug, Clone)]
pub struct AzCli {
    organization: String,
    binary: PathBuf,
}

impl AzCli {
    /// Create a gateway for `organization` using the given `az` executable.
    pub fn new(organization: impl Into<String>, binary: impl Into<PathBuf>) -> Self {
        Self {
            organization: organization.into(),
            binary: binary.into(),
        }
    }

    /// Create a gateway, locating `az` on `PATH` unless `binary` is given.
    ///
    /// # Errors
    ///
    /// Returns `RemoteError::NotInstalled` if no `az` executable is found.
    pub fn locate(organization: impl Into<String>, binary: Option<PathBuf>) -> Result<Self> {
        let binary = match binary {
            Some(path) => path,
            None => which::which(AZ_BINARY).map_err(|_| RemoteError::NotInstalled)?,
        };
        debug!(az = %binary.display(), "using Azure CLI");
        Ok(Self::new(organization, binary))
    }

    /// Run `az <args> -o json` and parse stdout.
    fn run(&self, args: &[&str]) -> Result<Value> {
        trace!(args = ?args, "running az");

        let output = Command::new(&self.binary)
            .args(args)
            .args(["-o", "json"])
            .stdin(Stdio::null())
            .output()
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => RemoteError::NotInstalled,
                _ => RemoteError::Spawn(e),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            debug!(status = ?output.status.code(), "az command failed");
            return Err(classify_failure(stderr).into());
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        if stdout.trim().is_empty() {
            return Ok(Value::Null);
        }

        let value = serde_json::from_str(&stdout).map_err(RemoteError::InvalidJson)?;
        Ok(value)
    }
}

/// Turn a non-zero exit into an error, spotting the missing DevOps extension.
fn classify_failure(stderr: String) -> RemoteError {
    let lower = stderr.to_lowercase();
    if lower.contains("extension") && lower.contains("azure-devops") {
        return RemoteError::MissingExtension { stderr };
    }
    if stderr.is_empty() {
        return RemoteError::CommandFailed {
            stderr: "az command failed".to_string(),
        };
    }
    RemoteError::CommandFailed { stderr }
}

impl RemoteGateway for AzCli {
    fn list_projects(&self) -> Result<Vec<ProjectName>> {
        let payload = self.run(&[
            "devops",
            "project",
            "list",
            "--organization",
            self.organization.as_str(),
        ])?;
        let projects = payload::parse_projects(payload)?;
        debug!(count = projects.len(), "listed projects");
        Ok(projects)
    }

    fn list_variable_groups(&self, project: &str) -> Result<Vec<VariableGroup>> {
        let payload = self.run(&[
            "pipelines",
            "variable-group",
            "list",
            "--organization",
            self.organization.as_str(),
            "--project",
            project,
        ])?;
        let groups = payload::parse_variable_groups(payload)?;
        debug!(project, count = groups.len(), "listed variable groups");
        Ok(groups)
    }
}
