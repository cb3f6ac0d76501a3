//! Export of a single group as an env map.

use super::Catalog;
use crate::core::domain::EnvMap;
use crate::error::{Error, Result};

/// A resolved group flattened for .env output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedGroup {
    pub project: String,
    pub group: String,
    pub env: EnvMap,
}

impl Catalog<'_> {
    /// Resolve `lib` among the projects matching `project_filter` and flatten
    /// its variables.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` if no project matches the filter,
    /// `Error::NotFound` if no group matches, and `Error::Remote` if any
    /// listing fails.
    pub fn export(
        &self,
        project_filter: Option<&str>,
        lib: &str,
        env: Option<&str>,
    ) -> Result<ExportedGroup> {
        let projects = self.required_projects(project_filter)?;

        let (project, group) = self
            .resolve_group(&projects, lib, env)?
            .ok_or_else(|| {
                Error::not_found(format!(
                    "variable group not found in the filtered projects: {}",
                    lib
                ))
            })?;

        Ok(ExportedGroup {
            env: EnvMap::from_group(&group),
            group: group.name().to_string(),
            project,
        })
    }
}
