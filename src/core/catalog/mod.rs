//! The primary interface for capi operations.
//!
//! `Catalog` pairs a [`RemoteGateway`] with a [`Progress`] notifier and hosts
//! every lookup: group resolution, search, inventory, export and comparison.
//! Remote calls run strictly in sequence and the first failure aborts the
//! whole operation, discarding anything accumulated so far.

mod compare;
mod export;
mod inventory;
mod resolve;
mod search;

pub use compare::{Comparison, NamedEnv};
pub use export::ExportedGroup;
pub use search::SearchQuery;

use tracing::debug;

use crate::core::domain::VariableGroup;
use crate::core::filter;
use crate::core::gateway::RemoteGateway;
use crate::core::progress::{Progress, Silent, Step};
use crate::core::types::ProjectName;
use crate::error::{Error, Result};

/// Read-only view over one organization's variable groups.
pub struct Catalog<'a> {
    gateway: &'a dyn RemoteGateway,
    progress: &'a dyn Progress,
}

impl std::fmt::Debug for Catalog<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Catalog").finish_non_exhaustive()
    }
}

impl<'a> Catalog<'a> {
    /// Create a catalog that reports progress to `progress`.
    pub fn new(gateway: &'a dyn RemoteGateway, progress: &'a dyn Progress) -> Self {
        Self { gateway, progress }
    }

    /// Create a catalog with no progress output.
    pub fn silent(gateway: &'a dyn RemoteGateway) -> Self {
        Self::new(gateway, &Silent)
    }

    /// Candidate projects: every project whose name contains `project_filter`.
    ///
    /// # Errors
    ///
    /// Returns `Error::Remote` if the project list cannot be fetched.
    pub fn projects(&self, project_filter: Option<&str>) -> Result<Vec<ProjectName>> {
        let all = {
            let _step = Step::start(self.progress, "Listando projetos...");
            self.gateway.list_projects()?
        };
        let projects = filter::filter_projects(all, project_filter);
        debug!(count = projects.len(), filter = ?project_filter, "candidate projects");
        Ok(projects)
    }

    /// Like [`projects`](Self::projects), but an empty result is an error.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` if the filter matches no project.
    pub fn required_projects(&self, project_filter: Option<&str>) -> Result<Vec<ProjectName>> {
        let projects = self.projects(project_filter)?;
        if projects.is_empty() {
            return Err(Error::invalid("no project matches the given project filter"));
        }
        Ok(projects)
    }

    /// Fetch the groups of one project behind a progress step.
    fn groups(&self, project: &str) -> Result<Vec<VariableGroup>> {
        let label = format!("Analisando grupos em: {}", project);
        let _step = Step::start(self.progress, &label);
        self.gateway.list_variable_groups(project)
    }
}
