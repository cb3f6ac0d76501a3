//! Remote access to Azure DevOps.
//!
//! The engine only needs two reads: the projects of the organization and the
//! variable groups of one project. [`RemoteGateway`] abstracts them so the
//! engine can run against the Azure CLI or an in-memory fake.
//!
//! ## Adding a New Backend
//!
//! 1. Implement the `RemoteGateway` trait
//! 2. Validate raw responses into [`VariableGroup`] at the boundary
//! 3. Surface every failure as [`RemoteError`](crate::error::RemoteError)

mod az;
mod payload;

pub use az::AzCli;

use crate::core::domain::VariableGroup;
use crate::core::types::ProjectName;
use crate::error::Result;

/// Read-only access to one organization's projects and variable groups.
pub trait RemoteGateway {
    /// Names of every project in the organization, in service order.
    ///
    /// # Errors
    ///
    /// Returns `Error::Remote` on any transport, auth, or parsing problem.
    fn list_projects(&self) -> Result<Vec<ProjectName>>;

    /// Variable groups of `project`, in service order.
    ///
    /// # Errors
    ///
    /// Returns `Error::Remote` on any transport, auth, or parsing problem.
    fn list_variable_groups(&self, project: &str) -> Result<Vec<VariableGroup>>;
}

impl<G: RemoteGateway + ?Sized> RemoteGateway for &G {
    fn list_projects(&self) -> Result<Vec<ProjectName>> {
        (**self).list_projects()
    }

    fn list_variable_groups(&self, project: &str) -> Result<Vec<VariableGroup>> {
        (**self).list_variable_groups(project)
    }
}
