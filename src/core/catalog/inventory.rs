//! Group inventory.

use std::collections::HashSet;

use super::Catalog;
use crate::core::domain::GroupSummary;
use crate::core::filter::matches_env;
use crate::core::types::ProjectName;
use crate::error::Result;

impl Catalog<'_> {
    /// List the distinct groups of every project matching `project_filter`.
    ///
    /// # Errors
    ///
    /// Returns `Error::Remote` if any listing fails.
    pub fn list_groups(
        &self,
        project_filter: Option<&str>,
        env: Option<&str>,
    ) -> Result<Vec<GroupSummary>> {
        let projects = self.projects(project_filter)?;
        self.list_groups_in(&projects, env)
    }

    /// List the distinct (project, group name) pairs of `projects`.
    ///
    /// The first occurrence of a pair wins; order is otherwise preserved.
    ///
    /// # Errors
    ///
    /// Returns `Error::Remote` if any listing fails.
    pub fn list_groups_in(
        &self,
        projects: &[ProjectName],
        env: Option<&str>,
    ) -> Result<Vec<GroupSummary>> {
        let mut seen: HashSet<(String, String)> = HashSet::new();
        let mut summaries = Vec::new();

        for project in projects {
            for group in self.groups(project)? {
                if !matches_env(group.name(), env) {
                    continue;
                }
                if !seen.insert((project.clone(), group.name().to_string())) {
                    continue;
                }
                summaries.push(GroupSummary::new(project, &group));
            }
        }

        Ok(summaries)
    }
}
