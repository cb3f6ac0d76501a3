//! Variable group resolution.
//!
//! Ranking is local to each project and traversal is project-major: the first
//! project holding any acceptable group wins, and inside it an exact name
//! beats a substring match. A substring hit in an earlier project therefore
//! shadows an exact hit in a later one.

use tracing::debug;

use super::Catalog;
use crate::core::domain::VariableGroup;
use crate::core::filter::matches_env;
use crate::core::types::ProjectName;
use crate::error::Result;

impl Catalog<'_> {
    /// Find the best group for `name` among `projects`, in order.
    ///
    /// Stops querying as soon as a project yields a match.
    ///
    /// # Arguments
    ///
    /// * `projects` - Candidate projects, searched in the given order
    /// * `name` - Group name, matched exactly first, then as a substring
    /// * `env` - Optional environment filter that must appear in the name
    ///
    /// # Errors
    ///
    /// Returns `Error::Remote` if a group listing fails.
    pub fn resolve_group(
        &self,
        projects: &[ProjectName],
        name: &str,
        env: Option<&str>,
    ) -> Result<Option<(ProjectName, VariableGroup)>> {
        for project in projects {
            let groups = self.groups(project)?;
            if let Some(group) = pick_group(groups, name, env) {
                debug!(project = %project, group = group.name(), "resolved variable group");
                return Ok(Some((project.clone(), group)));
            }
        }

        debug!(name, "no variable group matched");
        Ok(None)
    }
}

/// Pick the first exact match, else the first substring match.
fn pick_group(groups: Vec<VariableGroup>, name: &str, env: Option<&str>) -> Option<VariableGroup> {
    let mut first_partial = None;

    for group in groups {
        if !matches_env(group.name(), env) {
            continue;
        }
        if group.name() == name {
            return Some(group);
        }
        if first_partial.is_none() && group.name().contains(name) {
            first_partial = Some(group);
        }
    }

    first_partial
}
