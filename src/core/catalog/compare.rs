//! Comparison of two variable groups.

use tracing::debug;

use super::Catalog;
use crate::core::domain::{EnvMap, GroupDiff};
use crate::core::types::ProjectName;
use crate::error::{Error, Result};

/// A resolved group and its flattened variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedEnv {
    pub project: String,
    pub group: String,
    pub env: EnvMap,
}

/// Two resolved groups, ready to diff.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    pub left: NamedEnv,
    pub right: NamedEnv,
}

impl Comparison {
    /// Whether both groups were found in the same project.
    pub fn same_project(&self) -> bool {
        self.left.project == self.right.project
    }

    /// Non-fatal notice for groups found in different projects.
    pub fn warning(&self) -> Option<String> {
        if self.same_project() {
            return None;
        }
        Some(format!(
            "the libs were found in different projects: '{}' and '{}'",
            self.left.project, self.right.project
        ))
    }

    /// Keys exclusive to each side, sorted.
    pub fn diff(&self) -> GroupDiff {
        GroupDiff::compute(
            &self.left.group,
            &self.left.env,
            &self.right.group,
            &self.right.env,
        )
    }
}

impl Catalog<'_> {
    /// Resolve two groups among the projects matching `project_filter`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` unless exactly two names are given or
    /// if no project matches the filter, `Error::NotFound` if either group is
    /// missing, and `Error::Remote` if any listing fails.
    pub fn compare(
        &self,
        project_filter: Option<&str>,
        libs: &[String],
        env: Option<&str>,
    ) -> Result<Comparison> {
        let (first, second) = two_names(libs)?;
        let projects = self.required_projects(project_filter)?;
        self.compare_in(&projects, (first, second), env)
    }

    /// Resolve `names.0` over `projects`, then `names.1` with the first
    /// group's project tried first so both tend to come from one project.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotFound` if either group is missing and
    /// `Error::Remote` if any listing fails.
    pub fn compare_in(
        &self,
        projects: &[ProjectName],
        names: (&str, &str),
        env: Option<&str>,
    ) -> Result<Comparison> {
        let (first, second) = names;

        let (left_project, left_group) = self
            .resolve_group(projects, first, env)?
            .ok_or_else(|| Error::not_found(format!("lib not found: {}", first)))?;

        let reordered = prefer_project(projects, &left_project);
        let (right_project, right_group) = self
            .resolve_group(&reordered, second, env)?
            .ok_or_else(|| Error::not_found(format!("lib not found: {}", second)))?;

        let comparison = Comparison {
            left: NamedEnv {
                env: EnvMap::from_group(&left_group),
                group: left_group.name().to_string(),
                project: left_project,
            },
            right: NamedEnv {
                env: EnvMap::from_group(&right_group),
                group: right_group.name().to_string(),
                project: right_project,
            },
        };

        if let Some(msg) = comparison.warning() {
            debug!("{}", msg);
        }
        debug!(left = %comparison.left.group, right = %comparison.right.group, "groups resolved");

        Ok(comparison)
    }
}

fn two_names(libs: &[String]) -> Result<(&str, &str)> {
    match libs {
        [first, second] => Ok((first.as_str(), second.as_str())),
        _ => Err(Error::invalid(format!(
            "exactly two libs are required to compare, got {}",
            libs.len()
        ))),
    }
}

/// `preferred` first, then the other projects in their original order.
fn prefer_project(projects: &[ProjectName], preferred: &str) -> Vec<ProjectName> {
    std::iter::once(preferred.to_string())
        .chain(projects.iter().filter(|p| p.as_str() != preferred).cloned())
        .collect()
}
