//! Value search across every candidate project.

use tracing::debug;

use super::Catalog;
use crate::core::domain::SearchResult;
use crate::core::filter::{contains_term, matches_env};
use crate::core::types::ProjectName;
use crate::error::{Error, Result};

/// Parameters of a value search.
#[derive(Debug, Clone, Default)]
pub struct SearchQuery {
    /// Text that must appear in a variable's value. Must not be empty.
    pub term: String,
    /// Optional project name substring.
    pub project: Option<String>,
    /// Optional environment substring of the group name.
    pub env: Option<String>,
    /// Compare case-insensitively.
    pub ignore_case: bool,
}

impl SearchQuery {
    pub fn new(term: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            ..Self::default()
        }
    }

    pub fn project(mut self, project: impl Into<String>) -> Self {
        self.project = Some(project.into());
        self
    }

    pub fn env(mut self, env: impl Into<String>) -> Self {
        self.env = Some(env.into());
        self
    }

    pub fn ignore_case(mut self, ignore_case: bool) -> Self {
        self.ignore_case = ignore_case;
        self
    }
}

impl Catalog<'_> {
    /// Search every variable value in the projects matching the query's
    /// project filter.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` for an empty term and `Error::Remote`
    /// if any listing fails.
    pub fn search(&self, query: &SearchQuery) -> Result<Vec<SearchResult>> {
        validate_term(&query.term)?;
        let projects = self.projects(query.project.as_deref())?;
        self.search_in(&projects, query)
    }

    /// Search the given projects, ignoring `query.project`.
    ///
    /// Rows follow project order, then group order, then variable order. A
    /// value shared by two groups yields two rows.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` for an empty term and `Error::Remote`
    /// if any listing fails.
    pub fn search_in(
        &self,
        projects: &[ProjectName],
        query: &SearchQuery,
    ) -> Result<Vec<SearchResult>> {
        validate_term(&query.term)?;

        let env = query.env.as_deref();
        let mut results = Vec::new();

        for project in projects {
            for group in self.groups(project)? {
                if !matches_env(group.name(), env) {
                    continue;
                }
                for (name, record) in group.variables() {
                    if contains_term(record.value(), &query.term, query.ignore_case) {
                        results.push(SearchResult::new(project, &group, name, record.value()));
                    }
                }
            }
        }

        debug!(term = %query.term, matches = results.len(), "search finished");
        Ok(results)
    }
}

fn validate_term(term: &str) -> Result<()> {
    if term.is_empty() {
        return Err(Error::invalid("search term must not be empty"));
    }
    Ok(())
}
