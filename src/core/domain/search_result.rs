//! SearchResult type.
//!
//! One row per variable whose value matched a search term.

use serde::Serialize;

use crate::core::domain::VariableGroup;

/// A matching variable together with where it was found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    #[serde(rename = "projeto")]
    pub project: String,
    #[serde(rename = "grupo")]
    pub group: String,
    #[serde(rename = "variavel")]
    pub variable: String,
    #[serde(rename = "valor")]
    pub value: Option<String>,
    #[serde(rename = "criado_por")]
    pub created_by: String,
    #[serde(rename = "modificado_por")]
    pub modified_by: String,
}

impl SearchResult {
    /// Build a row for `variable` of `group` in `project`.
    pub fn new(project: &str, group: &VariableGroup, variable: &str, value: Option<&str>) -> Self {
        Self {
            project: project.to_string(),
            group: group.name().to_string(),
            variable: variable.to_string(),
            value: value.map(str::to_string),
            created_by: group.created_by().to_string(),
            modified_by: group.modified_by().to_string(),
        }
    }
}
