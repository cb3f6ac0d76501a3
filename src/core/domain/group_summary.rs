//! GroupSummary type.

use serde::Serialize;

use crate::core::domain::VariableGroup;

/// One distinct (project, group) pair, without variable detail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupSummary {
    #[serde(rename = "projeto")]
    pub project: String,
    #[serde(rename = "grupo")]
    pub group: String,
    #[serde(rename = "criado_por")]
    pub created_by: String,
    #[serde(rename = "modificado_por")]
    pub modified_by: String,
}

impl GroupSummary {
    pub fn new(project: &str, group: &VariableGroup) -> Self {
        Self {
            project: project.to_string(),
            group: group.name().to_string(),
            created_by: group.created_by().to_string(),
            modified_by: group.modified_by().to_string(),
        }
    }
}
