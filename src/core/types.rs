//! Type aliases for domain concepts.
//!
//! Provides semantic type aliases to make function signatures more descriptive.

/// An Azure DevOps project name.
pub type ProjectName = String;

/// A variable group name, conventionally `<AppName>.<ENV>`.
pub type GroupName = String;

/// A variable name inside a group (e.g., DATABASE_URL).
pub type VariableName = String;
