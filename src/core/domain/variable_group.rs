//! Variable group types.
//!
//! Request-scoped snapshots of an Azure DevOps variable group. Built by the
//! gateway from a validated payload and never mutated afterwards.

use std::fmt;

use crate::core::constants::{SECRET_SENTINEL, UNKNOWN_IDENTITY};
use crate::core::types::{GroupName, VariableName};

/// A single variable inside a group.
///
/// The service never returns the value of a secret variable, so a record
/// without a value is "withheld". A record flagged secret is always withheld,
/// even if a value came along with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableRecord {
    value: Option<String>,
    is_secret: bool,
}

impl VariableRecord {
    /// A record carrying a plain value.
    pub fn plain(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            is_secret: false,
        }
    }

    /// A record whose value the service withheld.
    pub fn withheld() -> Self {
        Self {
            value: None,
            is_secret: true,
        }
    }

    /// Build from the raw parts reported by the service.
    pub fn from_parts(value: Option<String>, is_secret: bool) -> Self {
        Self {
            value: value.filter(|_| !is_secret),
            is_secret,
        }
    }

    /// The stringified value, if the service returned one.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Whether the service flagged this variable as a secret.
    pub fn is_secret(&self) -> bool {
        self.is_secret
    }

    /// Whether the value is absent.
    pub fn is_withheld(&self) -> bool {
        self.value.is_none()
    }

    /// The value, or the secret sentinel when withheld. Never empty for a
    /// withheld record.
    pub fn display(&self) -> &str {
        self.value.as_deref().unwrap_or(SECRET_SENTINEL)
    }
}

/// Creator or modifier of a group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Identity {
    display_name: Option<String>,
    unique_name: Option<String>,
}

impl Identity {
    pub fn new(display_name: Option<String>, unique_name: Option<String>) -> Self {
        Self {
            display_name: display_name.filter(|s| !s.is_empty()),
            unique_name: unique_name.filter(|s| !s.is_empty()),
        }
    }

    /// An identity with no known fields.
    pub fn unknown() -> Self {
        Self::default()
    }

    pub fn display_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(UNKNOWN_IDENTITY)
    }

    pub fn unique_name(&self) -> &str {
        self.unique_name.as_deref().unwrap_or(UNKNOWN_IDENTITY)
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}>", self.display_name(), self.unique_name())
    }
}

/// A named collection of variables in one project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableGroup {
    id: Option<i64>,
    name: GroupName,
    variables: Vec<(VariableName, VariableRecord)>,
    created_by: Identity,
    modified_by: Identity,
}

impl VariableGroup {
    /// Create an empty group with unknown creator and modifier.
    pub fn new(name: impl Into<GroupName>) -> Self {
        Self {
            id: None,
            name: name.into(),
            variables: Vec::new(),
            created_by: Identity::unknown(),
            modified_by: Identity::unknown(),
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    /// Append a variable, keeping insertion order.
    pub fn with_variable(mut self, name: impl Into<VariableName>, record: VariableRecord) -> Self {
        self.variables.push((name.into(), record));
        self
    }

    pub fn with_created_by(mut self, identity: Identity) -> Self {
        self.created_by = identity;
        self
    }

    pub fn with_modified_by(mut self, identity: Identity) -> Self {
        self.modified_by = identity;
        self
    }

    pub fn id(&self) -> Option<i64> {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Variables in the order the service returned them.
    pub fn variables(&self) -> &[(VariableName, VariableRecord)] {
        &self.variables
    }

    pub fn created_by(&self) -> &Identity {
        &self.created_by
    }

    pub fn modified_by(&self) -> &Identity {
        &self.modified_by
    }

    /// Trailing dot-separated segment of the name (`App.DEV` -> `DEV`), or the
    /// whole name when it has no dot.
    pub fn env_label(&self) -> &str {
        env_label(&self.name)
    }
}

/// Environment label of a group name.
pub fn env_label(group_name: &str) -> &str {
    group_name
        .rsplit_once('.')
        .map(|(_, label)| label)
        .unwrap_or(group_name)
}
