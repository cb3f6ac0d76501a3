//! In-memory gateway and progress recorder for library tests.

use std::cell::RefCell;

use capi::error::{Error, RemoteError, Result};
use capi::{Progress, RemoteGateway, VariableGroup};

use super::fixtures::Org;

/// Gateway answering from an [`Org`] and logging every call.
pub struct FakeGateway {
    org: Org,
    failing: Option<String>,
    calls: RefCell<Vec<String>>,
}

impl FakeGateway {
    pub fn new(org: Org) -> Self {
        Self {
            org,
            failing: None,
            calls: RefCell::new(Vec::new()),
        }
    }

    /// Make listing the groups of `project` fail.
    pub fn failing_on(mut self, project: &str) -> Self {
        self.failing = Some(project.to_string());
        self
    }

    /// Calls so far: `projects` or `groups:<project>`.
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    /// Projects whose groups were listed, in call order.
    pub fn group_calls(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|c| c.strip_prefix("groups:").map(str::to_string))
            .collect()
    }
}

impl RemoteGateway for FakeGateway {
    fn list_projects(&self) -> Result<Vec<String>> {
        self.calls.borrow_mut().push("projects".to_string());
        Ok(self
            .org
            .projects()
            .iter()
            .map(|(name, _)| name.clone())
            .collect())
    }

    fn list_variable_groups(&self, project: &str) -> Result<Vec<VariableGroup>> {
        self.calls.borrow_mut().push(format!("groups:{}", project));

        if self.failing.as_deref() == Some(project) {
            return Err(Error::Remote(RemoteError::CommandFailed {
                stderr: format!("ERROR: access denied to {}", project),
            }));
        }

        Ok(self
            .org
            .projects()
            .iter()
            .find(|(name, _)| name == project)
            .map(|(_, groups)| groups.clone())
            .unwrap_or_default())
    }
}

/// Progress notifier that records every event.
#[derive(Default)]
pub struct Recorder {
    events: RefCell<Vec<String>>,
}

impl Recorder {
    pub fn events(&self) -> Vec<String> {
        self.events.borrow().clone()
    }

    pub fn starts(&self) -> usize {
        self.events().iter().filter(|e| *e != "stop").count()
    }

    pub fn stops(&self) -> usize {
        self.events().iter().filter(|e| *e == "stop").count()
    }
}

impl Progress for Recorder {
    fn start(&self, label: &str) {
        self.events.borrow_mut().push(label.to_string());
    }

    fn stop(&self) {
        self.events.borrow_mut().push("stop".to_string());
    }
}
