//! Startup-time tool registry.
//!
//! Tools used to be discovered from plugin manifests and resolved to
//! callables by dotted-string import at call time. Here every tool is a
//! statically-typed `Tool` implementation registered at startup under a
//! stable string key, with validation (non-empty id, no duplicates) at
//! registration rather than at dispatch.

use crate::interface::Department;
use crate::session::Session;
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("tool id must not be empty")]
    EmptyId,
    #[error("duplicate tool id `{0}`")]
    DuplicateId(String),
}

#[derive(Debug, Error)]
#[error("tool `{tool}` failed: {message}")]
pub struct ToolError {
    pub tool: String,
    pub message: String,
}

/// A dashboard tool. Ids are stable keys; the rest is display metadata and
/// the entrypoint.
pub trait Tool {
    fn id(&self) -> &'static str;
    fn name(&self) -> &str;
    fn description(&self) -> &str {
        ""
    }
    fn category(&self) -> &str {
        "General"
    }
    /// Departments the tool is limited to; `None` means every department.
    fn allowed_departments(&self) -> Option<&[Department]> {
        None
    }
    fn admin_only(&self) -> bool {
        false
    }
    fn run(&self, session: &Session) -> Result<(), ToolError>;
}

/// All registered tools, keyed by id.
#[derive(Default)]
pub struct ToolRegistry {
    tools: BTreeMap<&'static str, Box<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tool, rejecting empty and duplicate ids.
    pub fn register(&mut self, tool: Box<dyn Tool>) -> Result<(), RegistryError> {
        let id = tool.id();
        if id.trim().is_empty() {
            return Err(RegistryError::EmptyId);
        }
        if self.tools.contains_key(id) {
            return Err(RegistryError::DuplicateId(id.to_string()));
        }
        self.tools.insert(id, tool);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&dyn Tool> {
        self.tools.get(id).map(|t| t.as_ref())
    }

    /// Tools visible to a session: admin-only tools need an admin, and a
    /// department allow-list must include the session's department. Sorted
    /// by (category, name), case-insensitively, for a stable dashboard.
    pub fn tools_for(&self, session: &Session) -> Vec<&dyn Tool> {
        let mut visible: Vec<&dyn Tool> = self
            .tools
            .values()
            .map(|t| t.as_ref())
            .filter(|t| !t.admin_only() || session.is_admin)
            .filter(|t| {
                t.allowed_departments()
                    .map(|depts| depts.contains(&session.department))
                    .unwrap_or(true)
            })
            .collect();
        visible.sort_by_key(|t| (t.category().to_lowercase(), t.name().to_lowercase()));
        visible
    }
}
