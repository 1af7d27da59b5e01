//! Runner DTOs
//!
//! Request bodies for runner-related admin operations.

use serde::Serialize;

/// Body of `POST /admin/v1/runners/{account}/{runner}/action`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RunnerAction {
    /// Action the hub should perform on the runner
    pub action: RunnerActionKind,
}

impl RunnerAction {
    /// Ask the runner to stop every task it is executing
    pub fn stop_all_tasks() -> Self {
        Self {
            action: RunnerActionKind::StopAllTasks,
        }
    }
}

/// Actions accepted by the runner action endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunnerActionKind {
    StopAllTasks,
}
