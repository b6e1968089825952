use tt_core::{Task, TaskPriority, TaskStatus};

use serde::{Deserialize, Serialize};

/// Which task collection a filter runs over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TaskScope {
    #[default]
    All,
    /// Tasks assigned to the current session user
    Mine,
}

/// Composable task filter. Unset criteria pass everything through; set
/// criteria compose with logical AND.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskFilter {
    pub scope: TaskScope,
    /// Case-insensitive substring match against title or description
    pub search: Option<String>,
    pub status: Option<TaskStatus>,
    pub priority: Option<TaskPriority>,
}

impl TaskFilter {
    /// Whether the task passes the search/status/priority criteria. Scope is
    /// applied by the caller, which knows the session.
    pub fn matches(&self, task: &Task) -> bool {
        if let Some(ref term) = self.search {
            let term = term.to_lowercase();
            if !term.is_empty()
                && !task.title.to_lowercase().contains(&term)
                && !task.description.to_lowercase().contains(&term)
            {
                return false;
            }
        }

        if let Some(status) = self.status
            && task.status != status
        {
            return false;
        }

        if let Some(priority) = self.priority
            && task.priority != priority
        {
            return false;
        }

        true
    }
}
