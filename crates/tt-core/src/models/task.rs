//! Task entity.

use crate::{TaskPriority, TaskStatus};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: Uuid,
    /// Must reference an existing project; a task whose reference no longer
    /// resolves is a data-integrity error, not something views drop silently
    pub project_id: Uuid,
    pub title: String,
    pub description: String,
    pub due_date: DateTime<Utc>,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub assignee_id: Uuid,
    /// Display-name snapshot taken when the assignee was set; not updated
    /// when the user record changes
    pub assignee_name: String,
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Create a new not-started task.
    pub fn new(
        project_id: Uuid,
        title: String,
        description: String,
        due_date: DateTime<Utc>,
        priority: TaskPriority,
        assignee_id: Uuid,
        assignee_name: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            project_id,
            title,
            description,
            due_date,
            status: TaskStatus::NotStarted,
            priority,
            assignee_id,
            assignee_name,
            created_at: Utc::now(),
        }
    }

    /// Overdue = past due and not completed. A completed task is never
    /// overdue, whatever its due date.
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        self.status != TaskStatus::Completed && self.due_date < now
    }
}
