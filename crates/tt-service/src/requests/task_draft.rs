use tt_core::TaskPriority;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskDraft {
    /// Must reference an existing project
    pub project_id: Uuid,
    pub title: String,
    pub description: String,
    pub due_date: DateTime<Utc>,
    pub priority: TaskPriority,
    /// Must reference an existing user; the display name is snapshotted at
    /// commit time
    pub assignee_id: Uuid,
}
