//! Project entity - organizational container for tasks and a team.

use crate::{ProjectStatus, TeamMember};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A project is the top-level organizational container.
///
/// Invariants enforced by the write path: `team_members` never exceeds
/// `max_team_size` and never contains the same user twice; `end_date` is
/// never before `start_date`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub status: ProjectStatus,
    /// Owning manager; may mutate this project even without the global
    /// manager role
    pub manager_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub team_members: Vec<TeamMember>,
    pub max_team_size: usize,
}

impl Project {
    /// Create a new active project with an empty team.
    pub fn new(
        title: String,
        description: String,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
        manager_id: Uuid,
        max_team_size: usize,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            description,
            start_date,
            end_date,
            status: ProjectStatus::Active,
            manager_id,
            created_at: Utc::now(),
            team_members: Vec::new(),
            max_team_size,
        }
    }

    /// Current team size. Derived so it cannot drift from the member list.
    pub fn team_size(&self) -> usize {
        self.team_members.len()
    }

    pub fn has_member(&self, user_id: Uuid) -> bool {
        self.team_members.iter().any(|m| m.id == user_id)
    }

    pub fn is_active(&self) -> bool {
        self.status == ProjectStatus::Active
    }
}
