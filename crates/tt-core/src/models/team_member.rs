use crate::{Permission, Role, User};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user projection embedded in a project's team list.
///
/// Snapshot taken at assignment time: name, email, and permissions belong to
/// the assignment and do not follow later changes to the source user record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    /// The source user's id
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub assigned_date: DateTime<Utc>,
    pub permissions: Vec<Permission>,
}

impl TeamMember {
    /// Project a user into a team assignment with role-default permissions.
    pub fn from_user(user: &User, assigned_date: DateTime<Utc>) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role,
            assigned_date,
            permissions: Permission::defaults_for(user.role),
        }
    }

    pub fn has_permission(&self, required: Permission) -> bool {
        self.permissions.contains(&required)
    }
}
