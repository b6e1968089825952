use crate::{CoreError, Result as CoreErrorResult, Role};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Per-assignment capability attached to a team member.
///
/// Closed vocabulary; anything outside it is rejected at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Permission {
    CreateTasks,
    EditTasks,
    DeleteTasks,
    AssignTasks,
    ManageTeam,
}

impl Permission {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CreateTasks => "create-tasks",
            Self::EditTasks => "edit-tasks",
            Self::DeleteTasks => "delete-tasks",
            Self::AssignTasks => "assign-tasks",
            Self::ManageTeam => "manage-team",
        }
    }

    /// Default permission set granted when a user of the given role is
    /// assigned to a team.
    pub fn defaults_for(role: Role) -> Vec<Permission> {
        match role {
            Role::Manager => vec![
                Self::CreateTasks,
                Self::EditTasks,
                Self::DeleteTasks,
                Self::AssignTasks,
                Self::ManageTeam,
            ],
            Role::TeamMember => vec![Self::CreateTasks, Self::EditTasks],
        }
    }
}

impl FromStr for Permission {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "create-tasks" => Ok(Self::CreateTasks),
            "edit-tasks" => Ok(Self::EditTasks),
            "delete-tasks" => Ok(Self::DeleteTasks),
            "assign-tasks" => Ok(Self::AssignTasks),
            "manage-team" => Ok(Self::ManageTeam),
            _ => Err(CoreError::InvalidPermission {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for Permission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
