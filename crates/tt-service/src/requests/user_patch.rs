use tt_core::Role;

use serde::{Deserialize, Serialize};

/// Profile edit. Changing the name does not re-sync the snapshots embedded
/// in tasks and project teams; those are per-assignment copies.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<Role>,
}
