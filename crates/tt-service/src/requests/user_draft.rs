use tt_core::Role;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDraft {
    pub name: String,
    /// Must be unique within the user store
    pub email: String,
    pub password: String,
    pub role: Role,
}
