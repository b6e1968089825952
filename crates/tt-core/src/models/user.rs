//! User account entity.

use crate::Role;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user account.
///
/// The password is a plain equality credential for the demo login flow, not
/// a security mechanism.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    /// Unique within the user store
    pub email: String,
    pub password: String,
    pub role: Role,
}

impl User {
    pub fn new(name: String, email: String, password: String, role: Role) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            email,
            password,
            role,
        }
    }

    pub fn is_manager(&self) -> bool {
        self.role == Role::Manager
    }
}
