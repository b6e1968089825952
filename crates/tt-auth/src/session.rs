//! Current-user session and the role predicates derived from it.

use crate::{AuthError, Result as AuthResult};

use tt_core::{TeamMember, User};
use tt_store::EntityStore;

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use log::{info, warn};
use uuid::Uuid;

/// At most one active user per process.
///
/// Predicates are computed from the current value on every call; nothing is
/// cached, so they can never go stale relative to the session.
#[derive(Debug, Clone, Default)]
pub struct Session {
    current: Option<User>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Exact credential match against the user store. On success the matched
    /// user becomes the active session.
    ///
    /// No lockout or rate limiting; the password is a plain equality check.
    #[track_caller]
    pub fn login(&mut self, store: &EntityStore, email: &str, password: &str) -> AuthResult<User> {
        let user = store
            .users
            .iter()
            .find(|u| u.email == email && u.password == password)
            .cloned()
            .ok_or_else(|| AuthError::InvalidCredentials {
                location: ErrorLocation::from(Location::caller()),
            })?;

        info!("Logged in as {} ({})", user.name, user.role);
        self.current = Some(user.clone());
        Ok(user)
    }

    /// Clear the session unconditionally.
    pub fn logout(&mut self) {
        if let Some(user) = self.current.take() {
            info!("Logged out {}", user.name);
        }
    }

    /// Substitute the active user without a credential check.
    ///
    /// Demo/testing affordance, not a security boundary: callers use it to
    /// flip between seeded accounts. An unknown id leaves the session as-is.
    #[track_caller]
    pub fn switch_user(&mut self, store: &EntityStore, user_id: Uuid) -> AuthResult<User> {
        let user = store
            .users
            .get(user_id)
            .ok_or_else(|| AuthError::UserNotFound {
                id: user_id,
                location: ErrorLocation::from(Location::caller()),
            })?;

        warn!(
            "Session switched to {} ({}) without credential check",
            user.name, user.role
        );
        self.current = Some(user.clone());
        Ok(user)
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    pub fn is_manager(&self) -> bool {
        self.current.as_ref().is_some_and(|u| u.is_manager())
    }

    pub fn current_user(&self) -> Option<&User> {
        self.current.as_ref()
    }

    pub fn current_user_id(&self) -> Option<Uuid> {
        self.current.as_ref().map(|u| u.id)
    }

    /// Project every user in the store into a team-member view with
    /// role-default permissions, dated `now`.
    pub fn team_member_view(store: &EntityStore, now: DateTime<Utc>) -> Vec<TeamMember> {
        store
            .users
            .iter()
            .map(|u| TeamMember::from_user(u, now))
            .collect()
    }
}
