use error_location::ErrorLocation;
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Deliberately does not say whether the email or the password was wrong
    #[error("Invalid email or password {location}")]
    InvalidCredentials { location: ErrorLocation },

    #[error("User {id} not found {location}")]
    UserNotFound { id: Uuid, location: ErrorLocation },

    #[error("Not authenticated {location}")]
    NotAuthenticated { location: ErrorLocation },
}

impl AuthError {
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidCredentials { .. } => "INVALID_CREDENTIALS",
            Self::UserNotFound { .. } => "USER_NOT_FOUND",
            Self::NotAuthenticated { .. } => "NOT_AUTHENTICATED",
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
