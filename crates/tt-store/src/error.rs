use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Failures at the external fetch/persist boundary.
///
/// The store never retries; a failed persist leaves it at the last
/// known-good snapshot.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Transport unavailable: {message} {location}")]
    Unavailable {
        message: String,
        location: ErrorLocation,
    },

    #[error("Transport rejected request: {message} {location}")]
    Rejected {
        message: String,
        location: ErrorLocation,
    },
}

impl TransportError {
    #[track_caller]
    pub fn unavailable<S: Into<String>>(message: S) -> Self {
        Self::Unavailable {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn rejected<S: Into<String>>(message: S) -> Self {
        Self::Rejected {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Unavailable { .. } => "TRANSPORT_UNAVAILABLE",
            Self::Rejected { .. } => "TRANSPORT_REJECTED",
        }
    }
}

pub type Result<T> = std::result::Result<T, TransportError>;
