use crate::{Result as ServiceResult, ServiceError};

use tt_core::Project;

use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

/// The specific team invariant a project violates, for caller display.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeamViolation {
    #[error("No team members assigned")]
    EmptyTeam,

    #[error("Team size {size} exceeds maximum {max}")]
    SizeExceeded { size: usize, max: usize },

    #[error("Duplicate team member {id}")]
    DuplicateMember { id: Uuid },
}

/// Validates records before they are committed
pub struct RecordValidator;

impl RecordValidator {
    /// Validate a text field. Length is counted after trimming, so
    /// whitespace-only input cannot satisfy a non-zero minimum.
    #[track_caller]
    pub fn validate_string(
        value: &str,
        field_name: &str,
        min_length: usize,
        max_length: usize,
    ) -> ServiceResult<()> {
        let trimmed = value.trim();

        if trimmed.chars().count() < min_length {
            return Err(ServiceError::validation(
                format!("{} must be at least {} characters", field_name, min_length),
                Some(field_name),
            ));
        }

        if trimmed.chars().count() > max_length {
            return Err(ServiceError::validation(
                format!("{} must not exceed {} characters", field_name, max_length),
                Some(field_name),
            ));
        }

        Ok(())
    }

    #[track_caller]
    pub fn validate_date_range(
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
    ) -> ServiceResult<()> {
        if end_date < start_date {
            return Err(ServiceError::validation(
                "end_date must not be before start_date",
                Some("end_date"),
            ));
        }

        Ok(())
    }

    /// Check the team invariants: non-empty, within the size cap, no
    /// duplicate member ids. Reports the first violation found.
    pub fn validate_team(project: &Project) -> Result<(), TeamViolation> {
        if project.team_members.is_empty() {
            return Err(TeamViolation::EmptyTeam);
        }

        if project.team_size() > project.max_team_size {
            return Err(TeamViolation::SizeExceeded {
                size: project.team_size(),
                max: project.max_team_size,
            });
        }

        let mut seen = Vec::with_capacity(project.team_size());
        for member in &project.team_members {
            if seen.contains(&member.id) {
                return Err(TeamViolation::DuplicateMember { id: member.id });
            }
            seen.push(member.id);
        }

        Ok(())
    }
}
