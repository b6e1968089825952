use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

// Bounds each configurable limit must stay within
pub const MIN_TITLE_LENGTH: usize = 1;
pub const MAX_TITLE_LENGTH: usize = 500;
pub const DEFAULT_MAX_TITLE_LENGTH: usize = 200;

pub const MIN_DESCRIPTION_LENGTH: usize = 0;
pub const MAX_DESCRIPTION_LENGTH: usize = 100000;
pub const DEFAULT_MAX_DESCRIPTION_LENGTH: usize = 10000;

pub const MIN_CONFIGURABLE_TEAM_SIZE: usize = 1;
pub const MAX_CONFIGURABLE_TEAM_SIZE: usize = 50;
pub const DEFAULT_MAX_TEAM_SIZE: usize = 5;

/// Field limits applied on the write path.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Maximum length for project and task titles
    pub max_title_length: usize,
    /// Maximum length for project and task descriptions
    pub max_description_length: usize,
    /// Team size cap applied to projects created without an explicit cap
    pub default_max_team_size: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_title_length: DEFAULT_MAX_TITLE_LENGTH,
            max_description_length: DEFAULT_MAX_DESCRIPTION_LENGTH,
            default_max_team_size: DEFAULT_MAX_TEAM_SIZE,
        }
    }
}

impl ValidationConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.max_title_length < MIN_TITLE_LENGTH || self.max_title_length > MAX_TITLE_LENGTH {
            return Err(ConfigError::config(format!(
                "validation.max_title_length must be between {} and {} (got {})",
                MIN_TITLE_LENGTH, MAX_TITLE_LENGTH, self.max_title_length
            )));
        }

        if self.max_description_length < MIN_DESCRIPTION_LENGTH
            || self.max_description_length > MAX_DESCRIPTION_LENGTH
        {
            return Err(ConfigError::config(format!(
                "validation.max_description_length must be between {} and {} (got {})",
                MIN_DESCRIPTION_LENGTH, MAX_DESCRIPTION_LENGTH, self.max_description_length
            )));
        }

        if self.default_max_team_size < MIN_CONFIGURABLE_TEAM_SIZE
            || self.default_max_team_size > MAX_CONFIGURABLE_TEAM_SIZE
        {
            return Err(ConfigError::config(format!(
                "validation.default_max_team_size must be between {} and {} (got {})",
                MIN_CONFIGURABLE_TEAM_SIZE, MAX_CONFIGURABLE_TEAM_SIZE, self.default_max_team_size
            )));
        }

        Ok(())
    }
}
