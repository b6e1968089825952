use crate::{
    CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult, DEFAULT_CONFIG_DIR,
    LoggingConfig, SeedConfig, ValidationConfig,
};

use std::path::PathBuf;

use log::info;
use serde::Deserialize;

/// Application configuration, assembled from three sources in increasing
/// precedence: built-in defaults, `config.toml` in the config directory,
/// then `TT_*` environment variables.
///
/// `load()` never validates; call [`Config::validate`] afterwards so every
/// limit error is caught at startup rather than on first use.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub logging: LoggingConfig,
    pub validation: ValidationConfig,
    pub seed: SeedConfig,
}

impl Config {
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        // First run: create the directory so a later save has somewhere to go
        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &PathBuf) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.clone(),
            source: e,
        })
    }

    /// Config directory: `TT_CONFIG_DIR` when set, else `./.teamtrack`.
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.validation.validate()?;

        Ok(())
    }

    /// One-line-per-section summary, logged at startup.
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
        info!(
            "  validation: title={}, desc={}, team={}",
            self.validation.max_title_length,
            self.validation.max_description_length,
            self.validation.default_max_team_size
        );
        info!(
            "  seed: {}",
            if self.seed.enabled {
                "enabled"
            } else {
                "disabled"
            }
        );
    }

    fn apply_env_overrides(&mut self) {
        env_override_parse("TT_LOG_LEVEL", &mut self.logging.level);
        env_override_bool("TT_LOG_COLORED", &mut self.logging.colored);
        if let Ok(path) = std::env::var("TT_LOG_FILE") {
            self.logging.file = Some(path);
        }

        env_override_parse(
            "TT_VALIDATION_MAX_TITLE_LENGTH",
            &mut self.validation.max_title_length,
        );
        env_override_parse(
            "TT_VALIDATION_MAX_DESCRIPTION_LENGTH",
            &mut self.validation.max_description_length,
        );
        env_override_parse(
            "TT_VALIDATION_DEFAULT_MAX_TEAM_SIZE",
            &mut self.validation.default_max_team_size,
        );

        env_override_bool("TT_SEED_ENABLED", &mut self.seed.enabled);
    }
}

// An unset variable leaves the target alone; so does one that fails to parse.

fn env_override_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
    if let Ok(val) = std::env::var(var_name)
        && let Ok(parsed) = val.parse()
    {
        *target = parsed;
    }
}

fn env_override_bool(var_name: &str, target: &mut bool) {
    if let Ok(val) = std::env::var(var_name) {
        *target = val == "true" || val == "1";
    }
}
