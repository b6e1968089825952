mod config;
mod error;
mod log_level;
mod logging_config;
mod seed_config;
mod validation_config;

pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use seed_config::SeedConfig;
pub use validation_config::ValidationConfig;

const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_CONFIG_DIR: &str = ".teamtrack";
const CONFIG_FILENAME: &str = "config.toml";
const CONFIG_DIR_ENV: &str = "TT_CONFIG_DIR";

#[cfg(test)]
mod tests;
