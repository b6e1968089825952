use serde::Deserialize;

/// Controls whether the in-memory transport starts with the demo dataset.
///
/// Disabled mainly by tests that want an empty store.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    pub enabled: bool,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}
