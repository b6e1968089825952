
use std::env;

use tempfile::TempDir;

/// Scoped environment override: applies a value on construction and puts the
/// previous one back on drop, so `#[serial]` tests cannot leak state into
/// each other.
pub(crate) struct EnvGuard {
    key: &'static str,
    previous: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        Self::apply(key, Some(value))
    }

    #[allow(dead_code)]
    pub(crate) fn remove(key: &'static str) -> Self {
        Self::apply(key, None)
    }

    fn apply(key: &'static str, value: Option<&str>) -> Self {
        let previous = env::var(key).ok();
        unsafe {
            match value {
                Some(v) => env::set_var(key, v),
                None => env::remove_var(key),
            }
        }
        Self { key, previous }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match self.previous.take() {
                Some(v) => env::set_var(self.key, v),
                None => env::remove_var(self.key),
            }
        }
    }
}

/// Temp directory wired up as the config dir via TT_CONFIG_DIR.
pub(crate) fn setup_config_dir() -> (TempDir, EnvGuard) {
    let temp = TempDir::new().unwrap();
    let guard = EnvGuard::set("TT_CONFIG_DIR", temp.path().to_str().unwrap());
    (temp, guard)
}
