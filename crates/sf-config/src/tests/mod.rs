mod config;
mod log_level;

use crate::CONFIG_DIR_ENV;

use std::env;

use tempfile::TempDir;

const SF_ENV_VARS: [&str; 7] = [
    "SF_API_BASE_URL",
    "SF_API_FALLBACK_CREDENTIAL",
    "SF_SESSION_STORE",
    "SF_SESSION_FILE",
    "SF_LOG_LEVEL",
    "SF_LOG_COLORED",
    "SF_LOG_FILE",
];

/// RAII guard for environment variables - automatically restores on drop
pub(crate) struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::set_var(key, value);
            Self { key, original }
        }
    }

    pub(crate) fn remove(key: &'static str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::remove_var(key);
            Self { key, original }
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(val) => env::set_var(self.key, val),
                None => env::remove_var(self.key),
            }
        }
    }
}

/// Create a temp config directory, point SF_CONFIG_DIR at it and clear
/// any SF_* overrides inherited from the surrounding environment.
pub(crate) fn setup_config_dir() -> (TempDir, Vec<EnvGuard>) {
    let temp = TempDir::new().unwrap();
    let mut guards: Vec<EnvGuard> = SF_ENV_VARS.into_iter().map(EnvGuard::remove).collect();
    guards.push(EnvGuard::set(CONFIG_DIR_ENV, temp.path().to_str().unwrap()));
    (temp, guards)
}
