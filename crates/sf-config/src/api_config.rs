use crate::{ConfigError, ConfigErrorResult, DEFAULT_BASE_URL};

use serde::Deserialize;

/// Connection settings for the remote content backend.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Backend origin, without the `/api` suffix (e.g. "https://cms.example.com")
    pub base_url: String,
    /// Pre-shared bearer used for calls made before a user session exists.
    /// Not a user identity; only opens the backend's access gate.
    pub fallback_credential: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_BASE_URL),
            fallback_credential: String::new(),
        }
    }
}

impl ApiConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ConfigError::api(format!(
                "api.base_url must start with http:// or https://, got '{}'",
                self.base_url
            )));
        }

        if self.fallback_credential.trim().is_empty() {
            return Err(ConfigError::api(
                "api.fallback_credential must be set (SF_API_FALLBACK_CREDENTIAL)",
            ));
        }

        Ok(())
    }

    /// Base URL with any trailing slash removed
    pub fn normalized_base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}
