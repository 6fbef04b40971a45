//! Task API connection settings.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

fn default_base_url() -> String {
    String::from("https://gobii.ai/api/v1")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// API key sent as `X-Api-Key`.
    #[serde(default)]
    pub key: String,

    /// API root, without the `/tasks/...` suffix.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Whole-request timeout applied to the HTTP transport. `0` disables it.
    #[serde(default)]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            key: String::new(),
            base_url: default_base_url(),
            timeout_secs: 0,
        }
    }
}

impl ApiConfig {
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.key.trim().is_empty()
    }

    /// Transport timeout, if one is configured.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        if self.timeout_secs == 0 {
            None
        } else {
            Some(Duration::from_secs(self.timeout_secs))
        }
    }

    /// The API key, or an error naming where to set it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotConfigured`] if the key is empty.
    pub fn require_key(&self) -> Result<&str, ConfigError> {
        if self.is_configured() {
            Ok(self.key.trim())
        } else {
            Err(ConfigError::NotConfigured {
                field: "api.key".into(),
                env: "GOBII_API__KEY".into(),
            })
        }
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if !(self.base_url.starts_with("https://") || self.base_url.starts_with("http://")) {
            return Err(ConfigError::InvalidValue {
                field: "api.base_url".into(),
                reason: format!("expected an http(s) URL, got '{}'", self.base_url),
            });
        }
        Ok(())
    }
}
