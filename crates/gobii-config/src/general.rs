//! Caller-side behaviour settings.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const fn default_poll_interval_secs() -> u64 {
    5
}

const fn default_max_polls() -> u32 {
    120
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Log every request and response at debug level.
    #[serde(default)]
    pub debug: bool,

    /// Delay between polls in `gobii watch`.
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,

    /// Give up watching after this many polls.
    #[serde(default = "default_max_polls")]
    pub max_polls: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            debug: false,
            poll_interval_secs: default_poll_interval_secs(),
            max_polls: default_max_polls(),
        }
    }
}

impl GeneralConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.poll_interval_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "general.poll_interval_secs".into(),
                reason: "must be at least 1".into(),
            });
        }
        Ok(())
    }
}
