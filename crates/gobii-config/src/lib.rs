//! # gobii-config
//!
//! Layered configuration loading for Gobii API callers using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`GOBII_*` prefix, `__` as separator)
//! 2. An explicit file passed to [`GobiiConfig::load_with_file`]
//! 3. Project-level `.gobii/config.toml`
//! 4. User-level `~/.config/gobii/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `GOBII_API__KEY` -> `api.key`, `GOBII_GENERAL__DEBUG` -> `general.debug`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use gobii_config::GobiiConfig;
//!
//! let config = GobiiConfig::load_with_dotenv().expect("config");
//! if config.api.is_configured() {
//!     println!("API root: {}", config.api.base_url);
//! }
//! ```
//!
//! The client crate never reads this configuration itself; callers pass the
//! key and base URL to it explicitly.

mod api;
mod error;
mod general;

pub use api::ApiConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GobiiConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl GobiiConfig {
    /// Load configuration from TOML files and environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source is malformed or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::extract(Self::figment())
    }

    /// Like [`load`](Self::load), with `path` layered above the project file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `path` or another source is malformed.
    pub fn load_with_file(path: &Path) -> Result<Self, ConfigError> {
        Self::extract(Self::figment_with(Some(path)))
    }

    /// Load `.env` from the current directory first, then [`load`](Self::load).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source is malformed or a value is invalid.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// The provider chain used by [`load`](Self::load).
    #[must_use]
    pub fn figment() -> Figment {
        Self::figment_with(None)
    }

    fn figment_with(explicit: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(".gobii/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        if let Some(path) = explicit {
            figment = figment.merge(Toml::file_exact(path));
        }

        figment.merge(Env::prefixed("GOBII_").split("__"))
    }

    fn extract(figment: Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Check cross-field constraints serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.api.validate()?;
        self.general.validate()
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("gobii").join("config.toml"))
    }
}
