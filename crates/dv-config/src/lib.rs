//! # dv-config
//!
//! Layered configuration loading for DeepVerify using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`DEEPVERIFY_*` prefix, `__` as separator)
//! 2. Project-level `.deepverify/config.toml`
//! 3. User-level `~/.config/deepverify/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `DEEPVERIFY_ANALYSIS__TEXT_DELAY_MS` -> `analysis.text_delay_ms`,
//! `DEEPVERIFY_AUTH__ENTRY_PATH` -> `auth.entry_path`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use dv_config::DvConfig;
//!
//! let config = DvConfig::load_with_dotenv().expect("config");
//! println!("text delay: {:?}", config.analysis.text_delay());
//! ```

mod analysis;
mod auth;
mod error;

pub use analysis::AnalysisConfig;
pub use auth::AuthConfig;
pub use error::ConfigError;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable prefix for every setting.
pub const ENV_PREFIX: &str = "DEEPVERIFY_";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DvConfig {
    #[serde(default)]
    pub analysis: AnalysisConfig,
    #[serde(default)]
    pub auth: AuthConfig,
}

impl DvConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` when a source fails to parse and
    /// `ConfigError::InvalidValue` when a value is out of range.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// See [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        if let Err(error) = dotenvy::dotenv()
            && !error.not_found()
        {
            return Err(ConfigError::InvalidValue {
                field: ".env".into(),
                reason: error.to_string(),
            });
        }
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or layer extra providers.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(".deepverify/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Check cross-field constraints that serde defaults cannot express.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.analysis.validate()?;
        self.auth.validate()
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("deepverify").join("config.toml"))
    }
}
