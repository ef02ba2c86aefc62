//! # desk-config
//!
//! Layered configuration loading for DeskHub using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`DESKHUB_*` prefix, `__` as separator)
//! 2. Project-level `.deskhub/config.toml`
//! 3. User-level `~/.config/deskhub/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `DESKHUB_API__BASE_URL` -> `api.base_url`,
//! `DESKHUB_CONFIGURATOR__PURCHASE_MIN_SCORE` -> `configurator.purchase_min_score`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use desk_config::DeskConfig;
//!
//! let config = DeskConfig::load_with_dotenv().expect("config");
//! println!("backend: {}", config.api.normalized_base_url());
//! ```

mod api;
mod configurator;
mod error;
mod general;

pub use api::ApiConfig;
pub use configurator::{ConfiguratorConfig, PlannerKind};
pub use error::ConfigError;
pub use general::GeneralConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable prefix for all settings.
pub const ENV_PREFIX: &str = "DESKHUB_";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DeskConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub configurator: ConfiguratorConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl DeskConfig {
    /// Load configuration from all sources (TOML files + environment variables)
    /// and validate it.
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source cannot be parsed and
    /// [`ConfigError::InvalidValue`] if a value is out of range.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Extract and validate from an arbitrary figment (used by tests).
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".deskhub/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Reject values the application cannot run with.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.api.is_configured() {
            return Err(invalid(
                "api.base_url",
                format!("'{}' is not an http(s) URL", self.api.base_url),
            ));
        }
        if self.api.timeout_secs == 0 {
            return Err(invalid("api.timeout_secs", "must be greater than zero"));
        }
        if self.configurator.generation_timeout_ms == 0 {
            return Err(invalid(
                "configurator.generation_timeout_ms",
                "must be greater than zero",
            ));
        }
        if self.configurator.purchase_min_score > 100 {
            return Err(invalid(
                "configurator.purchase_min_score",
                format!("{} is above 100", self.configurator.purchase_min_score),
            ));
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("deskhub").join("config.toml"))
    }
}

fn invalid(field: &str, reason: impl Into<String>) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        reason: reason.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = DeskConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.general.default_limit, 20);
        assert_eq!(config.configurator.purchase_min_score, 100);
    }

    #[test]
    fn score_above_hundred_is_rejected() {
        let mut config = DeskConfig::default();
        config.configurator.purchase_min_score = 101;
        let err = config.validate().expect_err("should reject");
        assert!(err.to_string().contains("configurator.purchase_min_score"));
    }

    #[test]
    fn zero_api_timeout_is_rejected() {
        let mut config = DeskConfig::default();
        config.api.timeout_secs = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { field, .. }) if field == "api.timeout_secs"
        ));
    }
}
