//! Runtime configuration consumed by hosts of the core.
//!
//! # Invariants
//! - Every value is validated at load; a `CoreConfig` in hand is always usable.
//! - Missing keys fall back to defaults, malformed keys are errors.

use crate::logging::{default_log_level, normalize_level};
use crate::model::language::LanguageCode;
use serde::Deserialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub const ENV_LOG_LEVEL: &str = "PERSONNEL_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "PERSONNEL_LOG_DIR";
pub const ENV_FALLBACK_LANG: &str = "PERSONNEL_FALLBACK_LANG";

/// Invalid configuration value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    pub key: &'static str,
    pub details: String,
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid `{}`: {}", self.key, self.details)
    }
}

impl Error for ConfigError {}

/// Snapshot of configuration values.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawCoreConfig")]
pub struct CoreConfig {
    pub log_level: String,
    /// File logging stays off while unset.
    pub log_dir: Option<PathBuf>,
    /// Display language for hosts without a per-user preference.
    pub fallback_language: Option<LanguageCode>,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level().to_string(),
            log_dir: None,
            fallback_language: None,
        }
    }
}

/// Unchecked wire form; becomes a `CoreConfig` only through `validate`.
#[derive(Deserialize)]
#[serde(default)]
struct RawCoreConfig {
    log_level: String,
    log_dir: Option<PathBuf>,
    fallback_language: Option<LanguageCode>,
}

impl Default for RawCoreConfig {
    fn default() -> Self {
        let CoreConfig {
            log_level,
            log_dir,
            fallback_language,
        } = CoreConfig::default();
        Self {
            log_level,
            log_dir,
            fallback_language,
        }
    }
}

impl TryFrom<RawCoreConfig> for CoreConfig {
    type Error = ConfigError;

    fn try_from(raw: RawCoreConfig) -> Result<Self, Self::Error> {
        let config = Self {
            log_level: raw.log_level,
            log_dir: raw.log_dir,
            fallback_language: raw.fallback_language,
        };
        config.validate()?;
        Ok(config)
    }
}

impl CoreConfig {
    /// Loads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through `lookup`, one call per key.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let present = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(level) = present(ENV_LOG_LEVEL) {
            config.log_level = level;
        }
        if let Some(dir) = present(ENV_LOG_DIR) {
            config.log_dir = Some(PathBuf::from(dir.trim()));
        }
        if let Some(lang) = present(ENV_FALLBACK_LANG) {
            let lang = LanguageCode::parse(lang.trim()).map_err(|err| ConfigError {
                key: ENV_FALLBACK_LANG,
                details: err.to_string(),
            })?;
            config.fallback_language = Some(lang);
        }

        config.validate()?;
        Ok(config)
    }

    /// Checks values that deserialization alone cannot.
    pub fn validate(&self) -> Result<(), ConfigError> {
        normalize_level(&self.log_level).map_err(|err| ConfigError {
            key: ENV_LOG_LEVEL,
            details: err.to_string(),
        })?;
        if let Some(dir) = &self.log_dir {
            if !dir.is_absolute() {
                return Err(ConfigError {
                    key: ENV_LOG_DIR,
                    details: format!("path must be absolute, got `{}`", dir.display()),
                });
            }
        }
        Ok(())
    }
}
