//! Configuration loading.
//!
//! The config file is optional: with no `--config` flag and no
//! `CHICK_FEED_CONFIG` variable the built-in defaults apply. The feed
//! locations themselves are fixed constants, not configuration.

use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct AppConfig {
    pub request_timeout_ms: u64,
    pub tick_interval_ms: u64,
    pub error_log_path: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            request_timeout_ms: 10_000,
            tick_interval_ms: 250,
            error_log_path: PathBuf::from("tmp/chick-feed-errors.log"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid config value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        match config_path_from_args().or_else(config_path_from_env) {
            Some(path) => {
                let config = Self::from_path(&path)?;
                config.validate()?;
                Ok(config)
            }
            None => Ok(Self::default()),
        }
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.request_timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "request_timeout_ms",
                reason: "must be > 0".to_string(),
            });
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "tick_interval_ms",
                reason: "must be > 0".to_string(),
            });
        }
        if self.error_log_path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "error_log_path",
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

fn config_path_from_env() -> Option<PathBuf> {
    std::env::var("CHICK_FEED_CONFIG").ok().map(PathBuf::from)
}

fn config_path_from_args() -> Option<PathBuf> {
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--config" {
            return args.next().map(PathBuf::from);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        assert!(AppConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_timeout_rejected() {
        let config = AppConfig {
            request_timeout_ms: 0,
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_tick_rejected() {
        let config = AppConfig {
            tick_interval_ms: 0,
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let config: AppConfig = toml::from_str("request_timeout_ms = 3000").unwrap();
        assert_eq!(config.request_timeout_ms, 3_000);
        assert_eq!(config.tick_interval_ms, AppConfig::default().tick_interval_ms);
    }

    #[test]
    fn unknown_keys_rejected() {
        assert!(toml::from_str::<AppConfig>("feed_base_url = \"http://x\"").is_err());
    }
}
