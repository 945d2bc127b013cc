//! Configuration loader and validator
//!
//! Loads poller configuration from TOML files in the configs/ directory.

use log::info;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::extension::constants::{MAX_REQUEST_SIZE, MIN_REQUEST_SIZE};
use crate::extension::types::ExtensionType;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Poller configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PollerConfig {
    /// Controller type the session should accept
    #[serde(default = "default_expected")]
    pub expected: ExtensionType,

    /// Bytes to request per poll
    #[serde(default = "default_request_size")]
    pub request_size: usize,

    /// Delay between polls in milliseconds
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,

    /// Connect retries before giving up
    #[serde(default = "default_connect_retries")]
    pub connect_retries: u32,
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self {
            expected: default_expected(),
            request_size: default_request_size(),
            poll_interval_ms: default_poll_interval_ms(),
            connect_retries: default_connect_retries(),
        }
    }
}

fn default_expected() -> ExtensionType {
    ExtensionType::Any
}
fn default_request_size() -> usize {
    MIN_REQUEST_SIZE
}
fn default_poll_interval_ms() -> u64 {
    10
}
fn default_connect_retries() -> u32 {
    3
}

impl PollerConfig {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;

        info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }

    /// Load the default configuration file (configs/default.toml),
    /// falling back to built-in defaults when it does not exist.
    pub fn load_default() -> Result<Self, ConfigError> {
        let path = Path::new("configs/default.toml");

        if path.exists() {
            Self::load(path)
        } else {
            info!("No config file found, using built-in defaults");
            Ok(Self::default())
        }
    }

    /// Validate field ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_REQUEST_SIZE..=MAX_REQUEST_SIZE).contains(&self.request_size) {
            return Err(ConfigError::Invalid(format!(
                "request_size {} outside [{}, {}]",
                self.request_size, MIN_REQUEST_SIZE, MAX_REQUEST_SIZE
            )));
        }

        if self.expected == ExtensionType::None {
            return Err(ConfigError::Invalid(
                "expected type None would reject every controller".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = PollerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.request_size, MIN_REQUEST_SIZE);
        assert_eq!(config.expected, ExtensionType::Any);
    }

    #[test]
    fn parse_toml_with_defaults() {
        let config: PollerConfig = toml::from_str(
            r#"
            expected = "Nunchuk"
            request_size = 8
            "#,
        )
        .unwrap();

        assert_eq!(config.expected, ExtensionType::Nunchuk);
        assert_eq!(config.request_size, 8);
        assert_eq!(config.poll_interval_ms, 10);
    }

    #[test]
    fn validate_rejects_bad_request_size() {
        let config = PollerConfig {
            request_size: MAX_REQUEST_SIZE + 1,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_none_expectation() {
        let config = PollerConfig {
            expected: ExtensionType::None,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
