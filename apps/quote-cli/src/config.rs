//! Quote CLI configuration module.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`BOXOFFICE_*`)
//! 2. Config file (`--config <path>`, or `./boxoffice.toml` when present)
//! 3. Defaults (this file)

use std::path::Path;

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use tracing::level_filters::LevelFilter;

/// Environment variable prefix, e.g. `BOXOFFICE_LOG_FORMAT=json`.
pub const ENV_PREFIX: &str = "BOXOFFICE";

/// Config file looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "boxoffice";

/// Largest supported number of currency decimals.
pub const MAX_CURRENCY_DECIMALS: u32 = 6;

/// Quote CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteConfig {
    /// Default log level (`RUST_LOG` still wins when set)
    pub log_level: String,

    /// Log output format
    pub log_format: LogFormat,

    /// Minimum decimals shown on prices (2 for cents)
    pub currency_decimals: u32,
}

/// How log lines are rendered on stderr.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Multi-line, human readable
    #[default]
    Pretty,

    /// One JSON object per line, for log shippers
    Json,
}

impl Default for QuoteConfig {
    fn default() -> Self {
        QuoteConfig {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
            currency_decimals: boxoffice_core::CURRENCY_MINOR_DIGITS,
        }
    }
}

impl QuoteConfig {
    /// Load configuration from defaults, an optional file and the environment.
    ///
    /// An explicit `path` must exist; the default `boxoffice.toml` is optional.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_from(
            path,
            Environment::with_prefix(ENV_PREFIX).try_parsing(true),
        )
    }

    fn load_from(path: Option<&Path>, env: Environment) -> Result<Self, ConfigError> {
        let defaults = QuoteConfig::default();

        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        let config: QuoteConfig = Config::builder()
            .set_default("log_level", defaults.log_level)?
            .set_default("log_format", "pretty")?
            .set_default("currency_decimals", i64::from(defaults.currency_decimals))?
            .add_source(file)
            .add_source(env)
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    /// Check values the deserializer cannot.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.log_level.parse::<LevelFilter>().is_err() {
            return Err(ConfigError::InvalidValue("log_level".to_string()));
        }

        if self.currency_decimals > MAX_CURRENCY_DECIMALS {
            return Err(ConfigError::InvalidValue("currency_decimals".to_string()));
        }

        Ok(())
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Failed to read configuration: {0}")]
    Source(#[from] config::ConfigError),
}
