//! Application configuration management.

use serde::Deserialize;

use crate::types::ZeroMajor;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Formatter configuration.
    pub formatter: FormatterConfig,
    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Formatter configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FormatterConfig {
    /// How a zero major part is rendered.
    pub zero_major: ZeroMajor,
    /// Currency code used when a caller does not name one.
    pub default_currency: Option<String>,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Fallback `EnvFilter` directive when `RUST_LOG` is unset.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}

fn default_filter() -> String {
    "currfmt=info".to_string()
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("CURRFMT").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
