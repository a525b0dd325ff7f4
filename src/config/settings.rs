use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

use crate::template::DEFAULT_ID_PREFIX;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub template: TemplateSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is not set
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    pub json: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TemplateSettings {
    /// Prefix for generated template identifiers
    #[serde(default = "default_id_prefix")]
    pub id_prefix: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_id_prefix() -> String {
    DEFAULT_ID_PREFIX.to_string()
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        // Load .env file if exists
        let _ = dotenvy::dotenv();

        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let builder = Config::builder()
            // Start with default values
            .set_default("logging.level", default_log_level())?
            .set_default("logging.json", false)?
            .set_default("template.id_prefix", default_id_prefix())?
            // Load config file if exists
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // GUNIT_LOGGING__LEVEL, GUNIT_TEMPLATE__ID_PREFIX, etc.
            .add_source(
                Environment::with_prefix("GUNIT")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        builder.build()?.try_deserialize()
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

impl Default for TemplateSettings {
    fn default() -> Self {
        Self {
            id_prefix: default_id_prefix(),
        }
    }
}
