use crate::error::ConfigError;
use serde_derive::Deserialize;
use std::str::FromStr;

/// Status page of the Arris SB6183 on its fixed management address.
pub const DEFAULT_STATUS_URL: &str = "http://192.168.100.1/RgConnect.asp";

fn default_log_level() -> String {
    "warn".to_string()
}

/// Diagnostic settings read from the environment.
///
/// Nothing here reaches the fetch or the rendered output.
#[derive(Deserialize, Debug)]
pub struct AppConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl AppConfig {
    pub fn log_level(&self) -> tracing::Level {
        tracing::Level::from_str(self.log_level.as_str()).unwrap_or(tracing::Level::WARN)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

pub(crate) fn load_app_config() -> Result<AppConfig, ConfigError> {
    envy::from_env::<AppConfig>().map_err(ConfigError::env_parse)
}

/// Loads [`AppConfig`], falling back to the defaults when the environment
/// does not deserialize. The error is handed back so it can be logged once
/// tracing is up.
pub(crate) fn load_app_config_or_default() -> (AppConfig, Option<ConfigError>) {
    match load_app_config() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    }
}

#[derive(Debug, Clone)]
pub struct ModemConfig {
    pub url: String,
}

impl ModemConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}
