use crate::error::{ItaskError, Result};
use crate::persistence::DEFAULT_STORAGE_KEY;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_LOG_LEVEL: &str = "warn";
const DEFAULT_LOG_FORMAT: &str = "pretty";

/// Configuration for itask, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ItaskConfig {
    /// Storage key the todo list is persisted under
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// Tracing filter used when `RUST_LOG` is not set (e.g. "warn", "itask=debug")
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// "pretty" or "json"
    #[serde(default = "default_log_format")]
    pub log_format: String,
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

fn default_log_format() -> String {
    DEFAULT_LOG_FORMAT.to_string()
}

impl Default for ItaskConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            log_level: default_log_level(),
            log_format: default_log_format(),
        }
    }
}

/// A settable configuration key, as typed on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    StorageKey,
    LogLevel,
    LogFormat,
}

impl ConfigKey {
    pub fn all() -> &'static [ConfigKey] {
        &[
            ConfigKey::StorageKey,
            ConfigKey::LogLevel,
            ConfigKey::LogFormat,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            ConfigKey::StorageKey => "storage-key",
            ConfigKey::LogLevel => "log-level",
            ConfigKey::LogFormat => "log-format",
        }
    }

    pub fn parse(name: &str) -> Result<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|key| key.name() == name)
            .ok_or_else(|| ItaskError::Api(format!("Unknown config key: {}", name)))
    }
}

impl ItaskConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(ItaskError::Io)?;
        let config: ItaskConfig =
            serde_json::from_str(&content).map_err(ItaskError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(ItaskError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(ItaskError::Serialization)?;
        fs::write(config_path, content).map_err(ItaskError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: ConfigKey) -> &str {
        match key {
            ConfigKey::StorageKey => &self.storage_key,
            ConfigKey::LogLevel => &self.log_level,
            ConfigKey::LogFormat => &self.log_format,
        }
    }

    pub fn set(&mut self, key: ConfigKey, value: &str) -> Result<()> {
        let value = value.trim();
        match key {
            ConfigKey::StorageKey => {
                let valid = !value.is_empty()
                    && value
                        .chars()
                        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
                if !valid {
                    return Err(ItaskError::Api(format!(
                        "Invalid storage key '{}': use letters, digits, '-' or '_'",
                        value
                    )));
                }
                self.storage_key = value.to_string();
            }
            ConfigKey::LogLevel => {
                if value.is_empty() {
                    return Err(ItaskError::Api("Log level cannot be empty".to_string()));
                }
                self.log_level = value.to_string();
            }
            ConfigKey::LogFormat => {
                if value != "pretty" && value != "json" {
                    return Err(ItaskError::Api(format!(
                        "Invalid log format '{}': expected 'pretty' or 'json'",
                        value
                    )));
                }
                self.log_format = value.to_string();
            }
        }
        Ok(())
    }
}
