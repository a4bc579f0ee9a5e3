//! Configuration management for the credential store
//!
//! Settings are read from an optional `config.toml` next to the binary with
//! `CREDSTORE_*` environment overrides. Every field has a default so the
//! store works out of the box with no config file at all.

use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

/// Store configuration loaded once at startup
#[derive(Debug, Deserialize, Clone)]
pub struct StoreConfig {
    /// Path to the JSON credential file
    /// Environment: CREDSTORE_CREDENTIALS_FILE
    #[serde(default = "default_credentials_file")]
    pub credentials_file: String,
}

fn default_credentials_file() -> String {
    "users_hashed.json".to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            credentials_file: default_credentials_file(),
        }
    }
}

impl StoreConfig {
    /// Load configuration from config.toml (if present) with environment overrides
    pub fn load() -> Result<Self, config::ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config").required(false))
            .add_source(Environment::with_prefix("CREDSTORE"))
            .build()?;

        let config: StoreConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the credential file location as a PathBuf
    pub fn credentials_path(&self) -> PathBuf {
        PathBuf::from(&self.credentials_file)
    }

    fn validate(&self) -> Result<(), config::ConfigError> {
        if self.credentials_file.is_empty() {
            return Err(config::ConfigError::Message(
                "credentials_file cannot be empty".into(),
            ));
        }

        Ok(())
    }
}
