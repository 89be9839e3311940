//! Configuration loading using Figment.
//!
//! Sources, lowest to highest precedence:
//! 1. Built-in defaults
//! 2. `cats.toml` in the working directory (or the file named by `CATS_CONFIG`)
//! 3. Environment variables prefixed with `CATS_`, e.g. `CATS_BASE_URL`

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const ENV_PREFIX: &str = "CATS_";
pub const CONFIG_PATH_VAR: &str = "CATS_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "cats.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] figment::Error),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the backend cats API, without the `/cats` suffix.
    pub base_url: String,

    /// Interface the inbound API binds to.
    pub host: String,

    pub port: u16,

    /// `EnvFilter` directive (trace, debug, info, warn, error, or per-target).
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            host: "127.0.0.1".to_string(),
            port: 8080,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load from the default file location and the environment.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var(CONFIG_PATH_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());
        Self::load_from(path)
    }

    /// Load from `path` (a missing file is skipped) and the environment.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed(ENV_PREFIX))
            .extract()?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_url.trim().is_empty() {
            return Err(ConfigError::Invalid("base_url cannot be empty".to_string()));
        }
        if self.port == 0 {
            return Err(ConfigError::Invalid("port must be greater than 0".to_string()));
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
