//! Configuration management for ontoview.
//!
//! Configuration is loaded from multiple sources with the following priority:
//! 1. Environment variables (highest priority)
//! 2. Project-local `ontoview.toml` file
//! 3. User config `~/.config/ontoview/config.toml`
//! 4. Built-in defaults (lowest priority)

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

mod defaults;

pub use defaults::*;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Ontology source configuration.
    pub ontology: OntologyConfig,

    /// HTTP server configuration.
    pub server: ServerConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ontology: OntologyConfig::default(),
            server: ServerConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from default locations.
    ///
    /// Searches for config in order:
    /// 1. `./ontoview.toml` (project local)
    /// 2. `~/.config/ontoview/config.toml` (user config)
    /// 3. Falls back to defaults
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = if Path::new("ontoview.toml").exists() {
            Self::read_file("ontoview.toml")?
        } else if let Some(user_config) = dirs::config_dir()
            .map(|dir| dir.join("ontoview").join("config.toml"))
            .filter(|path| path.exists())
        {
            Self::read_file(user_config)?
        } else {
            Self::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Load configuration from a specific file, with env overrides applied.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let mut config = Self::read_file(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    fn read_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Apply environment variable overrides.
    fn apply_env_overrides(&mut self) {
        if let Ok(path) = std::env::var("ONTOVIEW_DATA_PATH") {
            self.ontology.data_path = path;
        }
        if let Ok(root) = std::env::var("ONTOVIEW_ROOT_ID") {
            self.ontology.root_id = root;
        }
        if let Ok(host) = std::env::var("ONTOVIEW_HOST") {
            self.server.host = host;
        }
        // PORT is what hosting platforms inject.
        if let Ok(port) = std::env::var("PORT") {
            if let Ok(n) = port.parse() {
                self.server.port = n;
            }
        }
    }
}

/// Ontology source configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OntologyConfig {
    /// Path to the obographs JSON document.
    pub data_path: String,

    /// Id of the term used as the default visualization entry point.
    pub root_id: String,
}

impl Default for OntologyConfig {
    fn default() -> Self {
        Self {
            data_path: DEFAULT_DATA_PATH.to_string(),
            root_id: DEFAULT_ROOT_ID.to_string(),
        }
    }
}

/// HTTP server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Listen address.
    pub host: String,

    /// Listen port.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}
