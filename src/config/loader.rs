use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;
use crate::store::FileBackend;

/// Why `config.toml` could not be turned into a usable `Config`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// `luganda-lexicon/config.toml` under the platform config dir
    /// (`~/.config` on Linux), or under the working directory when the
    /// platform has none.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("luganda-lexicon").join("config.toml")
    }

    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Read and validate `path`. An absent file means all defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// The gateway needs an http(s) base URL plus non-blank model and
    /// voice names.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let gateway = &self.gateway;

        if !(gateway.base_url.starts_with("http://") || gateway.base_url.starts_with("https://"))
        {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "Gateway base_url '{}' must start with http:// or https://",
                    gateway.base_url
                ),
            });
        }

        for (name, value) in [
            ("text_model", &gateway.text_model),
            ("speech_model", &gateway.speech_model),
            ("voice", &gateway.voice),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::ValidationError {
                    message: format!("Gateway {} must not be empty", name),
                });
            }
        }

        Ok(())
    }

    /// Data directory for the persistence store.
    pub fn data_dir(&self) -> PathBuf {
        self.storage
            .data_dir
            .clone()
            .unwrap_or_else(FileBackend::default_dir)
    }
}
