use attrdoc_engine::{InternalTagKind, TagsPolicy};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub tags: TagsConfig,
    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
}

/// Internal tags accepted on declarations. Empty means none.
#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TagsConfig {
    #[serde(default)]
    pub allowed: Vec<InternalTagKind>,
}

#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticsConfig {
    /// Treat warnings as errors.
    #[serde(default)]
    pub warn_error: bool,
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/attrdoc");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    pub fn tags_policy(&self) -> TagsPolicy {
        TagsPolicy::allowing(self.tags.allowed.iter().copied())
    }

    pub fn warn_error(&self) -> bool {
        self.diagnostics.warn_error
    }
}
