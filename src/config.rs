// File: ./src/config.rs
use crate::error::ConfigError;
use crate::storage::LocalStorage;
use directories::ProjectDirs;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const DATA_FILE_ENV: &str = "ROBERT_DATA_FILE";
pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub data_file: Option<PathBuf>,
    pub log_filter: Option<String>,
}

impl Config {
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "robert", "robert").map(|proj| proj.config_dir().join("config.toml"))
    }

    /// Reads the config at its default location. No file means defaults.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Data file precedence: explicit override, then `ROBERT_DATA_FILE`,
    /// then the config file, then the platform data directory.
    pub fn resolve_data_file(&self, cli_override: Option<&Path>) -> PathBuf {
        self.resolve_data_file_with(cli_override, env::var(DATA_FILE_ENV).ok())
    }

    /// Same precedence as `resolve_data_file`, with the environment value
    /// passed in. A blank value counts as unset.
    pub fn resolve_data_file_with(
        &self,
        cli_override: Option<&Path>,
        env_value: Option<String>,
    ) -> PathBuf {
        if let Some(path) = cli_override {
            return path.to_path_buf();
        }
        if let Some(path) = env_value.filter(|p| !p.trim().is_empty()) {
            return PathBuf::from(path);
        }
        if let Some(path) = &self.data_file {
            return path.clone();
        }
        LocalStorage::default_path()
    }

    pub fn log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }
}
