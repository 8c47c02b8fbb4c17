//! Configuration loading and data directory resolution.
//!
//! The config file is optional. Resolution order for the data directory:
//! 1. `MUSICHUB_DATA_DIR` environment variable
//! 2. `data_dir` in `<config dir>/musichub/config.toml`
//! 3. the platform's local data directory, or `./musichub_data`

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigError;

pub const DATA_DIR_ENV: &str = "MUSICHUB_DATA_DIR";

const APP_DIR: &str = "musichub";
const CONFIG_FILE: &str = "config.toml";
const SESSION_FILE: &str = "session.json";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where the session file lives.
    pub data_dir: Option<PathBuf>,
    /// JSON song list to start from instead of the built-in one.
    pub seed_catalog: Option<PathBuf>,
}

impl Config {
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Read a config file. A missing file yields the defaults.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Load from the platform config directory and apply environment
    /// overrides. A config file that cannot be read is logged and the
    /// defaults are used in its place.
    pub fn load() -> Self {
        Self::resolve(config_path().as_deref(), std::env::var(DATA_DIR_ENV).ok())
    }

    /// Read the config file at `path`, if any, then apply a `data_dir`
    /// override. The override applies even when the file is malformed.
    pub fn resolve(path: Option<&Path>, data_dir_override: Option<String>) -> Self {
        let config = match path {
            Some(path) => Self::load_from(path).unwrap_or_else(|e| {
                tracing::error!(path = %path.display(), "Failed to load config, using defaults: {}", e);
                Self::default()
            }),
            None => Self::default(),
        };

        config.with_data_dir_override(data_dir_override)
    }

    /// Replace `data_dir` when `value` is a non-empty path.
    pub fn with_data_dir_override(mut self, value: Option<String>) -> Self {
        if let Some(value) = value.filter(|v| !v.trim().is_empty()) {
            self.data_dir = Some(PathBuf::from(value));
        }
        self
    }

    pub fn data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(default_data_dir)
    }

    pub fn session_path(&self) -> PathBuf {
        self.data_dir().join(SESSION_FILE)
    }
}

pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
}

pub fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .map(|dir| dir.join(APP_DIR))
        .unwrap_or_else(|| PathBuf::from("./musichub_data"))
}
