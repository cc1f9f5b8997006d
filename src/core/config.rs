//! Client configuration
//!
//! Reads/writes `<config dir>/stockroom/config.toml`. Values resolve as
//! CLI flag > environment > file > built-in defaults; the flag and
//! environment layers are applied by the CLI through [`Config::apply_overrides`].

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::banner::DEFAULT_BANNER_DURATION;

/// Default backend base URL
pub const DEFAULT_SERVER: &str = "http://localhost:8080/api/v1";

/// Errors reading or writing the config file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write config {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Could not determine a config directory; pass --config")]
    NoConfigDir,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Backend base URL (e.g. "http://localhost:8080/api/v1")
    pub server: String,

    /// Bearer token (set by `stockroom login`)
    #[serde(skip_serializing_if = "String::is_empty")]
    pub token: String,

    /// Per-request timeout in seconds
    pub timeout_secs: u64,

    /// How long error banners stay visible, in milliseconds
    pub banner_ms: u64,

    /// Page size overrides keyed by resource path (e.g. `products = 10`)
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub page_sizes: BTreeMap<String, u32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: DEFAULT_SERVER.to_string(),
            token: String::new(),
            timeout_secs: 30,
            banner_ms: DEFAULT_BANNER_DURATION.as_millis() as u64,
            page_sizes: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Default config file path, from the platform's config directory
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        directories::ProjectDirs::from("", "", "stockroom")
            .map(|dirs| dirs.config_dir().join("config.toml"))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Load config from disk, or return defaults if the file doesn't exist
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Save config to disk, creating parent directories
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let write_err = |source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(write_err)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(write_err)
    }

    /// Layer flag/environment values over the file values
    pub fn apply_overrides(&mut self, server: Option<&str>, token: Option<&str>) {
        if let Some(server) = server.map(str::trim).filter(|s| !s.is_empty()) {
            self.server = server.to_string();
        }
        if let Some(token) = token.map(str::trim).filter(|t| !t.is_empty()) {
            self.token = token.to_string();
        }
    }

    pub fn token(&self) -> Option<&str> {
        Some(self.token.as_str()).filter(|t| !t.is_empty())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }

    pub fn banner_duration(&self) -> Duration {
        Duration::from_millis(self.banner_ms)
    }

    /// Page size for `resource`, falling back to the resource default
    pub fn page_size(&self, resource: &str, default: u32) -> u32 {
        self.page_sizes
            .get(resource)
            .copied()
            .filter(|n| *n > 0)
            .unwrap_or(default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.server, DEFAULT_SERVER);
        assert!(config.token().is_none());
        assert_eq!(config.banner_duration(), Duration::from_millis(3000));
    }

    #[test]
    fn test_missing_file_loads_defaults() {
        let tmp = TempDir::new().unwrap();
        let config = Config::load(&tmp.path().join("nope.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_load() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nested/config.toml");

        let mut config = Config::default();
        config.server = "http://shop.local/api".to_string();
        config.token = "jwt".to_string();
        config.page_sizes.insert("products".to_string(), 20);
        config.save(&path).unwrap();

        let back = Config::load(&path).unwrap();
        assert_eq!(back, config);
        assert_eq!(back.page_size("products", 5), 20);
        assert_eq!(back.page_size("sizes", 5), 5);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "server = \"http://x\"\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.server, "http://x");
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_invalid_file_is_parse_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "server = [").unwrap();
        assert!(matches!(Config::load(&path), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_overrides_skip_blank_values() {
        let mut config = Config::default();
        config.apply_overrides(Some("  "), Some("tok"));
        assert_eq!(config.server, DEFAULT_SERVER);
        assert_eq!(config.token(), Some("tok"));
    }
}
