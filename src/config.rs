use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Compiled-in defaults, checked by build.rs.
const DEFAULT_CONFIG: &str = include_str!("default_config.toml");

/// Looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "mdsite.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    Read {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    Parse {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub paths: PathsConfig,
    pub site: SiteConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub static_dir: PathBuf,
    pub content_dir: PathBuf,
    pub template: PathBuf,
    pub output_dir: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Config::compiled_default().paths
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub base_path: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Config::compiled_default().site
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::compiled_default()
    }
}

impl Config {
    /// The defaults embedded from `default_config.toml`.
    pub fn compiled_default() -> Self {
        let table: toml::Table = DEFAULT_CONFIG.parse().unwrap_or_default();
        let path = |key: &str| -> PathBuf {
            table
                .get("paths")
                .and_then(|paths| paths.get(key))
                .and_then(|value| value.as_str())
                .unwrap_or_default()
                .into()
        };
        let base_path = table
            .get("site")
            .and_then(|site| site.get("base_path"))
            .and_then(|value| value.as_str())
            .unwrap_or("/")
            .to_string();

        Self {
            paths: PathsConfig {
                static_dir: path("static_dir"),
                content_dir: path("content_dir"),
                template: path("template"),
                output_dir: path("output_dir"),
            },
            site: SiteConfig { base_path },
        }
    }

    /// Load config from a TOML file, or return defaults if it does not exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            config_path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            config_path: path.to_path_buf(),
            source,
        })
    }
}
