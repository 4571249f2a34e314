use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub log_level: Option<String>,
    pub store: StoreConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Backing JSON file for the product collection
    pub path: PathBuf,
    /// Write indented JSON
    pub pretty: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("productos.json"),
            pretty: true,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: Some("info".to_string()),
            store: StoreConfig::default(),
        }
    }
}

impl Config {
    /// Resolve configuration.
    ///
    /// An explicit path must load. Otherwise the first readable file among
    /// [`Config::search_paths`] wins, and defaults apply when none is usable.
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        if let Some(path) = config_path {
            return Self::from_yaml_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        for candidate in Self::search_paths().iter().filter(|p| p.is_file()) {
            match Self::from_yaml_file(candidate) {
                Ok(config) => return Ok(config),
                Err(e) => log::warn!("Skipping config {}: {:#}", candidate.display(), e),
            }
        }

        log::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// User config dir first, then the working directory.
    pub fn search_paths() -> Vec<PathBuf> {
        let file_name = format!("{}.yml", env!("CARGO_PKG_NAME"));
        dirs::config_dir()
            .map(|dir| dir.join(env!("CARGO_PKG_NAME")).join(&file_name))
            .into_iter()
            .chain(std::iter::once(PathBuf::from(&file_name)))
            .collect()
    }

    fn from_yaml_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).context("Failed to read config file")?;
        let config = serde_yaml::from_str(&content).context("Failed to parse config file")?;
        log::info!("Loaded config from: {}", path.display());
        Ok(config)
    }

    /// Log filter for env_logger when RUST_LOG is unset
    pub fn log_filter(&self) -> &str {
        self.log_level.as_deref().unwrap_or("info")
    }
}
