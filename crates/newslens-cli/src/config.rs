use anyhow::{anyhow, Context, Result};
use newslens_client::DEFAULT_API_URL;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// On-disk client configuration. Everything is optional; a missing file is
/// the same as an empty one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api_url: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::default_path()?;
        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        Ok(config)
    }

    pub fn default_path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("newslens").join("config.toml"))
            .ok_or_else(|| anyhow!("could not determine the user config directory"))
    }
}

/// Resolve the service base URL: explicit flag, then NEWSLENS_API_URL, then
/// the config file, then the built-in default.
pub fn resolve_api_url(flag: Option<&str>, config: &Config) -> String {
    if let Some(url) = flag {
        return url.trim_end_matches('/').to_string();
    }

    if let Ok(url) = std::env::var("NEWSLENS_API_URL") {
        if !url.trim().is_empty() {
            return url.trim_end_matches('/').to_string();
        }
    }

    config
        .api_url
        .as_deref()
        .map(|url| url.trim_end_matches('/').to_string())
        .unwrap_or_else(|| DEFAULT_API_URL.to_string())
}

/// Directory the TUI writes fetched chart images into.
pub fn chart_cache_dir() -> Result<PathBuf> {
    let base = dirs::cache_dir().unwrap_or_else(std::env::temp_dir);
    let dir = base.join("newslens").join("charts");
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create {}", dir.display()))?;
    Ok(dir)
}
