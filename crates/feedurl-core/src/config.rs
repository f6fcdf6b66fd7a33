use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// How the CLI prints results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Plain,
    /// One JSON object per line.
    Json,
}

/// Global configuration loaded from `~/.config/feedurl/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedUrlConfig {
    /// Site URL that relative links are resolved against when `--base` is not given.
    #[serde(default)]
    pub base_url: Option<String>,
    /// Base API/site URL that `join` appends resource paths to.
    #[serde(default)]
    pub api_base_url: Option<String>,
    /// Output format: "plain" (default) or "json".
    #[serde(default)]
    pub output: OutputFormat,
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("feedurl")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<FeedUrlConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = FeedUrlConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load configuration from an explicit path.
pub fn load_from(path: &Path) -> Result<FeedUrlConfig> {
    let data = fs::read_to_string(path)?;
    let cfg: FeedUrlConfig = toml::from_str(&data)?;
    Ok(cfg)
}
