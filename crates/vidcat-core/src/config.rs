use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Global configuration loaded from `~/.config/vidcat/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VidcatConfig {
    /// Title shown above the video list.
    #[serde(default = "default_app_title")]
    pub app_title: String,
    /// Catalog database file. If missing, `~/.local/state/vidcat/videos.db` is used.
    #[serde(default)]
    pub database_path: Option<PathBuf>,
}

fn default_app_title() -> String {
    "Fun Music Videos".to_string()
}

impl Default for VidcatConfig {
    fn default() -> Self {
        Self {
            app_title: default_app_title(),
            database_path: None,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("vidcat")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<VidcatConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = VidcatConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)
        .with_context(|| format!("read config: {}", path.display()))?;
    let cfg: VidcatConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}
