use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::metadata::FaviconService;
use crate::record_store::UNCATEGORIZED;

/// Category list a fresh catalog starts with.
pub const DEFAULT_CATEGORIES: &[&str] = &[
    UNCATEGORIZED,
    "Coding",
    "Design",
    "Reading",
    "Music",
    "Social",
    "AI Tools",
    "News",
    "Travel",
];

/// Global configuration loaded from `~/.config/snaplinq/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnaplinqConfig {
    /// Categories seeded into every catalog, in display order.
    pub default_categories: Vec<String>,
    /// Infer missing title/icon/category when adding a link.
    pub auto_fill: bool,
    /// Optional favicon service override; if missing, built-in defaults are used.
    #[serde(default)]
    pub favicon: Option<FaviconService>,
    /// Optional path for the link database (None = XDG state dir).
    #[serde(default)]
    pub database_path: Option<PathBuf>,
    /// Optional path for the session file (None = XDG state dir).
    #[serde(default)]
    pub session_path: Option<PathBuf>,
}

impl Default for SnaplinqConfig {
    fn default() -> Self {
        Self {
            default_categories: DEFAULT_CATEGORIES.iter().map(|s| s.to_string()).collect(),
            auto_fill: true,
            favicon: None,
            database_path: None,
            session_path: None,
        }
    }
}

impl SnaplinqConfig {
    pub fn favicon_service(&self) -> FaviconService {
        self.favicon.clone().unwrap_or_default()
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("snaplinq")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<SnaplinqConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = SnaplinqConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: SnaplinqConfig = toml::from_str(&data)?;
    Ok(cfg)
}
