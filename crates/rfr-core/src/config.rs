//! Global configuration loaded from `~/.config/rfr/config.toml`.
//!
//! Branch and target are per-invocation inputs and never live here; the file
//! only carries the download base and the HTTP timeout knobs.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Well-known download host of the firmware distribution.
pub const DEFAULT_BASE_URL: &str = "https://downloads.openwrt.org";

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_connect_timeout_secs() -> u64 {
    15
}

fn default_timeout_secs() -> u64 {
    30
}

/// Tool configuration. All fields have defaults, so an empty file is valid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RfrConfig {
    /// Root of the download site. Overridable mainly for mirrors and tests.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Connect timeout for the manifest GET, in seconds.
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    /// Total request timeout for the manifest GET, in seconds. Always set:
    /// an unbounded hang in CI is worse than a failure.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for RfrConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            connect_timeout_secs: default_connect_timeout_secs(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl RfrConfig {
    /// Rejects a base URL that is not an absolute http(s) URL.
    pub fn validate(&self) -> Result<()> {
        let parsed = url::Url::parse(&self.base_url)
            .with_context(|| format!("invalid base_url {:?}", self.base_url))?;
        match parsed.scheme() {
            "http" | "https" => Ok(()),
            other => anyhow::bail!("base_url scheme must be http or https, got {:?}", other),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("rfr")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<RfrConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = RfrConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: RfrConfig = toml::from_str(&data)
        .with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("validate {}", path.display()))?;
    Ok(cfg)
}
