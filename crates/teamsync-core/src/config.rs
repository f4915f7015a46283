//! Persisted local state: the bridge endpoint URL, kept across sessions
//! in `<config_dir>/teamsync/config.toml`. Everything else is ephemeral
//! and re-derived from the last pull plus local edits.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserConfig {
    #[serde(default)]
    pub bridge_url: Option<String>,
}

impl UserConfig {
    /// Set the bridge URL, rejecting anything that is not an http(s)
    /// endpoint.
    pub fn set_bridge_url(&mut self, url: &str) -> Result<()> {
        let trimmed = url.trim();
        if !trimmed.starts_with("http") {
            anyhow::bail!("bridge URL must start with http: got '{trimmed}'");
        }
        self.bridge_url = Some(trimmed.to_string());
        Ok(())
    }
}

/// Path of the user config file, when a config directory exists on this
/// platform.
#[must_use]
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("teamsync/config.toml"))
}

/// Load the user config, defaulting when the file is missing.
pub fn load_user_config() -> Result<UserConfig> {
    match config_path() {
        Some(path) => load_from(&path),
        None => Ok(UserConfig::default()),
    }
}

/// Persist the user config, creating the parent directory as needed.
pub fn save_user_config(config: &UserConfig) -> Result<()> {
    let path = config_path().context("no config directory on this platform")?;
    save_to(config, &path)
}

fn load_from(path: &Path) -> Result<UserConfig> {
    if !path.exists() {
        return Ok(UserConfig::default());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    toml::from_str::<UserConfig>(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))
}

fn save_to(config: &UserConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    let content = toml::to_string_pretty(config).context("Failed to serialize config")?;
    std::fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
}
