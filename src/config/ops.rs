use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use super::Config;
use crate::builtin::BuiltinEditor;

impl Config {
    /// Default config location: `~/.config/edswitch/config.toml`.
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir().context("Could not determine home directory")?;
        Ok(home.join(".config").join("edswitch").join("config.toml"))
    }

    /// Load the config from the default location, falling back to defaults
    /// when no file exists yet.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    /// Load the config from `path`.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config at {}", path.display()))?;
        Ok(config)
    }

    /// Save the config to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    /// Save the config to `path`, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config dir {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        Ok(())
    }

    /// Get a config value by dot-separated key path, e.g. `editors.vscode`.
    pub fn get_value(&self, key: &str) -> Result<String> {
        if let Some(name) = key.strip_prefix("editors.") {
            if let Some(kind) = BuiltinEditor::from_name(name) {
                return Ok(self.editors.path(kind).to_string());
            }
        }
        anyhow::bail!("Unknown config key: {key}")
    }

    /// Set a config value by dot-separated key path, e.g. `editors.vscode`.
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        if let Some(name) = key.strip_prefix("editors.") {
            if let Some(kind) = BuiltinEditor::from_name(name) {
                self.editors.set_path(kind, value.to_string());
                return Ok(());
            }
        }
        anyhow::bail!("Unknown config key: {key}")
    }
}
