//! # Configuration Persistence
//!
//! Host-facing appearance settings stored in
//! `~/.config/filelink/config.json` (platform-appropriate directory via the
//! `directories` crate). Persisted settings: the active theme name and the
//! spinner cadence in milliseconds.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Persisted widget configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// The name of the active theme (must match a built-in theme name).
    #[serde(default = "default_theme_name")]
    pub theme: String,

    /// Spinner tick cadence in milliseconds.
    #[serde(default = "default_spinner_interval_ms")]
    pub spinner_interval_ms: u64,
}

fn default_theme_name() -> String {
    "Catppuccin Mocha".to_string()
}

fn default_spinner_interval_ms() -> u64 {
    100
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme_name(),
            spinner_interval_ms: default_spinner_interval_ms(),
        }
    }
}

impl Config {
    /// Load configuration from disk. Returns `Config::default()` if the
    /// file does not exist or cannot be parsed.
    pub fn load() -> Self {
        Self::try_load().unwrap_or_default()
    }

    fn try_load() -> Result<Self> {
        let path = Self::config_path()?;
        Self::load_from(&path)
    }

    /// Load configuration from a specific path. Returns `Config::default()`
    /// if the file does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Save the current configuration to disk.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        self.save_to(&path)
    }

    /// Save the current configuration to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// The spinner cadence as a `Duration`.
    pub fn spinner_interval(&self) -> Duration {
        Duration::from_millis(self.spinner_interval_ms)
    }

    fn config_path() -> Result<PathBuf> {
        let dirs = directories::ProjectDirs::from("", "", "filelink")
            .context("Could not determine config directory")?;
        Ok(dirs.config_dir().join("config.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.theme, "Catppuccin Mocha");
        assert_eq!(config.spinner_interval(), Duration::from_millis(100));
    }

    #[test]
    fn test_deserialize_missing_fields_use_defaults() {
        let config: Config = serde_json::from_str("{}").expect("deserialize");
        assert_eq!(config.theme, "Catppuccin Mocha");
        assert_eq!(config.spinner_interval_ms, 100);
    }

    #[test]
    fn test_save_to_load_from_roundtrip() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let config_path = temp_dir.path().join("subdir").join("config.json");

        let config = Config {
            theme: "Nord".to_string(),
            spinner_interval_ms: 80,
        };

        config.save_to(&config_path).expect("save_to");
        let loaded = Config::load_from(&config_path).expect("load_from");
        assert_eq!(loaded.theme, "Nord");
        assert_eq!(loaded.spinner_interval(), Duration::from_millis(80));
    }

    #[test]
    fn test_load_from_missing_file_returns_default() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let config_path = temp_dir.path().join("does_not_exist.json");

        let loaded = Config::load_from(&config_path).expect("load_from");
        assert_eq!(loaded.theme, "Catppuccin Mocha");
    }

    #[test]
    fn test_deny_unknown_fields() {
        let json = r#"{"theme": "Nord", "unknown_field": true}"#;
        let result: Result<Config, _> = serde_json::from_str(json);
        assert!(result.is_err(), "should reject unknown fields");
    }
}
