use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_alternate_screen() -> bool {
    true
}

/// UI preferences for the interactive viewer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Redraw timeout in milliseconds when no input arrives
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Whether to switch to the terminal's alternate screen
    #[serde(default = "default_alternate_screen")]
    pub alternate_screen: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            alternate_screen: default_alternate_screen(),
        }
    }
}

impl Config {
    /// Load config from the default location (~/.config/plaza/config.toml)
    pub fn load() -> Result<Self> {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load config from a specific path, falling back to defaults when the
    /// file does not exist. Malformed TOML is an error.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config at {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("failed to parse config at {}", path.display()))?;
        Ok(config)
    }

    /// Save config to a specific path, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("plaza").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.tick_rate_ms, 250);
        assert!(config.alternate_screen);
    }

    #[test]
    fn save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = Config {
            tick_rate_ms: 100,
            alternate_screen: false,
        };
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.tick_rate_ms, 100);
        assert!(!loaded.alternate_screen);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "tick_rate_ms = 500\n").unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.tick_rate_ms, 500);
        assert!(loaded.alternate_screen);
    }

    #[test]
    fn malformed_toml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "tick_rate_ms = \"soon\"\n").unwrap();

        assert!(Config::load_from(&path).is_err());
    }
}
