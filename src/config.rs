use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::theme::Theme;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub editor: EditorConfig,
    pub indicators: IndicatorConfig,
    pub log: LogConfig,
    pub theme_name: String,
    #[serde(skip)]
    pub theme: Theme,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub show_line_numbers: bool,
    /// Lines kept between the cursor and the viewport edge when scrolling.
    pub scroll_margin: usize,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            show_line_numbers: true,
            scroll_margin: 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicatorConfig {
    pub show_on_start: bool,
    pub up_text: String,
    pub down_text: String,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            show_on_start: false,
            up_text: String::from("↑ Up"),
            down_text: String::from("↓ Down"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `tracing_subscriber::EnvFilter` directive; `WORDJUMP_LOG` overrides it.
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: String::from("info"),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            editor: EditorConfig::default(),
            indicators: IndicatorConfig::default(),
            log: LogConfig::default(),
            theme_name: String::from("gruvbox"),
            theme: Theme::gruvbox(),
        }
    }
}

impl Config {
    /// Load the user config, writing the defaults on first run.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            let config = Config::default();
            config.save_to(&config_path)?;
            Ok(config)
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let mut config: Config =
            toml::from_str(&content).with_context(|| "Failed to parse config file")?;
        config.theme = Theme::from_name(&config.theme_name);
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write config: {}", path.display()))?;
        Ok(())
    }

    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::project_dirs()?.config_dir().join("config.toml"))
    }

    pub fn log_dir() -> Result<PathBuf> {
        Ok(Self::project_dirs()?.data_dir().to_path_buf())
    }

    fn project_dirs() -> Result<ProjectDirs> {
        ProjectDirs::from("com", "wordjump", "wordjump")
            .context("Could not determine config directory")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.editor.show_line_numbers);
        assert!(!config.indicators.show_on_start);
        assert_eq!(config.log.level, "info");
        assert_eq!(config.theme.name, "gruvbox");
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "theme_name = \"dark\"\n[indicators]\nshow_on_start = true\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert!(config.indicators.show_on_start);
        assert_eq!(config.indicators.up_text, "↑ Up");
        assert_eq!(config.editor.scroll_margin, 2);
        assert_eq!(config.theme.name, "dark");
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.indicators.down_text = String::from("next");
        config.theme_name = String::from("dark");
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.indicators, config.indicators);
        assert_eq!(loaded.theme_name, "dark");
        assert_eq!(loaded.theme.name, "dark");
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "editor = [").unwrap();
        assert!(Config::load_from(&path).is_err());
    }
}
