//! User configuration management

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::task::{SortKey, SortOrder};

pub const APP_NAME: &str = "taskdeck";
const CONFIG_FILE: &str = "config.toml";
const DATA_FILE: &str = "tasks.txt";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub list: ListConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_file: Option<String>,

    #[serde(default = "default_true")]
    pub skip_malformed_lines: bool,

    #[serde(default = "default_true")]
    pub backup: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_file: None,
            skip_malformed_lines: true,
            backup: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_sort_key: Option<String>,

    #[serde(default = "default_sort_order")]
    pub default_sort_order: String,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            default_sort_key: None,
            default_sort_order: default_sort_order(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_sort_order() -> String {
    "ascending".to_string()
}

impl Config {
    /// Datafile path from config, with `~/` expanded, falling back to
    /// `<app dir>/tasks.txt`
    pub fn data_file(&self) -> Result<PathBuf> {
        match &self.storage.data_file {
            Some(path) => Ok(expand_home(path)),
            None => Ok(get_app_dir()?.join(DATA_FILE)),
        }
    }

    /// Sort applied by `list` when none is given on the command line
    pub fn default_sort(&self) -> Result<Option<(SortKey, SortOrder)>> {
        let Some(key) = &self.list.default_sort_key else {
            return Ok(None);
        };
        let key = key.parse::<SortKey>().context("Invalid list.default_sort_key in config")?;
        let order = self
            .list
            .default_sort_order
            .parse::<SortOrder>()
            .context("Invalid list.default_sort_order in config")?;
        Ok(Some((key, order)))
    }
}

fn expand_home(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}

/// Directory holding config and data: `$XDG_CONFIG_HOME/taskdeck` on Linux,
/// `~/.taskdeck` elsewhere
pub fn get_app_dir() -> Result<PathBuf> {
    #[cfg(target_os = "linux")]
    let dir = dirs::config_dir().map(|d| d.join(APP_NAME));

    #[cfg(not(target_os = "linux"))]
    let dir = dirs::home_dir().map(|h| h.join(format!(".{APP_NAME}")));

    dir.context("Cannot locate a home directory for taskdeck data")
}

pub fn config_path() -> Result<PathBuf> {
    Ok(get_app_dir()?.join(CONFIG_FILE))
}

pub fn load_config() -> Result<Config> {
    load_config_from(&config_path()?)
}

/// Read config from `path`. A missing file yields the defaults.
pub fn load_config_from(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;
    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config at {}", path.display()))?;
    Ok(config)
}

pub fn save_config(config: &Config) -> Result<()> {
    save_config_to(config, &config_path()?)
}

pub fn save_config_to(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_config_is_default() -> Result<()> {
        let temp = tempdir()?;
        let config = load_config_from(&temp.path().join("config.toml"))?;
        assert_eq!(config, Config::default());
        assert!(config.storage.skip_malformed_lines);
        assert!(config.storage.backup);
        assert_eq!(config.default_sort()?, None);
        Ok(())
    }

    #[test]
    fn test_partial_config_fills_defaults() -> Result<()> {
        let temp = tempdir()?;
        let path = temp.path().join("config.toml");
        fs::write(
            &path,
            "[storage]\ndata_file = \"/tmp/tasks.txt\"\n\n[list]\ndefault_sort_key = \"deadline\"\n",
        )?;

        let config = load_config_from(&path)?;
        assert_eq!(config.data_file()?, PathBuf::from("/tmp/tasks.txt"));
        assert!(config.storage.backup);
        assert_eq!(
            config.default_sort()?,
            Some((SortKey::DeadlineOrEndDate, SortOrder::Ascending))
        );
        Ok(())
    }

    #[test]
    fn test_bad_sort_key_in_config() {
        let mut config = Config::default();
        config.list.default_sort_key = Some("priority".to_string());
        assert!(config.default_sort().is_err());
    }

    #[test]
    fn test_config_roundtrip() -> Result<()> {
        let temp = tempdir()?;
        let path = temp.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.storage.skip_malformed_lines = false;
        config.list.default_sort_key = Some("start".to_string());
        config.list.default_sort_order = "desc".to_string();
        save_config_to(&config, &path)?;

        assert_eq!(load_config_from(&path)?, config);
        Ok(())
    }
}
