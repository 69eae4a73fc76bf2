//! Configuration, read from `~/.config/feedpane/config.toml` at startup.
//! A commented default file is written on first run; missing fields fall
//! back to defaults.

use std::fs;
use std::path::PathBuf;

use serde::Deserialize;

use crate::app::{FeedPaneError, Result};
use crate::fetcher::parallel::DEFAULT_WORKERS;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Language of the bundled feed directory used for suggestions.
    pub language: String,
    /// Worker cap for refresh-all.
    pub workers: usize,
    /// Override for the subscription storage directory.
    pub data_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            workers: DEFAULT_WORKERS,
            data_dir: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = Self::default_config_path()?;

        if !path.exists() {
            Self::write_default(&path)?;
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| FeedPaneError::Config(format!("{}: {e}", path.display())))?;
        Ok(config)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| FeedPaneError::Config("Could not find config directory".into()))?;
        Ok(config_dir.join("feedpane").join("config.toml"))
    }

    fn write_default(path: &PathBuf) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, Self::default_config_content())?;
        Ok(())
    }

    fn default_config_content() -> &'static str {
        r#"# feedpane configuration

# Language of the bundled feed directory ("en" or "zh").
language = "en"

# Maximum concurrent fetches during a refresh-all.
workers = 10

# Uncomment to store the subscription list somewhere else.
# data_dir = "/path/to/dir"
"#
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_content_parses_to_defaults() {
        let config: Config = toml::from_str(Config::default_config_content()).unwrap();
        assert_eq!(config.language, "en");
        assert_eq!(config.workers, DEFAULT_WORKERS);
        assert!(config.data_dir.is_none());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = toml::from_str(r#"language = "zh""#).unwrap();
        assert_eq!(config.language, "zh");
        assert_eq!(config.workers, DEFAULT_WORKERS);
    }
}
