//! Configuration file support.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

/// Application configuration loaded from config file.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Default data directory
    pub data_dir: Option<PathBuf>,

    /// Default user name
    pub user: Option<String>,

    /// AI suggestion settings
    pub openai: Option<OpenAiConfig>,
}

/// OpenAI-specific settings.
#[derive(Debug, Default, Deserialize)]
pub struct OpenAiConfig {
    /// API key for the suggestion service
    pub api_key: Option<String>,

    /// Model name override
    pub model: Option<String>,
}

impl Config {
    /// Load configuration from the default config file location.
    ///
    /// Returns default config if the file doesn't exist.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)
            .with_context(|| format!("failed to read config file: {}", config_path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", config_path.display()))
    }

    /// Returns the path to the config file.
    ///
    /// Default: `~/.config/memox/config.toml`
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("memox")
            .join("config.toml")
    }

    /// Resolve the data directory, with CLI argument taking precedence.
    ///
    /// Precedence order:
    /// 1. CLI `--data-dir` argument
    /// 2. Config file `data_dir` setting
    /// 3. Platform data directory (`~/.local/share/memox` on Linux)
    pub fn data_dir(&self, cli_dir: Option<&PathBuf>) -> PathBuf {
        cli_dir
            .cloned()
            .or_else(|| self.data_dir.clone())
            .unwrap_or_else(|| {
                dirs::data_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join("memox")
            })
    }

    /// Resolve the acting user name.
    ///
    /// Precedence order:
    /// 1. CLI `--user` argument
    /// 2. Config file `user` setting
    /// 3. "default"
    pub fn user(&self, cli_user: Option<&String>) -> String {
        cli_user
            .cloned()
            .or_else(|| self.user.clone())
            .unwrap_or_else(|| "default".to_string())
    }

    /// Resolve the OpenAI API key, if any.
    ///
    /// Precedence order:
    /// 1. `OPENAI_API_KEY` environment variable
    /// 2. Config file `[openai] api_key` setting
    pub fn api_key(&self) -> Option<String> {
        std::env::var("OPENAI_API_KEY")
            .ok()
            .filter(|key| !key.is_empty())
            .or_else(|| self.openai.as_ref().and_then(|o| o.api_key.clone()))
    }

    /// Returns the configured model override, if any.
    pub fn model(&self) -> Option<String> {
        self.openai.as_ref().and_then(|o| o.model.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_no_data_dir() {
        let config = Config::default();
        assert!(config.data_dir.is_none());
        assert!(config.user.is_none());
    }

    #[test]
    fn data_dir_prefers_cli_arg() {
        let config = Config {
            data_dir: Some(PathBuf::from("/config/memos")),
            ..Config::default()
        };
        let cli_dir = PathBuf::from("/cli/memos");
        assert_eq!(
            config.data_dir(Some(&cli_dir)),
            PathBuf::from("/cli/memos")
        );
    }

    #[test]
    fn data_dir_falls_back_to_config() {
        let config = Config {
            data_dir: Some(PathBuf::from("/config/memos")),
            ..Config::default()
        };
        assert_eq!(config.data_dir(None), PathBuf::from("/config/memos"));
    }

    #[test]
    fn user_prefers_cli_arg() {
        let config = Config {
            user: Some("alice".to_string()),
            ..Config::default()
        };
        assert_eq!(config.user(Some(&"bob".to_string())), "bob");
        assert_eq!(config.user(None), "alice");
    }

    #[test]
    fn user_falls_back_to_default() {
        let config = Config::default();
        assert_eq!(config.user(None), "default");
    }

    #[test]
    fn config_path_is_in_config_dir() {
        let path = Config::config_path();
        assert!(path.ends_with("memox/config.toml"));
    }

    #[test]
    fn model_comes_from_openai_section() {
        let config: Config = toml::from_str(
            r#"
            [openai]
            model = "gpt-4o-mini"
            "#,
        )
        .unwrap();
        assert_eq!(config.model().as_deref(), Some("gpt-4o-mini"));
        assert!(config.openai.as_ref().unwrap().api_key.is_none());
    }
}
