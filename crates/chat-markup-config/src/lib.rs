use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Failed to read emoji list at {list_path}: {source}")]
    EmojiListReadError {
        list_path: PathBuf,
        source: std::io::Error,
    },
}

/// Settings for parsing chat messages, stored as TOML.
///
/// ```toml
/// emoji_names = ["smile", "tada"]
/// emoji_names_file = "~/.config/chat-markup/emoji.txt"
/// max_nesting = 32
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Inline emoji whitelist.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoji_names: Option<Vec<String>>,
    /// File with one emoji name per line; `#` starts a comment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoji_names_file: Option<PathBuf>,
    /// Emphasis nesting limit; unlimited when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_nesting: Option<usize>,
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            log::debug!("No config file at {}", config_path.display());
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in the emoji list path
        if let Some(list) = config.emoji_names_file.take() {
            config.emoji_names_file = Some(Self::expand_path(&list).unwrap_or(list));
        }

        log::debug!("Loaded config from {}", config_path.display());
        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/chat-markup");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// The full emoji whitelist: inline names plus the names file.
    ///
    /// `Ok(None)` when neither source is configured, which means any emoji
    /// name is accepted.
    pub fn emoji_whitelist(&self) -> Result<Option<BTreeSet<String>>, ConfigError> {
        if self.emoji_names.is_none() && self.emoji_names_file.is_none() {
            return Ok(None);
        }

        let mut names: BTreeSet<String> = self.emoji_names.iter().flatten().cloned().collect();
        if let Some(list_path) = &self.emoji_names_file {
            let content = std::fs::read_to_string(list_path).map_err(|source| {
                ConfigError::EmojiListReadError {
                    list_path: list_path.clone(),
                    source,
                }
            })?;
            names.extend(parse_emoji_list(&content));
        }
        Ok(Some(names))
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}

/// Parses an emoji list: one name per line, blank lines and `#` comments ignored.
/// Surrounding colons are optional, so `:smile:` and `smile` are the same entry.
pub fn parse_emoji_list(content: &str) -> impl Iterator<Item = String> + '_ {
    content
        .lines()
        .map(|line| line.split('#').next().unwrap_or_default().trim())
        .map(|line| line.trim_matches(':'))
        .filter(|name| !name.is_empty())
        .map(str::to_string)
}
