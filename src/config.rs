//! Game configuration loaded from TOML.

use crate::games::word_scramble::{
    DEFAULT_MIN_LENGTH, Language, RootWord, SessionSettings, default_root_word,
};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Configuration for a word scramble game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Newline-separated list of root words.
    #[serde(default = "default_word_list")]
    word_list: PathBuf,

    /// Newline-separated list of recognized words.
    #[serde(default = "default_dictionary")]
    dictionary: PathBuf,

    /// Language code handed to the dictionary.
    #[serde(default)]
    language: Language,

    /// Minimum candidate length, in characters.
    #[serde(default = "default_min_length")]
    min_length: usize,

    /// Root word used when the word list is missing or empty.
    /// An empty string disables the fallback.
    #[serde(
        default = "default_fallback_word",
        deserialize_with = "deserialize_fallback_word"
    )]
    fallback_word: Option<RootWord>,

    /// Log file used while the terminal UI owns the screen.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

#[instrument]
fn default_word_list() -> PathBuf {
    PathBuf::from("start.txt")
}

#[instrument]
fn default_dictionary() -> PathBuf {
    PathBuf::from("/usr/share/dict/words")
}

#[instrument]
fn default_min_length() -> usize {
    DEFAULT_MIN_LENGTH
}

#[instrument]
fn default_fallback_word() -> Option<RootWord> {
    Some(default_root_word())
}

fn deserialize_fallback_word<'de, D>(deserializer: D) -> Result<Option<RootWord>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let word = String::deserialize(deserializer)?;
    if word.is_empty() {
        Ok(None)
    } else {
        RootWord::new(word).map(Some).map_err(serde::de::Error::custom)
    }
}

#[instrument]
fn default_log_file() -> PathBuf {
    PathBuf::from("word_scramble.log")
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            word_list: default_word_list(),
            dictionary: default_dictionary(),
            language: Language::default(),
            min_length: default_min_length(),
            fallback_word: default_fallback_word(),
            log_file: default_log_file(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(word_list = %config.word_list.display(), "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        if config.min_length == 0 {
            return Err(ConfigError::new("min_length must be at least 1"));
        }
        Ok(config)
    }

    /// Loads the file if it exists, otherwise returns defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!(
                "Config file not found at {}, using defaults",
                path.as_ref().display()
            );
            Ok(Self::default())
        }
    }

    /// Session rule parameters derived from this config.
    pub fn session_settings(&self) -> SessionSettings {
        SessionSettings::new(self.min_length, self.language.clone())
    }

    /// Overrides the word list path.
    pub fn with_word_list(mut self, path: PathBuf) -> Self {
        self.word_list = path;
        self
    }

    /// Overrides the dictionary path.
    pub fn with_dictionary(mut self, path: PathBuf) -> Self {
        self.dictionary = path;
        self
    }

    /// Disables the fallback root word.
    pub fn without_fallback(mut self) -> Self {
        self.fallback_word = None;
        self
    }

    /// Overrides the language.
    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
