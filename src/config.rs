// SPDX-FileCopyrightText: 2025 The textwarp authors
// SPDX-License-Identifier: GPL-3.0-or-later
//! Configuration file support.
//!
//! Settings are read from a `.textwarp.toml` file, found by walking up from
//! the working directory or given explicitly on the command line. Every
//! table and key is optional.
//!
//! ```toml
//! [analysis]
//! words_per_minute = 250
//! most_frequent_words = 5
//!
//! [entities]
//! context_window = 6
//!
//! [entities.absolute]
//! "textwarp" = "TextWarp"
//!
//! [oracle]
//! sentence_abbreviations = ["approx", "fig"]
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::analysis::{DEFAULT_MOST_FREQUENT_WORDS, DEFAULT_WORDS_PER_MINUTE};

/// The default configuration file name.
pub const CONFIG_FILE_NAME: &str = ".textwarp.toml";

/// Configuration for textwarp.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Analysis settings.
    pub analysis: AnalysisConfig,

    /// Entity casing settings.
    pub entities: EntitiesConfig,

    /// Tokenizer settings.
    pub oracle: OracleConfig,
}

/// Analysis settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Reading speed for the reading time estimate (default: 200).
    pub words_per_minute: u32,

    /// Entries listed by the most-frequent-words report (default: 10).
    pub most_frequent_words: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            words_per_minute: DEFAULT_WORDS_PER_MINUTE,
            most_frequent_words: DEFAULT_MOST_FREQUENT_WORDS,
        }
    }
}

/// Entity casing settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct EntitiesConfig {
    /// Words inspected on each side of a contextual entity when its lexicon
    /// entry sets no window of its own (default: 4).
    pub context_window: usize,

    /// Extra fixed casings, keyed by the lowercase entity text. These win
    /// over built-in entries with the same key.
    pub absolute: BTreeMap<String, String>,
}

impl Default for EntitiesConfig {
    fn default() -> Self {
        Self {
            context_window: 4,
            absolute: BTreeMap::new(),
        }
    }
}

/// Tokenizer settings.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct OracleConfig {
    /// Extra abbreviations whose period does not end a sentence.
    pub sentence_abbreviations: Vec<String>,
}

impl Config {
    /// Parse configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Load configuration from a file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        Self::from_toml(&content).map_err(|e| ConfigError::Parse(path.to_path_buf(), e))
    }

    /// Discover and load configuration by searching up the directory tree.
    ///
    /// Starting from `start_dir`, searches for `.textwarp.toml` in each parent
    /// directory until the filesystem root is reached. Returns `None` if no
    /// configuration file is found.
    pub fn discover(start_dir: &Path) -> Result<Option<(PathBuf, Self)>, ConfigError> {
        let mut current = start_dir.to_path_buf();
        loop {
            let config_path = current.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                let config = Self::from_file(&config_path)?;
                return Ok(Some((config_path, config)));
            }
            if !current.pop() {
                break;
            }
        }
        Ok(None)
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// I/O error reading the configuration file.
    Io(PathBuf, std::io::Error),
    /// Error parsing the TOML configuration.
    Parse(PathBuf, toml::de::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(path, err) => {
                write!(f, "failed to read {}: {}", path.display(), err)
            }
            ConfigError::Parse(path, err) => {
                write!(f, "failed to parse {}: {}", path.display(), err)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(_, err) => Some(err),
            ConfigError::Parse(_, err) => Some(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.analysis.words_per_minute, 200);
        assert_eq!(config.analysis.most_frequent_words, 10);
        assert_eq!(config.entities.context_window, 4);
        assert!(config.entities.absolute.is_empty());
        assert!(config.oracle.sentence_abbreviations.is_empty());
    }

    #[test]
    fn test_parse_empty_toml() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_parse_analysis_config() {
        let config = Config::from_toml(
            r#"
[analysis]
words_per_minute = 250
"#,
        )
        .unwrap();
        assert_eq!(config.analysis.words_per_minute, 250);
        assert_eq!(config.analysis.most_frequent_words, 10);
    }

    #[test]
    fn test_parse_entities_config() {
        let config = Config::from_toml(
            r#"
[entities]
context_window = 6

[entities.absolute]
"textwarp" = "TextWarp"
"acme corp" = "ACME Corp"
"#,
        )
        .unwrap();
        assert_eq!(config.entities.context_window, 6);
        assert_eq!(config.entities.absolute.len(), 2);
        assert_eq!(config.entities.absolute["acme corp"], "ACME Corp");
    }

    #[test]
    fn test_parse_oracle_config() {
        let config = Config::from_toml(
            r#"
[oracle]
sentence_abbreviations = ["approx", "fig."]
"#,
        )
        .unwrap();
        assert_eq!(config.oracle.sentence_abbreviations, vec!["approx", "fig."]);
    }

    #[test]
    fn test_parse_invalid_toml() {
        let result = Config::from_toml("[analysis]\nwords_per_minute = \"fast\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_from_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::from_file(&dir.path().join(CONFIG_FILE_NAME));
        assert!(matches!(result, Err(ConfigError::Io(_, _))));
    }

    #[test]
    fn test_from_file_parse_error_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[analysis\n").unwrap();
        let err = Config::from_file(&path).unwrap_err();
        assert!(err.to_string().contains(CONFIG_FILE_NAME));
    }

    #[test]
    fn test_discover_no_config() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::discover(dir.path()).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_discover_config_in_current_dir() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&config_path, "[analysis]\nmost_frequent_words = 3").unwrap();

        let (path, config) = Config::discover(dir.path()).unwrap().unwrap();
        assert_eq!(path, config_path);
        assert_eq!(config.analysis.most_frequent_words, 3);
    }

    #[test]
    fn test_discover_config_in_parent_dir() {
        let dir = tempfile::tempdir().unwrap();
        let sub_dir = dir.path().join("subdir").join("nested");
        std::fs::create_dir_all(&sub_dir).unwrap();
        let config_path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&config_path, "[entities]\ncontext_window = 2").unwrap();

        let (path, config) = Config::discover(&sub_dir).unwrap().unwrap();
        assert_eq!(path, config_path);
        assert_eq!(config.entities.context_window, 2);
    }
}
