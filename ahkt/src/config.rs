//! Configuration module for the ahkt CLI.
//!
//! This module handles loading and managing configuration
//! settings for the ahkt application, including the keyword lists the
//! lexer classifies words with.

use dirs::{config_dir, home_dir};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use ahkl_lex::{KeywordClass, KeywordTables};

use crate::commands::common::OutputFormat;
use crate::error::{AhktError, Result};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "ahkt.toml";

/// Application configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Global verbose setting.
    #[serde(default)]
    pub verbose: bool,

    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,

    /// Keyword lists, one per classification category.
    #[serde(default)]
    pub keywords: KeywordsConfig,
}

/// Output configuration options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutputConfig {
    /// Format of printed results.
    #[serde(default)]
    pub format: OutputFormat,

    /// Whether log output may use colour.
    #[serde(default = "default_true")]
    pub color: bool,
}

/// The eight keyword lists, named after their categories.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct KeywordsConfig {
    /// Control-flow and declaration keywords.
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Built-in commands and functions.
    #[serde(default)]
    pub functions: Vec<String>,
    /// Built-in variables such as `@crlf`.
    #[serde(default)]
    pub macros: Vec<String>,
    /// Send-key names, written with their braces.
    #[serde(default)]
    pub send_keys: Vec<String>,
    /// Preprocessor directives.
    #[serde(default)]
    pub preprocessors: Vec<String>,
    /// Directives that style the rest of their line.
    #[serde(default)]
    pub special: Vec<String>,
    /// Expansion abbreviations.
    #[serde(default)]
    pub expand: Vec<String>,
    /// User-defined functions.
    #[serde(default)]
    pub udf: Vec<String>,
}

fn default_true() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            color: true,
        }
    }
}

impl KeywordsConfig {
    /// The configured words for `class`.
    pub fn words(&self, class: KeywordClass) -> &[String] {
        match class {
            KeywordClass::Keyword => &self.keywords,
            KeywordClass::Function => &self.functions,
            KeywordClass::Macro => &self.macros,
            KeywordClass::SendKey => &self.send_keys,
            KeywordClass::Preprocessor => &self.preprocessors,
            KeywordClass::Special => &self.special,
            KeywordClass::Expand => &self.expand,
            KeywordClass::Udf => &self.udf,
        }
    }

    /// Build lexer tables from the configured lists.
    ///
    /// Fails on an entry that is empty or contains whitespace.
    pub fn to_tables(&self) -> Result<KeywordTables> {
        let mut tables = KeywordTables::new();
        for class in KeywordClass::ALL {
            tables.set_words(class, self.words(class))?;
        }
        Ok(tables)
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches for configuration in the following order:
    /// 1. Current directory
    /// 2. `~/.config/ahkt/`
    /// 3. System configuration directory
    ///
    /// Returns the default configuration if no config file is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(AhktError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Check for config in current directory.
    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    /// Check for config in home directory.
    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("ahkt").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Check for config in system config directory.
    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("ahkt").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Find the configuration file in standard locations.
    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahkl_lex::StyleTag;
    use tempfile::TempDir;

    fn create_test_config() -> Config {
        Config {
            verbose: true,
            output: OutputConfig {
                format: OutputFormat::Json,
                color: false,
            },
            keywords: KeywordsConfig {
                keywords: vec!["if".to_string(), "else".to_string()],
                send_keys: vec!["{enter}".to_string()],
                ..KeywordsConfig::default()
            },
        }
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(!config.verbose);
        assert_eq!(config.output.format, OutputFormat::Text);
        assert!(config.output.color);
        assert!(config.keywords.keywords.is_empty());
    }

    #[test]
    fn test_config_serialize_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("ahkt.toml");

        let original_config = create_test_config();
        let content = toml::to_string_pretty(&original_config).unwrap();
        std::fs::write(&config_path, content).unwrap();

        let loaded_config = Config::load_from_path(&config_path).unwrap();
        assert_eq!(original_config, loaded_config);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("ahkt.toml");
        std::fs::write(&config_path, "[keywords]\nfunctions = [\"MsgBox\"]\n").unwrap();

        let config = Config::load_from_path(&config_path).unwrap();
        assert_eq!(config.output, OutputConfig::default());
        assert_eq!(config.keywords.functions, vec!["MsgBox".to_string()]);
    }

    #[test]
    fn test_malformed_config_is_toml_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("ahkt.toml");
        std::fs::write(&config_path, "[output\nformat = 1").unwrap();

        let result = Config::load_from_path(&config_path);
        assert!(matches!(result, Err(AhktError::Toml(_))));
    }

    #[test]
    fn test_load_from_nonexistent_path() {
        let result = Config::load_from_path(Path::new("/nonexistent/path/ahkt.toml"));
        assert!(matches!(result, Err(AhktError::Config(_))));
    }

    #[test]
    fn test_to_tables() {
        let config = create_test_config();
        let tables = config.keywords.to_tables().unwrap();
        assert_eq!(tables.classify("if", b' '), Some(KeywordClass::Keyword));
        assert!(tables.is_send_key("{Enter}"));
        assert_eq!(KeywordClass::Keyword.style(), StyleTag::Keyword);
    }

    #[test]
    fn test_to_tables_rejects_bad_entry() {
        let mut config = Config::default();
        config.keywords.macros = vec!["a b".to_string()];
        assert!(matches!(
            config.keywords.to_tables(),
            Err(AhktError::Table(_))
        ));
    }
}
