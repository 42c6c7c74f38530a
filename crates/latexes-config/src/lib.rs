//! Latexes Config
//!
//! This crate handles configuration loading for the latexes command-line
//! tool, using TOML configuration files.
//!
//! # Overview
//!
//! Configuration is loaded from platform-specific locations:
//! - Linux: `~/.config/latexes/config.toml`
//! - macOS: `~/Library/Application Support/latexes/config.toml`
//! - Windows: `%APPDATA%\latexes\config.toml`
//!
//! # Example
//!
//! ```no_run
//! use latexes_config::Config;
//!
//! let config = Config::load().unwrap();
//! println!("--save writes {}", config.output.file_name);
//! ```

mod output;

pub use output::{OutputConfig, OutputOverride};

use latexes_core::{LatexesError, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default TOML configuration string.
const DEFAULT_TOML: &str = r#"[output]
FileName = "documento_generado.tex"
Tokens   = false
"#;

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Keys set by a `--config` override; anything absent keeps its value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ConfigOverride {
    #[serde(default)]
    pub output: OutputOverride,
}

impl Config {
    /// Returns the default TOML configuration string.
    ///
    /// ```
    /// use latexes_config::Config;
    /// assert!(Config::default_toml().contains("[output]"));
    /// ```
    pub fn default_toml() -> &'static str {
        DEFAULT_TOML
    }

    /// Returns the platform-specific configuration file path.
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Returns the platform-specific configuration directory.
    pub fn config_dir() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "latexes")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Ensures the config file exists, creating it with defaults if not.
    pub fn ensure_config_file() -> Result<PathBuf> {
        let config_dir = Self::config_dir()
            .ok_or_else(|| LatexesError::Config("Could not determine config directory".into()))?;

        std::fs::create_dir_all(&config_dir)?;

        let config_path = config_dir.join("config.toml");
        if !config_path.exists() {
            std::fs::write(&config_path, DEFAULT_TOML)?;
        }

        Ok(config_path)
    }

    /// Load configuration from the default platform-specific path.
    ///
    /// If no config file exists, returns the default configuration.
    pub fn load() -> Result<Self> {
        if let Some(config_path) = Self::config_path() {
            if config_path.exists() {
                return Self::load_from(&config_path);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        read_toml(path)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(content: &str) -> Result<Self> {
        parse_toml(content)
    }

    /// Load configuration with an optional override file or inline TOML.
    ///
    /// 1. Load the base config from the default location
    /// 2. If `override_config` names an existing file, load and merge it
    /// 3. Otherwise parse it as TOML and merge it
    pub fn load_with_override(override_config: Option<&str>) -> Result<Self> {
        let mut config = Self::load()?;

        if let Some(override_str) = override_config {
            let override_path = Path::new(override_str);
            let override_config: ConfigOverride = if override_path.exists() {
                read_toml(override_path)?
            } else {
                parse_toml(override_str)?
            };
            config.merge(&override_config);
        }

        Ok(config)
    }

    /// Merge an override into this config; keys it sets win.
    pub fn merge(&mut self, other: &ConfigOverride) {
        self.output.merge(&other.output);
    }
}

fn read_toml<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| LatexesError::Config(format!("Parse error in {}: {}", path.display(), e)))
}

fn parse_toml<T: DeserializeOwned>(content: &str) -> Result<T> {
    toml::from_str(content).map_err(|e| LatexesError::Config(format!("Parse error: {}", e)))
}
