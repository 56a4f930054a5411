//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::constants::{CONFIG_DIR_ENV, CONFIG_DIR_NAME};
use crate::i18n::Language;

/// Rendered size of the application logo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogoSize {
    /// Compact logo
    Small,
    /// Standard logo
    #[default]
    Medium,
    /// Prominent logo
    Large,
}

impl LogoSize {
    /// Size classes for the logo image.
    #[must_use]
    pub const fn classes(self) -> &'static str {
        match self {
            Self::Small => "h-6 w-6",
            Self::Medium => "h-8 w-8",
            Self::Large => "h-10 w-10",
        }
    }

    /// Lowercase name used in the config file.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }
}

impl fmt::Display for LogoSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogoSize {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "small" => Ok(Self::Small),
            "medium" => Ok(Self::Medium),
            "large" => Ok(Self::Large),
            other => anyhow::bail!(
                "Invalid logo size '{}' (expected small, medium or large)",
                other
            ),
        }
    }
}

/// Branding shown in the navigation bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemConfig {
    /// Application name shown next to the logo
    #[serde(alias = "app_name")]
    pub app_name: String,
    /// Logo image URL; a shield icon is shown when unset
    #[serde(default, alias = "app_logo_url")]
    pub app_logo_url: Option<String>,
    /// Logo size
    #[serde(default, alias = "app_logo_size")]
    pub app_logo_size: LogoSize,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            app_name: "Citizen Grievance Portal".to_string(),
            app_logo_url: None,
            app_logo_size: LogoSize::default(),
        }
    }
}

/// UI preferences configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct UiPreferences {
    /// Language used when none is chosen explicitly
    #[serde(default)]
    pub language: Language,
    /// Render the notifications dropdown in the navigation bar
    #[serde(default)]
    pub show_notifications: bool,
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/CivicUi/config.toml`
/// - macOS: `~/Library/Application Support/CivicUi/config.toml`
/// - Windows: `%APPDATA%\CivicUi\config.toml`
///
/// `CIVIC_UI_CONFIG_DIR` replaces the directory on every platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Branding
    #[serde(default)]
    pub system: SystemConfig,
    /// UI preferences
    #[serde(default)]
    pub ui: UiPreferences,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the config directory path.
    ///
    /// - Linux: `~/.config/CivicUi/`
    /// - macOS: `~/Library/Application Support/CivicUi/`
    /// - Windows: `%APPDATA%\CivicUi\`
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|v| !v.is_empty()) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(CONFIG_DIR_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Checks if the config file exists on disk.
    #[must_use]
    pub fn exists() -> bool {
        Self::config_file_path()
            .map(|path| path.exists())
            .unwrap_or(false)
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads configuration from an explicit path.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            tracing::debug!("No config at {}, using defaults", config_path.display());
            return Ok(Self::new());
        }

        let content = fs::read_to_string(config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Saves configuration to an explicit path.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(config_dir) = config_path.parent() {
            fs::create_dir_all(config_dir).context(format!(
                "Failed to create config directory: {}",
                config_dir.display()
            ))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;
        write_atomic(config_path, &content)
    }

    /// Validates configuration values.
    ///
    /// Checks:
    /// - `app_name` is not blank
    /// - `app_logo_url`, when set, is not blank
    pub fn validate(&self) -> Result<()> {
        if self.system.app_name.trim().is_empty() {
            anyhow::bail!("Application name must not be empty");
        }

        if let Some(url) = &self.system.app_logo_url {
            if url.trim().is_empty() {
                anyhow::bail!("Logo URL must not be empty when set");
            }
        }

        Ok(())
    }
}

/// Writes `content` to a sibling temp file, then renames it over `path`.
pub(crate) fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let temp_path = path.with_extension("toml.tmp");

    fs::write(&temp_path, content).context(format!(
        "Failed to write temp file: {}",
        temp_path.display()
    ))?;

    fs::rename(&temp_path, path).context(format!(
        "Failed to rename temp file to: {}",
        path.display()
    ))?;

    Ok(())
}
