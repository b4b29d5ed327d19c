//! Configuration management for Saberboard
//!
//! This module handles loading, parsing, and validation of configuration
//! files, plus the process-wide display locale consumed by the formatting
//! functions in [`crate::utils::datetime`].
//!
//! The locale lives in a shared cell so existing call sites can keep reading
//! a single configured value, but every formatting function also takes an
//! explicit locale override for callers that want to stay pure.

use anyhow::{Context, Result};
use chrono::Locale;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::RwLock;
use thiserror::Error;

use crate::utils::datetime::{DateStyle, TimeStyle};

/// Errors produced while resolving configuration values
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown locale tag: {0}")]
    UnknownLocale(String),
    #[error("unknown date style: {0}")]
    UnknownDateStyle(String),
    #[error("unknown time style: {0}")]
    UnknownTimeStyle(String),
    #[error("unknown log level: {0}")]
    UnknownLogLevel(String),
}

static CURRENT_LOCALE: Lazy<RwLock<Locale>> = Lazy::new(|| RwLock::new(Locale::en_US));

/// Get the currently configured display locale
pub fn current_locale() -> Locale {
    CURRENT_LOCALE.read().map(|locale| *locale).unwrap_or(Locale::en_US)
}

/// Set the process-wide display locale from a BCP-47 or POSIX tag
pub fn set_current_locale(tag: &str) -> Result<(), ConfigError> {
    let locale = locale_from_tag(tag)?;
    if let Ok(mut current) = CURRENT_LOCALE.write() {
        *current = locale;
    }
    Ok(())
}

/// Resolve an optional explicit locale against the configured one
pub fn resolve_locale(locale: Option<Locale>) -> Locale {
    locale.unwrap_or_else(current_locale)
}

/// Parse a locale tag, accepting both `en-US` and `en_US` spellings
pub fn locale_from_tag(tag: &str) -> Result<Locale, ConfigError> {
    let normalized = tag.replace('-', "_");
    Locale::try_from(normalized.as_str()).map_err(|_| ConfigError::UnknownLocale(tag.to_string()))
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
}

/// Display configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Display locale as a BCP-47 tag (e.g. "en-US", "de-DE")
    pub locale: String,
    /// Date style for absolute formatting: "full", "long", "medium" or "short"
    pub date_style: String,
    /// Time style for absolute formatting: "full", "long", "medium" or "short"
    pub time_style: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable logging
    pub enabled: bool,
    /// Log level: "error", "warn", "info", "debug" or "trace"
    pub level: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            locale: "en-US".to_string(),
            date_style: "short".to_string(),
            time_style: "medium".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from("saberboard.toml");
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("saberboard").join("config.toml");
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        locale_from_tag(&self.display.locale)?;
        self.display.date_style.parse::<DateStyle>()?;
        self.display.time_style.parse::<TimeStyle>()?;
        self.logging
            .level
            .parse::<log::LevelFilter>()
            .map_err(|_| ConfigError::UnknownLogLevel(self.logging.level.clone()))?;
        Ok(())
    }

    /// Push the configured locale into process state
    pub fn apply(&self) -> Result<(), ConfigError> {
        set_current_locale(&self.display.locale)?;
        log::info!("display locale set to {}", self.display.locale);
        Ok(())
    }
}
