//! Configuration file loading and management
//!
//! This module handles loading and parsing the gallery configuration from
//! `$XDG_CONFIG_HOME/tori-live/config.toml`. Every section is optional; a
//! missing file or section falls back to the built-in static catalogue.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use provider_remote::{RemoteSourceConfig, DEFAULT_ORIGIN, VIDEOS_PATH};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tori_live_core::format::parse_upload_date;

/// Main gallery configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GalleryConfig {
    /// Log level (trace, debug, info, warn, error)
    /// Default: "info"
    ///
    /// Passed through to the embedding application; this crate never
    /// installs a tracing subscriber itself.
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Which video source to use
    #[serde(default)]
    pub source: SourceConfig,
    /// Card rendering options
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Video source strategy
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// Built-in in-process catalogue
    #[default]
    Static,
    /// JSON document fetched from the site origin
    Remote,
}

/// Video source configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SourceConfig {
    /// Default: "static"
    pub kind: SourceKind,
    /// Site origin for the remote source
    /// Default: "http://localhost:5173"
    pub origin: String,
    /// Document path under the origin
    /// Default: "/data/bird-nest-videos.json"
    pub path: String,
    /// Request timeout in seconds
    /// Default: 30
    pub timeout_secs: u64,
}

/// Card rendering configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DisplayConfig {
    /// Pin "today" for relative upload dates (YYYY-MM-DD).
    /// If None, the local calendar date is used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_date: Option<String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            source: SourceConfig::default(),
            display: DisplayConfig::default(),
        }
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            kind: SourceKind::Static,
            origin: DEFAULT_ORIGIN.to_string(),
            path: VIDEOS_PATH.to_string(),
            timeout_secs: 30,
        }
    }
}

impl SourceConfig {
    /// Settings for the remote source.
    pub fn remote(&self) -> RemoteSourceConfig {
        RemoteSourceConfig {
            origin: self.origin.clone(),
            path: self.path.clone(),
            timeout_secs: self.timeout_secs,
        }
    }
}

impl DisplayConfig {
    /// The pinned reference date, if one is configured and valid.
    pub fn reference_date(&self) -> Option<NaiveDate> {
        self.reference_date.as_deref().and_then(parse_upload_date)
    }
}

impl GalleryConfig {
    /// Load configuration from the specified path
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to load config file: {}", path.display()))
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: GalleryConfig =
            toml::from_str(content).context("Failed to parse gallery config")?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from the default XDG config location
    ///
    /// A missing file is not an error; the defaults are returned instead.
    pub fn load_default() -> Result<Self> {
        let config_path = Self::default_config_path()?;

        if !config_path.exists() {
            tracing::debug!(
                "No config file at {}, using defaults",
                config_path.display()
            );
            return Ok(Self::default());
        }

        Self::load(&config_path)
    }

    /// Get the default configuration file path
    ///
    /// Returns `$XDG_CONFIG_HOME/tori-live/config.toml`
    pub fn default_config_path() -> Result<PathBuf> {
        let dirs = directories::ProjectDirs::from("", "tori-live", "tori-live")
            .context("Failed to determine project directories")?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&self.log_level.as_str()) {
            anyhow::bail!(
                "Invalid log_level: {}. Must be one of: {}",
                self.log_level,
                valid_log_levels.join(", ")
            );
        }

        if self.source.kind == SourceKind::Remote {
            provider_remote::document_url(&self.source.origin, &self.source.path)
                .with_context(|| format!("Invalid source.origin: {}", self.source.origin))?;
        }

        if self.source.timeout_secs == 0 {
            anyhow::bail!("source.timeout_secs must be greater than 0");
        }

        if let Some(ref date) = self.display.reference_date {
            if parse_upload_date(date).is_none() {
                anyhow::bail!(
                    "Invalid display.reference_date: {}. Expected YYYY-MM-DD",
                    date
                );
            }
        }

        Ok(())
    }
}
