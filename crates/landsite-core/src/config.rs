//! Configuration management for landsite services

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::{Error, Result};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Content API settings
    #[serde(default)]
    pub api: ApiConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Editing behaviour
    #[serde(default)]
    pub editing: EditingConfig,
}

/// Content API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the content API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format (json or pretty)
    #[serde(default = "default_log_format")]
    pub format: String,

    /// Log file path (optional)
    pub file: Option<PathBuf>,
}

/// Editing behaviour configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditingConfig {
    /// Keep unsaved local edits when fresh server content arrives
    #[serde(default)]
    pub preserve_dirty_edits: bool,

    /// Number of activity entries shown in the dashboard feed
    #[serde(default = "default_activity_feed_limit")]
    pub activity_feed_limit: usize,

    /// Seed starter content when the backing store is empty
    #[serde(default = "default_seed_content")]
    pub seed_content: bool,
}

fn default_base_url() -> String {
    "http://localhost:4000/api".to_string()
}

const fn default_timeout_seconds() -> u64 {
    30
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

const fn default_activity_feed_limit() -> usize {
    20
}

const fn default_seed_content() -> bool {
    true
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: None,
        }
    }
}

impl Default for EditingConfig {
    fn default() -> Self {
        Self {
            preserve_dirty_edits: false,
            activity_feed_limit: default_activity_feed_limit(),
            seed_content: default_seed_content(),
        }
    }
}

impl Config {
    /// Load configuration from a `landsite` file and `LANDSITE_*`
    /// environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] when a source cannot be read or the
    /// merged settings do not deserialize.
    pub fn load() -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name("landsite").required(false))
            .add_source(config::Environment::with_prefix("LANDSITE").separator("_"))
            .build()
            .map_err(|e| Error::Configuration {
                message: e.to_string(),
            })?;

        settings
            .try_deserialize()
            .map_err(|e| Error::Configuration {
                message: e.to_string(),
            })
    }
}
