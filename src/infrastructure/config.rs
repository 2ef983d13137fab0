//! Configuration management

use crate::domain::DEFAULT_SYNC_CATEGORY;
use crate::error::{QuoteError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Placeholder endpoints polled by `quotegen sync`
pub const DEFAULT_ENDPOINTS: [&str; 2] = [
    "https://jsonplaceholder.typicode.com/posts",
    "https://jsonplaceholder.typicode.com/comments",
];

/// Seconds between sync cycles in watch mode
pub const DEFAULT_SYNC_INTERVAL_SECS: u64 = 300;

fn default_endpoints() -> Vec<String> {
    DEFAULT_ENDPOINTS.iter().map(|s| s.to_string()).collect()
}

fn default_sync_interval_secs() -> u64 {
    DEFAULT_SYNC_INTERVAL_SECS
}

fn default_sync_category() -> String {
    DEFAULT_SYNC_CATEGORY.to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_endpoints")]
    pub endpoints: Vec<String>,
    #[serde(default = "default_sync_interval_secs")]
    pub sync_interval_secs: u64,
    #[serde(default = "default_sync_category")]
    pub sync_category: String,
    pub created: DateTime<Utc>,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Config {
            endpoints: default_endpoints(),
            sync_interval_secs: DEFAULT_SYNC_INTERVAL_SECS,
            sync_category: default_sync_category(),
            created: Utc::now(),
        }
    }

    /// Load config from .quotegen/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(".quotegen").join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                QuoteError::NotQuoteDirectory(path.to_path_buf())
            } else {
                QuoteError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| QuoteError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .quotegen/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let quotegen_dir = path.join(".quotegen");
        let config_path = quotegen_dir.join("config.toml");

        if !quotegen_dir.exists() {
            fs::create_dir(&quotegen_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| QuoteError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Sync interval, with QUOTEGEN_SYNC_INTERVAL (seconds) taking precedence
    pub fn get_sync_interval(&self) -> Result<Duration> {
        let secs = match std::env::var("QUOTEGEN_SYNC_INTERVAL") {
            Ok(raw) => parse_interval(&raw)?,
            Err(_) => self.sync_interval_secs,
        };
        Ok(Duration::from_secs(secs))
    }
}

/// Parse a positive number of seconds
pub fn parse_interval(raw: &str) -> Result<u64> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(secs),
        _ => Err(QuoteError::Config(format!(
            "Invalid sync interval: '{}'. Expected a positive number of seconds",
            raw
        ))),
    }
}
