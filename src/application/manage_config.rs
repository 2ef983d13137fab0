//! Config management use case

use crate::error::{QuoteError, Result};
use crate::infrastructure::config::parse_interval;
use crate::infrastructure::{Config, FileSystemRepository, QuoteRepository};

/// Service for managing quote book configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "endpoints" => Ok(config.endpoints.join(",")),
            "sync_interval" => Ok(config.sync_interval_secs.to_string()),
            "sync_category" => Ok(config.sync_category.clone()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(QuoteError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: endpoints, sync_interval, sync_category, created",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "endpoints" => {
                config.endpoints = value
                    .split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(String::from)
                    .collect();
            }
            "sync_interval" => {
                config.sync_interval_secs = parse_interval(value)?;
            }
            "sync_category" => {
                let category = value.trim();
                if category.is_empty() {
                    return Err(QuoteError::Config(
                        "sync_category must not be empty".to_string(),
                    ));
                }
                config.sync_category = category.to_string();
            }
            "created" => {
                return Err(QuoteError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(QuoteError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: endpoints, sync_interval, sync_category",
                    key
                )));
            }
        }

        self.repository.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}
