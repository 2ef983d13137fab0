//! File system repository

use crate::error::{QuoteError, Result};
use crate::infrastructure::{Config, FileSystemStore};
use std::fs;
use std::path::{Path, PathBuf};

/// Abstract repository for quote book operations
pub trait QuoteRepository {
    /// Load configuration from .quotegen/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .quotegen/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .quotegen directory exists
    fn is_initialized(&self) -> bool;

    /// Create .quotegen directory structure
    fn initialize(&self) -> Result<()>;

    /// Key-value storage backing the quote list and selection
    fn storage(&self) -> FileSystemStore;
}

/// File system implementation of QuoteRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover quote book root by walking up from current directory
    /// First checks QUOTEGEN_ROOT environment variable, then falls back to discovery
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("QUOTEGEN_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_quotegen_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(QuoteError::Config(format!(
                    "QUOTEGEN_ROOT is set to '{}' but no .quotegen directory found. \
                    Run 'quotegen init' in that directory or unset QUOTEGEN_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover quote book root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_quotegen_dir(&current) {
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Err(QuoteError::NotQuoteDirectory(start.to_path_buf())),
            }
        }
    }

    fn has_quotegen_dir(path: &Path) -> bool {
        path.join(".quotegen").is_dir()
    }

    fn storage_dir(&self) -> PathBuf {
        self.root.join(".quotegen").join("storage")
    }
}

impl QuoteRepository for FileSystemRepository {
    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_quotegen_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let quotegen_dir = self.root.join(".quotegen");

        if quotegen_dir.exists() {
            return Err(QuoteError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&quotegen_dir)?;
        fs::create_dir(self.storage_dir())?;
        Ok(())
    }

    fn storage(&self) -> FileSystemStore {
        FileSystemStore::new(self.storage_dir())
    }
}
