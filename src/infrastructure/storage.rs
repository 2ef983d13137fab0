//! Durable key-value storage for quotes and the selected category

use crate::error::{QuoteError, Result};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

/// Key holding the JSON-serialized quote list
pub const QUOTES_KEY: &str = "quotes";

/// Key holding the selected category as a plain string
pub const SELECTED_CATEGORY_KEY: &str = "selectedCategory";

/// String key/value storage, synchronous and local
pub trait KeyValueStore {
    /// Read a value, `None` when the key was never written
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a value, replacing any previous one
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Delete a key; deleting a missing key is not an error
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// Stores each key as a file inside a directory
#[derive(Debug, Clone)]
pub struct FileSystemStore {
    dir: PathBuf,
}

impl FileSystemStore {
    pub fn new(dir: PathBuf) -> Self {
        FileSystemStore { dir }
    }

    fn key_path(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && !key.starts_with('.')
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(QuoteError::Config(format!("Invalid storage key: '{}'", key)));
        }
        Ok(self.dir.join(key))
    }
}

impl KeyValueStore for FileSystemStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(QuoteError::Io(e)),
        }
    }

    /// Write to a temp file in the same directory, then rename into place.
    ///
    /// On Windows, `rename` does not overwrite existing files, so the destination is removed first.
    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.key_path(key)?;

        if !self.dir.exists() {
            fs::create_dir_all(&self.dir)?;
        }

        let tmp_path = self
            .dir
            .join(format!(".{}.quotegen-tmp-{}", key, std::process::id()));
        fs::write(&tmp_path, value)?;

        if cfg!(windows) && path.exists() {
            fs::remove_file(&path)?;
        }

        fs::rename(&tmp_path, &path)?;
        debug!(key, bytes = value.len(), "persisted storage key");
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let path = self.key_path(key)?;
        match fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(QuoteError::Io(e)),
        }
    }
}

/// In-memory storage, used by tests and embedders without a filesystem
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
    writes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `set` calls so far
    pub fn write_count(&self) -> usize {
        self.writes
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.values.remove(key);
        Ok(())
    }
}
