//! Initialize quote book use case

use crate::application::QuoteStore;
use crate::error::Result;
use crate::infrastructure::{Config, FileSystemRepository, QuoteRepository};
use std::fs;
use std::path::Path;

/// Initialize a new quote book at the specified path and seed the default quotes.
pub fn init(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let repo = FileSystemRepository::new(path.to_path_buf());
    repo.initialize()?;
    repo.save_config(&Config::new())?;

    let store = QuoteStore::load(repo.storage())?;

    println!("Initialized quotegen quote book at {}", path.display());
    println!("Quotes: {}", store.quotes().len());

    Ok(())
}
