//! Import and export of quote files

use crate::application::QuoteStore;
use crate::error::Result;
use crate::infrastructure::KeyValueStore;
use std::fs;
use std::path::Path;
use tracing::info;

/// File name offered for exports when no path is given
pub const EXPORT_FILE_NAME: &str = "quotes_export.json";

/// Write the pretty-printed quote list to `path`. Returns the number of quotes written.
pub fn export_to_file<S: KeyValueStore>(store: &QuoteStore<S>, path: &Path) -> Result<usize> {
    let document = store.export_json()?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    fs::write(path, document)?;
    info!(path = %path.display(), count = store.quotes().len(), "exported quotes");
    Ok(store.quotes().len())
}

/// Read a JSON document from `path` and append its quotes to the store
pub fn import_from_file<S: KeyValueStore>(store: &mut QuoteStore<S>, path: &Path) -> Result<usize> {
    let contents = fs::read_to_string(path)?;
    let count = store.import_json(&contents)?;
    info!(path = %path.display(), count, "imported quotes");
    Ok(count)
}
