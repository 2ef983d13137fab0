//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod http;
pub mod repository;
pub mod storage;

pub use config::Config;
pub use http::{HttpQuoteSource, QuoteSource};
pub use repository::{FileSystemRepository, QuoteRepository};
pub use storage::{FileSystemStore, KeyValueStore, MemoryStore, QUOTES_KEY, SELECTED_CATEGORY_KEY};
