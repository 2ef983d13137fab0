//! Application layer - Use cases and orchestration

pub mod category_index;
pub mod init;
pub mod manage_config;
pub mod quote_store;
pub mod sync;
pub mod transfer;

pub use category_index::CategoryIndex;
pub use manage_config::ConfigService;
pub use quote_store::QuoteStore;
pub use sync::{SyncOutcome, SyncReport, SyncService};
pub use transfer::{export_to_file, import_from_file, EXPORT_FILE_NAME};
