//! Domain layer - Quotes, categories, and import rules

pub mod category;
pub mod import;
pub mod quote;
pub mod remote;

pub use category::{distinct_categories, filtered_view, CategoryFilter, ALL_CATEGORIES};
pub use quote::{seed_quotes, Quote};
pub use remote::{RemoteRecord, DEFAULT_SYNC_CATEGORY};
